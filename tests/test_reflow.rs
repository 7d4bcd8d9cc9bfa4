//! Integration tests for the geometric reflow engine.
//!
//! These tests drive the public API with mock fragment data simulating
//! realistic single-column page layouts.

use pdf_reflow::{
    raw_text, reflow, reflow_with_config, Document, Error, Page, ReflowConfig, TextFragment,
};

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

/// Create a mock fragment with the standard 10-unit line height.
fn frag(text: &str, x: f32, y: f32, width: f32) -> TextFragment {
    TextFragment::new(text, x, y, width, 10.0)
}

/// Lay out a paragraph of lines, one fragment per line, 12 units of leading.
fn paragraph(lines: &[&str], top: f32) -> Vec<TextFragment> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| frag(line, 0.0, top + i as f32 * 12.0, line.len() as f32 * 5.0))
        .collect()
}

/// A 1000-unit-high page.
fn page(fragments: Vec<TextFragment>) -> Page {
    Page::new(1000.0, fragments)
}

// ============================================================================
// End-to-End Document Reconstruction
// ============================================================================

#[test]
fn test_book_page_reconstruction() {
    // A page with a running header, two body paragraphs (one line broken
    // mid-word), and a page-number footer.
    let mut fragments = vec![frag("A TALE OF TWO CITIES", 300.0, 15.0, 120.0)];
    fragments.extend(paragraph(
        &["It was the best of times, it was the", "worst of times."],
        200.0,
    ));
    fragments.extend(paragraph(
        &["It was the age of wis-", "dom, it was the age of foolishness."],
        400.0,
    ));
    fragments.push(frag("17", 490.0, 985.0, 12.0));

    let text = reflow(&Document::new(vec![Page::new(1000.0, fragments)])).unwrap();

    assert_eq!(
        text,
        "It was the best of times, it was the worst of times.\n\n\
         It was the age of wisdom, it was the age of foolishness."
    );
}

#[test]
fn test_multi_page_document() {
    let doc = Document::new(vec![
        page(paragraph(&["First page ends with a full", "paragraph."], 500.0)),
        page(paragraph(&["Second page text."], 500.0)),
    ]);
    let text = reflow(&doc).unwrap();
    assert_eq!(
        text,
        "First page ends with a full paragraph.\n\nSecond page text."
    );
}

#[test]
fn test_empty_document_yields_empty_string() {
    assert_eq!(reflow(&Document::default()).unwrap(), "");
}

#[test]
fn test_document_of_empty_pages_yields_empty_string() {
    let doc = Document::new(vec![page(vec![]), page(vec![])]);
    assert_eq!(reflow(&doc).unwrap(), "");
}

// ============================================================================
// Header/Footer Exclusion
// ============================================================================

#[test]
fn test_header_footer_exclusion() {
    let doc = Document::new(vec![page(vec![
        frag("header", 0.0, 10.0, 30.0),
        frag("body", 0.0, 500.0, 20.0),
        frag("footer", 0.0, 990.0, 30.0),
    ])]);
    assert_eq!(reflow(&doc).unwrap(), "body");
}

#[test]
fn test_deep_margins_preset_drops_more() {
    // y=100 clears the default header band but not the deep one
    let doc = Document::new(vec![page(vec![
        frag("subtitle", 0.0, 100.0, 40.0),
        frag("body", 0.0, 500.0, 20.0),
    ])]);

    assert_eq!(reflow(&doc).unwrap(), "subtitle\n\nbody");

    let deep = reflow_with_config(&doc, &ReflowConfig::deep_margins()).unwrap();
    assert_eq!(deep, "body");
}

// ============================================================================
// Gap Classification
// ============================================================================

#[test]
fn test_paragraph_break_spec_geometry() {
    // A at y=100 h=10, B at y=130: dy=30 > 17
    let doc = Document::new(vec![page(vec![
        frag("A", 0.0, 100.0, 5.0),
        frag("B", 0.0, 130.0, 5.0),
    ])]);
    assert_eq!(reflow(&doc).unwrap(), "A\n\nB");
}

#[test]
fn test_hyphen_join_spec_geometry() {
    // dy=12 in (2, 17]: line break joins the hyphenated word
    let doc = Document::new(vec![page(vec![
        frag("inter-", 0.0, 100.0, 30.0),
        frag("national", 0.0, 112.0, 40.0),
    ])]);
    let text = reflow(&doc).unwrap();
    assert_eq!(text, "international");
    assert!(!text.contains('-'));
    assert!(!text.contains(' '));
}

#[test]
fn test_same_line_adjacency_spec_geometry() {
    // hgap = 1 with threshold 2: concatenate directly
    let doc = Document::new(vec![page(vec![
        frag("AB", 0.0, 500.0, 10.0),
        frag("CD", 11.0, 500.0, 10.0),
    ])]);
    assert_eq!(reflow(&doc).unwrap(), "ABCD");

    // hgap = 5 > 2: single space
    let doc = Document::new(vec![page(vec![
        frag("AB", 0.0, 500.0, 10.0),
        frag("CD", 15.0, 500.0, 10.0),
    ])]);
    assert_eq!(reflow(&doc).unwrap(), "AB CD");
}

#[test]
fn test_unsorted_input_is_sorted_before_assembly() {
    let doc = Document::new(vec![page(vec![
        frag("last.", 0.0, 524.0, 25.0),
        frag("comes", 30.0, 500.0, 25.0),
        frag("Sorting", 0.0, 500.0, 25.0),
        frag("first, reading", 0.0, 512.0, 60.0),
    ])]);
    assert_eq!(reflow(&doc).unwrap(), "Sorting comes first, reading last.");
}

// ============================================================================
// Configuration Overrides
// ============================================================================

#[test]
fn test_paragraph_gap_factor_override() {
    // dy=30, h=10: paragraph break at the default 1.7 but a plain line
    // break once the factor is raised past 3.0
    let doc = Document::new(vec![page(vec![
        frag("one", 0.0, 100.0, 15.0),
        frag("two", 0.0, 130.0, 15.0),
    ])]);

    assert_eq!(reflow(&doc).unwrap(), "one\n\ntwo");

    let loose = ReflowConfig::default().with_paragraph_gap_factor(3.5);
    assert_eq!(reflow_with_config(&doc, &loose).unwrap(), "one two");
}

#[test]
fn test_space_width_factor_override() {
    // hgap = 5, h = 10: space at default 0.2, none at 0.6
    let doc = Document::new(vec![page(vec![
        frag("AB", 0.0, 500.0, 10.0),
        frag("CD", 15.0, 500.0, 10.0),
    ])]);

    let tight = ReflowConfig::default().with_space_width_factor(0.6);
    assert_eq!(reflow_with_config(&doc, &tight).unwrap(), "ABCD");
}

// ============================================================================
// Failure Signaling
// ============================================================================

#[test]
fn test_non_finite_geometry_surfaces_reconstruction_error() {
    let doc = Document::new(vec![page(vec![TextFragment::new(
        "bad",
        0.0,
        f32::NAN,
        10.0,
        10.0,
    )])]);
    match reflow(&doc) {
        Err(Error::Reconstruction(reason)) => assert!(reason.contains("fragment")),
        other => panic!("expected reconstruction error, got {:?}", other),
    }
}

// ============================================================================
// Raw Passthrough Mode
// ============================================================================

#[test]
fn test_raw_mode_skips_reconstruction() {
    let doc = Document::new(vec![
        page(vec![
            frag("header ", 0.0, 10.0, 30.0),
            frag("out  of   order", 0.0, 990.0, 60.0),
        ]),
        page(vec![frag("second page", 0.0, 500.0, 50.0)]),
    ]);
    // Extractor order and spacing preserved verbatim, margins kept
    assert_eq!(raw_text(&doc), "header out  of   order\nsecond page");
}
