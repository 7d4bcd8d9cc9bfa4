//! The text reflow engine.
//!
//! Reconstructs linear, readable text from positioned fragments in five
//! steps, applied per document:
//!
//! 1. **Margin exclusion** — per page, drop fragments inside the header and
//!    footer bands (fractions of page height, see [`ReflowConfig`]).
//! 2. **Reading-order sort** — ascending y, ties broken by ascending x.
//!    Assumes a single column; multi-column layouts interleave.
//! 3. **Line assembly** — walk the sorted fragments once, classifying each
//!    vertical gap as paragraph break, in-paragraph line break (joining
//!    soft-hyphenated words), or same-line continuation (inserting a space
//!    only over a significant horizontal gap).
//! 4. **Page join** — non-empty page texts are joined with a triple-newline
//!    marker. The marker only exists so the next step cannot swallow a
//!    legitimate page-ending paragraph break; it is itself normalized away.
//! 5. **Whitespace normalization** — strip spaces before newlines, collapse
//!    newline runs to paragraph breaks, collapse space runs, trim.
//!
//! The engine is pure and synchronous: it reads its input once, allocates
//! only local intermediate state, and retains nothing between calls.

use crate::config::ReflowConfig;
use crate::error::{Error, Result};
use crate::geometry::{Document, Page, TextFragment};
use crate::utils::safe_float_cmp;

/// Marker placed between consecutive non-empty pages before normalization.
const PAGE_BREAK: &str = "\n\n\n";

/// Reconstruct readable text from a document using the default thresholds.
///
/// Never fails on well-formed input: an empty document yields an empty
/// string, and a page with zero retained fragments contributes nothing.
///
/// # Errors
///
/// Returns [`Error::Reconstruction`] if any fragment or page carries
/// non-finite geometry.
///
/// # Examples
///
/// ```
/// use pdf_reflow::geometry::{Document, Page, TextFragment};
///
/// let page = Page::new(1000.0, vec![TextFragment::new("Body text", 0.0, 500.0, 50.0, 10.0)]);
/// let text = pdf_reflow::reflow(&Document::new(vec![page]))?;
/// assert_eq!(text, "Body text");
/// # Ok::<(), pdf_reflow::Error>(())
/// ```
pub fn reflow(document: &Document) -> Result<String> {
    reflow_with_config(document, &ReflowConfig::default())
}

/// Reconstruct readable text with caller-supplied thresholds.
///
/// See [`reflow`] for the contract and [`ReflowConfig`] for the tunables.
pub fn reflow_with_config(document: &Document, config: &ReflowConfig) -> Result<String> {
    let mut page_texts: Vec<String> = Vec::with_capacity(document.pages.len());

    for (index, page) in document.pages.iter().enumerate() {
        validate_page(index, page)?;
        let text = assemble_page(page, config);
        if !text.is_empty() {
            page_texts.push(text);
        }
    }

    let normalized = normalize_whitespace(&page_texts.join(PAGE_BREAK));
    log::debug!(
        "reflowed {} pages / {} fragments into {} chars",
        document.pages.len(),
        document.fragment_count(),
        normalized.len()
    );
    Ok(normalized)
}

/// Return the extractor's text verbatim, with no geometric reconstruction.
///
/// Fragments are concatenated in the order the extractor produced them and
/// pages are separated by a single newline. No margin exclusion, sorting, or
/// normalization is applied; this mode has no invariants beyond returning
/// what the extractor yielded.
pub fn raw_text(document: &Document) -> String {
    let pages: Vec<String> = document
        .pages
        .iter()
        .map(|page| {
            page.fragments
                .iter()
                .map(|f| f.text.as_str())
                .collect::<String>()
        })
        .collect();
    pages.join("\n")
}

/// Reject pages whose geometry cannot be walked.
fn validate_page(index: usize, page: &Page) -> Result<()> {
    if !page.height.is_finite() {
        return Err(Error::Reconstruction(format!(
            "page {} has non-finite height",
            index
        )));
    }
    if let Some(pos) = page.fragments.iter().position(|f| !f.is_finite()) {
        return Err(Error::Reconstruction(format!(
            "page {} fragment {} has non-finite geometry",
            index, pos
        )));
    }
    if page.height <= 0.0 && !page.fragments.is_empty() {
        // Margin bands degenerate to zero width and exclude everything.
        log::warn!(
            "page {} has non-positive height {}, all {} fragments fall in exclusion bands",
            index,
            page.height,
            page.fragments.len()
        );
    }
    Ok(())
}

/// Assemble one page's fragments into text (steps 1-3).
fn assemble_page(page: &Page, config: &ReflowConfig) -> String {
    // Step 1: header/footer exclusion bands
    let header_threshold = page.height * config.header_margin;
    let footer_threshold = page.height * config.footer_margin;
    let mut retained: Vec<&TextFragment> = page
        .fragments
        .iter()
        .filter(|f| f.y > header_threshold && f.y < footer_threshold)
        .collect();

    let dropped = page.fragments.len() - retained.len();
    if dropped > 0 {
        log::debug!("dropped {} header/footer fragments", dropped);
    }

    // Step 2: reading-order sort (top-to-bottom, then left-to-right)
    retained.sort_by(|a, b| safe_float_cmp(a.y, b.y).then(safe_float_cmp(a.x, b.x)));

    let Some(&first) = retained.first() else {
        return String::new();
    };

    // Step 3: gap classification
    let mut text = String::new();
    text.push_str(&first.text);
    let mut last = first;

    for &current in &retained[1..] {
        let line_height = if last.height > 0.0 {
            last.height
        } else {
            config.fallback_line_height
        };
        let dy = current.y - last.y;

        if dy > line_height * config.paragraph_gap_factor {
            text.push_str("\n\n");
        } else if dy > line_height * config.line_gap_factor {
            // New line within the paragraph. A trailing hyphen means the
            // word was split by the line break: join it back together.
            let trimmed = text.trim_end();
            if trimmed.ends_with('-') {
                let joined_len = trimmed.len() - 1;
                text.truncate(joined_len);
            } else {
                text.push(' ');
            }
        } else {
            // Same visual line: space only over a significant horizontal gap
            let horizontal_gap = current.x - last.right();
            if horizontal_gap > line_height * config.space_width_factor {
                text.push(' ');
            }
        }

        text.push_str(&current.text);
        last = current;
    }

    text
}

/// Step 5: whole-document whitespace normalization.
///
/// Single pass, order-sensitive: spaces preceding a newline are dropped,
/// newline runs collapse to at most two (turning the page-break marker into
/// a paragraph break), space runs collapse to one, and the result is
/// trimmed. Idempotent: normalizing the output again changes nothing.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut spaces = 0usize;
    let mut newlines = 0usize;

    for ch in text.chars() {
        match ch {
            ' ' => spaces += 1,
            '\n' => {
                // Spaces before a newline are trailing and dropped
                spaces = 0;
                newlines += 1;
            },
            _ => {
                if !out.is_empty() {
                    if newlines >= 2 {
                        out.push_str("\n\n");
                    } else if newlines == 1 {
                        out.push('\n');
                    }
                    if spaces > 0 {
                        out.push(' ');
                    }
                }
                spaces = 0;
                newlines = 0;
                out.push(ch);
            },
        }
    }

    // Pending trailing whitespace is dropped
    out
}
