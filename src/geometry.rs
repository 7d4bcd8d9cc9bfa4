//! Positioned-fragment data model consumed by the reflow engine.
//!
//! Coordinates use a top-left origin with y increasing downward, in the
//! extractor's page-local units. A fragment's `height` doubles as the unit of
//! vertical measurement when classifying line and paragraph gaps.

use serde::{Deserialize, Serialize};

/// One atomic run of text extracted at a specific position on a page.
///
/// The text is already decoded to plain characters; percent-decoding of
/// encoded extractor output happens at the interchange boundary
/// (see [`crate::extract`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Decoded text content of the run
    pub text: String,
    /// X coordinate of the run's left edge
    pub x: f32,
    /// Y coordinate of the run (top-left origin, y grows downward)
    pub y: f32,
    /// Width of the run
    pub width: f32,
    /// Approximate glyph/line height; zero means unknown and triggers the
    /// configured fallback when used as a divisor
    pub height: f32,
}

impl TextFragment {
    /// Create a new fragment from text and bounding geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::geometry::TextFragment;
    ///
    /// let fragment = TextFragment::new("word", 10.0, 20.0, 24.0, 12.0);
    /// assert_eq!(fragment.text, "word");
    /// assert_eq!(fragment.right(), 34.0);
    /// ```
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Check that every geometric field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// One page of a document: its vertical extent plus the fragments on it.
///
/// Constructed once by the upstream extractor, consumed exactly once by the
/// engine. The height is used to compute the header/footer exclusion bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Total vertical extent of the page
    pub height: f32,
    /// Fragments on the page, in extractor order (not necessarily sorted)
    pub fragments: Vec<TextFragment>,
}

impl Page {
    /// Create a new page.
    pub fn new(height: f32, fragments: Vec<TextFragment>) -> Self {
        Self { height, fragments }
    }

    /// Check whether the page carries no fragments at all.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// An ordered sequence of pages for one extracted document.
///
/// The engine is pure over this type: reflow reads it once and retains
/// nothing, so independent documents can be processed concurrently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new document.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::geometry::{Document, Page};
    ///
    /// let document = Document::new(vec![Page::new(792.0, vec![])]);
    /// assert_eq!(document.pages.len(), 1);
    /// assert_eq!(document.fragment_count(), 0);
    /// ```
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Total number of fragments across all pages.
    pub fn fragment_count(&self) -> usize {
        self.pages.iter().map(|p| p.fragments.len()).sum()
    }
}
