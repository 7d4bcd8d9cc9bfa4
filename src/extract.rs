//! Interchange with the upstream glyph extractor.
//!
//! The extractor serializes each parsed document as a JSON dump of pages,
//! text items, and runs:
//!
//! ```text
//! { "Pages": [ { "Height": 49.5,
//!                "Texts": [ { "x": 2.1, "y": 5.0, "w": 12.4, "h": 0.7,
//!                             "R": [ { "T": "Some%20text" } ] } ] } ] }
//! ```
//!
//! Run text (`T`) is percent-encoded; a text item's runs concatenate into one
//! fragment. Malformed encodings fall back to the raw string rather than
//! raising, and missing numeric fields default to zero. Parsing the dump
//! itself can fail, which surfaces as [`Error::Extraction`].

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geometry::{Document, Page, TextFragment};

/// The seam to a real extractor: anything that can turn raw document bytes
/// into positioned fragments.
///
/// Implementations report sources they cannot read at all (corrupt,
/// encrypted, unsupported format) as [`Error::Extraction`].
pub trait FragmentExtractor {
    /// Extract a positioned-fragment document from raw source bytes.
    fn extract(&self, bytes: &[u8]) -> Result<Document>;
}

/// Extractor that reads the JSON page dump format described in the module
/// docs. This is the interchange path: the heavy PDF parsing happened
/// upstream, and only its positional output crosses this boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDumpExtractor;

impl FragmentExtractor for JsonDumpExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Document> {
        Ok(RawDocument::from_json_slice(bytes)?.into_document())
    }
}

/// A whole extractor dump: the page list as serialized upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    /// Pages in document order
    #[serde(rename = "Pages", default)]
    pub pages: Vec<RawPage>,
}

/// One page of the dump.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    /// Total vertical extent of the page
    #[serde(rename = "Height", default)]
    pub height: f32,
    /// Positioned text items on the page
    #[serde(rename = "Texts", default)]
    pub texts: Vec<RawText>,
}

/// One positioned text item: geometry plus its runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawText {
    /// X coordinate of the item's left edge
    #[serde(default)]
    pub x: f32,
    /// Y coordinate (top-left origin, y grows downward)
    #[serde(default)]
    pub y: f32,
    /// Width of the item
    #[serde(default)]
    pub w: f32,
    /// Height of the item; often absent in dumps, defaulting to zero so the
    /// engine's fallback line height takes over
    #[serde(default)]
    pub h: f32,
    /// Text runs, concatenated in order to form the item's content
    #[serde(rename = "R", default)]
    pub runs: Vec<RawRun>,
}

/// One percent-encoded text run inside a text item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRun {
    /// Percent-encoded run text
    #[serde(rename = "T", default)]
    pub text: String,
}

impl RawDocument {
    /// Parse an extractor dump from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Extraction`] when the bytes are not a well-formed
    /// dump (truncated upload, non-JSON payload, wrong shape).
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::Extraction(format!("malformed extractor dump: {}", e)))
    }

    /// Convert the dump into the engine's [`Document`] model, decoding run
    /// text along the way. Never fails: defaults already filled any missing
    /// fields during parsing.
    pub fn into_document(self) -> Document {
        let pages = self
            .pages
            .into_iter()
            .map(|raw| {
                let fragments = raw
                    .texts
                    .into_iter()
                    .map(|item| {
                        let text: String = item
                            .runs
                            .iter()
                            .map(|run| decode_run_text(&run.text))
                            .collect();
                        TextFragment::new(text, item.x, item.y, item.w, item.h)
                    })
                    .collect();
                Page::new(raw.height, fragments)
            })
            .collect();
        Document::new(pages)
    }
}

/// Percent-decode one run's text, falling back to the raw string when the
/// decoded bytes are not valid UTF-8.
fn decode_run_text(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            log::debug!("percent-decoding failed for run, keeping raw text");
            raw.to_string()
        },
    }
}
