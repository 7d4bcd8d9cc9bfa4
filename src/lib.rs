//! # pdf_reflow
//!
//! Geometric text reflow for PDF extraction pipelines.
//!
//! Upstream glyph extractors produce per-page lists of positioned text
//! fragments (x, y, width, height per run). This crate reconstructs coherent,
//! readable paragraph text from that geometry alone: it infers line breaks,
//! paragraph breaks, soft-hyphen joins, and inter-word spacing, and discards
//! running headers and footers.
//!
//! ## Core Features
//!
//! - **Margin exclusion**: drops fragments in the header/footer bands
//! - **Reading order**: top-to-bottom, left-to-right sort (single-column)
//! - **Line assembly**: vertical-gap classification into paragraph break,
//!   in-paragraph line break (with hyphen join), or same-line continuation
//! - **Whitespace normalization**: page markers and stray spacing collapse
//!   into clean paragraph-delimited output
//! - **Raw mode**: verbatim passthrough of extractor text, no reconstruction
//!
//! Multi-column and right-to-left layouts are out of scope: the reading-order
//! sort assumes a single column and will interleave columns.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_reflow::geometry::{Document, Page, TextFragment};
//!
//! let page = Page::new(
//!     1000.0,
//!     vec![
//!         TextFragment::new("Hello", 0.0, 500.0, 30.0, 10.0),
//!         TextFragment::new("world.", 35.0, 500.0, 36.0, 10.0),
//!     ],
//! );
//! let document = Document::new(vec![page]);
//!
//! let text = pdf_reflow::reflow(&document)?;
//! assert_eq!(text, "Hello world.");
//! # Ok::<(), pdf_reflow::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Fragment data model
pub mod geometry;

// Threshold configuration
pub mod config;

// The reflow engine
pub mod reflow;

// Extractor interchange (JSON dumps)
pub mod extract;

// Re-exports
pub use config::ReflowConfig;
pub use error::{Error, Result};
pub use extract::{FragmentExtractor, JsonDumpExtractor, RawDocument};
pub use geometry::{Document, Page, TextFragment};
pub use reflow::{raw_text, reflow, reflow_with_config};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on NaN coordinates.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
