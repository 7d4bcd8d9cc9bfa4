//! Error types for the reflow library.
//!
//! Two failure kinds are surfaced to callers, matching the two stages of the
//! pipeline: the upstream extraction of positioned fragments, and the
//! geometric reconstruction of text from them. Neither is retried — both
//! stages are deterministic over fixed input.

/// Result type alias for reflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning extracted fragments into text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream extractor could not parse the source document at all
    /// (corrupt, encrypted, or an unsupported format). Produced at the
    /// interchange boundary, never by the engine itself.
    #[error("Error parsing PDF file. It might be corrupted or protected: {0}")]
    Extraction(String),

    /// Extracted data was present but had an unexpected shape while walking
    /// fragments (non-finite coordinates, missing page geometry).
    #[error("Failed to process text from PDF: {0}")]
    Reconstruction(String),
}
