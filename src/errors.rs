//! Custom error types.

use thiserror::Error;

/// A whole-document conversion failure. Per-cue problems never show up
/// here: malformed cues are dropped during extraction and reported as skip
/// diagnostics instead.
///
/// The `Display` message of each variant is written to be surfaced to the
/// end user unmodified.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Error from the `WebVTT` extractor.
    #[error(transparent)]
    Vtt(#[from] crate::webvtt::VttError),

    /// Error from the TTML/transcript XML extractor.
    #[error(transparent)]
    Xml(#[from] crate::xml::XmlError),
}
