//! Format detection and dispatch to the per-format extractors.
//!
//! Detection is deliberately narrow: content leading with the `WEBVTT`
//! token takes the WebVTT path, everything else is assumed to be XML-shaped
//! and fails with a malformed-document error if it is not.

use log::trace;

use crate::{cue::CueSkip, errors::ConvertError, srt, webvtt, xml};

/// File extensions the file-discovery collaborator filters candidate
/// input files on. The crate itself only ever sees file content.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["ttml", "xml", "vtt", "srt", "txt"];

/// Conventional extension of the converted output file, next to the input
/// with the same base name. Writing it out is the caller's business.
pub const OUTPUT_EXTENSION: &str = "srt";

/// Outcome of a successful conversion.
#[derive(Debug)]
pub struct Conversion {
    /// The SRT text blob, trailing blank lines trimmed.
    pub srt: String,
    /// Cue candidates that were dropped along the way, in source order.
    pub skipped: Vec<CueSkip>,
}

/// Convert subtitle file content (WebVTT, TTML or transcript XML) to SRT.
///
/// Malformed individual cues are dropped, not fatal; they are reported
/// through [`Conversion::skipped`].
///
/// # Errors
/// A [`ConvertError`] only for whole-document failures: XML that does not
/// parse, a document without recognizable subtitle structure, or a document
/// from which zero cues survive. The message is meant to be shown to the
/// end user as-is.
#[profiling::function]
pub fn to_srt(content: &str) -> Result<Conversion, ConvertError> {
    let extraction = if content.trim_start().starts_with(webvtt::VTT_HEADER) {
        trace!("content detected as WebVTT");
        webvtt::extract(content)?
    } else {
        trace!("content assumed to be XML");
        xml::extract(content)?
    };

    Ok(Conversion {
        srt: srt::to_string(&extraction.cues),
        skipped: extraction.skipped,
    })
}

/// Like [`to_srt`], discarding the skip diagnostics.
///
/// # Errors
/// Same as [`to_srt`].
pub fn to_srt_string(content: &str) -> Result<String, ConvertError> {
    to_srt(content).map(|conversion| conversion.srt)
}
