//! `WebVTT` cue extraction.
//!
//! A line-oriented scanner: skip the header preamble, look for
//! `start --> end` timing lines, then collect the following non-blank lines
//! as the cue body. Lines that precede a timing line (cue identifiers, stray
//! settings) are never collected, and a discarded timing line takes its text
//! block down with it since collection only starts after a valid header.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use thiserror::Error;

use crate::{
    cue::{Cue, Extraction, SkipReason},
    text,
    time::{parse_vtt, TimeSpan},
};

/// Error from `WebVTT` cue extraction.
#[derive(Debug, Error)]
pub enum VttError {
    /// The document scanned cleanly, but not a single cue survived.
    #[error("parsed the WebVTT file successfully, but found no convertible subtitle entries")]
    NoConvertibleCues,
}

/// Token a `WebVTT` document leads with.
pub const VTT_HEADER: &str = "WEBVTT";

/// Extract the cues of a `WebVTT` document.
///
/// Malformed cues (unparseable or non-positive timing, empty text after
/// markup removal) are dropped and recorded in the returned
/// [`Extraction::skipped`] list; they do not abort the extraction.
///
/// # Errors
/// [`VttError::NoConvertibleCues`] if the whole document yields zero cues,
/// whether it was empty, header-only or entirely malformed.
#[profiling::function]
pub fn extract(content: &str) -> Result<Extraction, VttError> {
    static CUE_TIMING: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\S+)\s+-->\s+(\S+)").unwrap());

    let lines: Vec<&str> = content.lines().collect();
    let mut out = Extraction::default();
    let mut i = 0;

    // Header, settings and NOTE lines before the first cue.
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() || line.starts_with(VTT_HEADER) || line.contains("NOTE") {
            i += 1;
        } else {
            break;
        }
    }

    while i < lines.len() {
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
        let Some(&header) = lines.get(i) else { break };

        let span = if let Some(cap) = CUE_TIMING.captures(header) {
            match (parse_vtt(&cap[1]), parse_vtt(&cap[2])) {
                (Some(start), Some(end)) if end > start => TimeSpan::new(start, end),
                (Some(_), Some(_)) => {
                    out.skip(SkipReason::NonPositiveDuration, header);
                    i += 1;
                    continue;
                }
                _ => {
                    out.skip(SkipReason::InvalidTiming, header);
                    i += 1;
                    continue;
                }
            }
        } else if header.contains("-->") {
            // An arrow line whose sides do not even scan as two tokens.
            out.skip(SkipReason::InvalidTiming, header);
            i += 1;
            continue;
        } else {
            // Not a timing line: a cue identifier or other stray content.
            i += 1;
            continue;
        };
        i += 1;

        let mut body = Vec::new();
        while i < lines.len() && !lines[i].trim().is_empty() {
            body.push(lines[i]);
            i += 1;
        }

        if body.is_empty() {
            out.skip(SkipReason::EmptyText, header);
            continue;
        }
        let cleaned = text::strip_markup(&body.join("\n"));
        if cleaned.is_empty() {
            out.skip(SkipReason::EmptyText, header);
            continue;
        }
        out.cues.push(Cue { span, text: cleaned });
    }

    if out.cues.is_empty() {
        return Err(VttError::NoConvertibleCues);
    }
    trace!("extracted {} cues from WebVTT content", out.cues.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimePoint;

    fn msecs(span: TimeSpan) -> (i64, i64) {
        (span.start.msecs(), span.end.msecs())
    }

    #[test]
    fn basic_document() {
        let vtt = "WEBVTT\n\n\
                   00:00.000 --> 00:03.000\nHello, world!\n\n\
                   00:03.500 --> 00:07.000\nThis is a test subtitle.";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 2);
        assert!(out.skipped.is_empty());
        assert_eq!(msecs(out.cues[0].span), (0, 3000));
        assert_eq!(out.cues[0].text, "Hello, world!");
        assert_eq!(msecs(out.cues[1].span), (3500, 7000));
        assert_eq!(out.cues[1].text, "This is a test subtitle.");
    }

    #[test]
    fn inline_markup_is_stripped() {
        let vtt = "WEBVTT\n\n00:00.000 --> 00:03.000\nHello, <b>bold</b> world!";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 1);
        assert_eq!(out.cues[0].text, "Hello, bold world!");
    }

    #[test]
    fn multi_line_bodies_keep_their_lines() {
        let vtt = "WEBVTT\n\n00:00.000 --> 00:03.000\nLine 1\nLine 2\nLine 3";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 1);
        assert_eq!(out.cues[0].text, "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn cue_identifier_lines_are_not_collected() {
        let vtt = "WEBVTT\n\nintro\n00:00.000 --> 00:03.000\nHello";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 1);
        assert_eq!(out.cues[0].text, "Hello");
    }

    #[test]
    fn unparseable_header_discards_its_text_block() {
        env_logger::init();

        let vtt = "WEBVTT\n\n\
                   invalid time --> 00:03.000\nShould be skipped\n\n\
                   00:03.500 --> 00:07.000\nValid entry";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 1);
        assert_eq!(out.cues[0].text, "Valid entry");
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].reason, SkipReason::InvalidTiming);
        assert_eq!(out.skipped[0].context, "invalid time --> 00:03.000");
    }

    #[test]
    fn non_positive_duration_is_dropped() {
        let vtt = "WEBVTT\n\n\
                   00:05.000 --> 00:05.000\nZero length\n\n\
                   00:06.000 --> 00:07.000\nKept";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 1);
        assert_eq!(out.cues[0].text, "Kept");
        assert_eq!(out.skipped[0].reason, SkipReason::NonPositiveDuration);
    }

    #[test]
    fn markup_only_body_is_dropped() {
        let vtt = "WEBVTT\n\n\
                   00:00.000 --> 00:03.000\n<b></b>\n\n\
                   00:03.500 --> 00:07.000\nKept";
        let out = extract(vtt).unwrap();

        assert_eq!(out.cues.len(), 1);
        assert_eq!(out.skipped[0].reason, SkipReason::EmptyText);
    }

    #[test]
    fn header_and_note_only_is_an_error() {
        let vtt = "WEBVTT\n\nNOTE This is just a note";
        assert!(matches!(extract(vtt), Err(VttError::NoConvertibleCues)));
    }
}
