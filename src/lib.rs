//! Convert text-based subtitle/caption files into `SubRip` (SRT) text.
//!
//! Three source formats are recognized:
//! - `WebVTT`: plain text cues under a `WEBVTT` header;
//! - TTML: XML captions as `<p begin=".." end="..">` paragraphs;
//! - transcript XML: `<transcript>`/`<text start=".." dur="..">` entries,
//!   as emitted by auto-generated video transcripts.
//!
//! Conversion is a pure function of the input string: callers read the file
//! themselves, hand over its content and decide what to do with the
//! returned blob. Malformed cues are dropped and reported, not fatal; only
//! whole-document problems come back as errors.
//!
//! ## Example code
//!
//! ```
//! let vtt = "WEBVTT\n\n00:00.000 --> 00:03.000\nHello, <b>bold</b> world!";
//! let conversion = caption2srt::convert::to_srt(vtt).unwrap();
//! assert_eq!(
//!     conversion.srt,
//!     "1\n00:00:00,000 --> 00:00:03,000\nHello, bold world!"
//! );
//! assert!(conversion.skipped.is_empty());
//! ```

pub mod convert;
pub mod cue;
mod errors;
pub mod srt;
pub mod text;
pub mod time;
pub mod webvtt;
pub mod xml;

pub use convert::{to_srt, to_srt_string, Conversion};
pub use errors::ConvertError;
