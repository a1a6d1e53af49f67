//! Subtitle timing: millisecond offsets, spans, timestamp parsing and
//! SRT timestamp formatting.
mod parse;
mod time_point;
mod time_span;

pub use parse::{parse_generic, parse_vtt};
pub use time_point::{SrtTimePoint, TimePoint};
pub use time_span::TimeSpan;
