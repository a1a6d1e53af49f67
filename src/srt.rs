//! SubRip/Srt serialization.
use std::io;

use crate::{cue::Cue, time::SrtTimePoint};

/// Render a cue list as one SRT text blob.
///
/// Blocks follow the `index\ntimestamp --> timestamp\ntext\n\n` framing,
/// numbered from 1 in list order; the trailing blank line of the final
/// block is trimmed off.
#[must_use]
pub fn to_string(cues: &[Cue]) -> String {
    let mut srt = String::new();
    for (idx, cue) in cues.iter().enumerate() {
        srt.push_str(&block(idx, cue));
    }
    srt.truncate(srt.trim_end().len());
    srt
}

/// Write subtitles in srt format
///
/// # Errors
///
/// Will return `Err` if writing in `writer` return an `Err`.
pub fn write_srt(cues: &[Cue], writer: &mut impl io::Write) -> Result<(), io::Error> {
    cues.iter()
        .enumerate()
        .try_for_each(|(idx, cue)| writer.write_all(block(idx, cue).as_bytes()))
}

/// One SRT block for the cue at zero-based position `idx`.
fn block(idx: usize, cue: &Cue) -> String {
    let line_num = idx + 1;
    let start = SrtTimePoint::from(cue.span.start);
    let end = SrtTimePoint::from(cue.span.end);
    format!("{line_num}\n{start} --> {end}\n{}\n\n", cue.text)
}
