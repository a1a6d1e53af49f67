//! Timed caption entries and per-cue skip diagnostics.

use core::fmt;

use log::warn;

use crate::time::TimeSpan;

/// One timed caption entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// When the cue is shown.
    pub span: TimeSpan,
    /// Caption text, already normalized for SRT output.
    pub text: String,
}

/// Why an extractor dropped a cue candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A timestamp was present but could not be parsed.
    InvalidTiming,
    /// A required timing attribute was absent (or empty).
    MissingTiming,
    /// The end time was not strictly after the start time.
    NonPositiveDuration,
    /// No text survived normalization.
    EmptyText,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::InvalidTiming => "unparseable time value",
            Self::MissingTiming => "missing time attribute",
            Self::NonPositiveDuration => "end time not after start time",
            Self::EmptyText => "empty text after cleanup",
        };
        f.write_str(reason)
    }
}

/// Record of one dropped cue candidate.
#[derive(Debug, Clone)]
pub struct CueSkip {
    /// Where the drop happened: the offending cue header line or element.
    pub context: String,
    /// Why the candidate was dropped.
    pub reason: SkipReason,
}

/// What an extractor hands back: the surviving cues in source order, plus a
/// record of every candidate it dropped. Dropped candidates never abort the
/// conversion and do not reserve an SRT index.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Surviving cues, in the order the source emitted them.
    pub cues: Vec<Cue>,
    /// Dropped candidates, in the order they were encountered.
    pub skipped: Vec<CueSkip>,
}

impl Extraction {
    pub(crate) fn skip(&mut self, reason: SkipReason, context: &str) {
        warn!("skipping cue ({reason}): {context}");
        self.skipped.push(CueSkip {
            context: context.to_owned(),
            reason,
        });
    }
}
