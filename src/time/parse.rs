//! Timestamp string parsing.
//!
//! Two parsers live here. [`parse_generic`] accepts the notations found in
//! TTML and transcript timing attributes; [`parse_vtt`] accepts only the
//! stricter WebVTT cue-timing notation. Both return `None` for text they do
//! not understand; callers treat that as "skip this cue", not as an error.
//!
//! Neither parser range-checks field values: `"25:61:99,999"` evaluates to
//! whatever the arithmetic yields. Tolerating such inputs is intended.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use super::TimePoint;

/// Milliseconds from a 1-3 digit fractional field, right-padded with
/// zeros: `.5` reads as 500 ms, not 5 ms.
fn frac_msecs(digits: &str) -> Option<i64> {
    let value: i64 = digits.parse().ok()?;
    Some(value * 10_i64.pow(3_u32.saturating_sub(digits.len() as u32)))
}

/// Parse a timestamp in any of the notations used by TTML and transcript
/// timing attributes, returning the offset in milliseconds.
///
/// Accepted, in priority order:
/// - `HH:MM:SS.mmm` / `HH:MM:SS,mmm`: the hour field may have more than
///   two digits, the fraction 1 to 3;
/// - `SSS.mmms` / `SSSs`: seconds with a literal `s` suffix, e.g. `26.542s`;
/// - bare seconds as a decimal number, e.g. `26.542` or `123`.
///
/// Anything else, including empty or blank text, yields `None`.
#[must_use]
pub fn parse_generic(text: &str) -> Option<TimePoint> {
    static CLOCK: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d{2,}):(\d{2}):(\d{2})[.,](\d{1,3})$").unwrap());
    static SUFFIXED_SECS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d+)(?:[.,](\d{1,3}))?s$").unwrap());

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(cap) = CLOCK.captures(text) {
        let hours: i64 = cap[1].parse().ok()?;
        let mins: i64 = cap[2].parse().ok()?;
        let secs: i64 = cap[3].parse().ok()?;
        // The hour field has no digit ceiling, so the arithmetic is checked.
        let msecs = hours
            .checked_mul(3_600_000)?
            .checked_add(mins * 60_000 + secs * 1000)?
            .checked_add(frac_msecs(&cap[4])?)?;
        return Some(TimePoint::from_msecs(msecs));
    }

    if let Some(cap) = SUFFIXED_SECS.captures(text) {
        let mut msecs = cap[1].parse::<i64>().ok()?.checked_mul(1000)?;
        if let Some(frac) = cap.get(2) {
            msecs = msecs.checked_add(frac_msecs(frac.as_str())?)?;
        }
        return Some(TimePoint::from_msecs(msecs));
    }

    if let Ok(secs) = text.parse::<f64>() {
        if secs.is_finite() {
            return Some(TimePoint::from_msecs((secs * 1000.0).round() as i64));
        }
    }

    warn!("unsupported time format: '{text}'");
    None
}

/// Parse a WebVTT cue timestamp, `MM:SS.mmm` with an optional hour field.
///
/// Minutes, seconds and the millisecond fraction are fixed-width and the
/// fraction separator is exactly `.`. The relaxed notations of
/// [`parse_generic`] are not accepted here.
#[must_use]
pub fn parse_vtt(text: &str) -> Option<TimePoint> {
    static VTT_CLOCK: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(?:(\d{1,2}):)?(\d{2}):(\d{2})\.(\d{3})$").unwrap());

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(cap) = VTT_CLOCK.captures(text) {
        let hours: i64 = match cap.get(1) {
            Some(hours) => hours.as_str().parse().ok()?,
            None => 0,
        };
        let mins: i64 = cap[2].parse().ok()?;
        let secs: i64 = cap[3].parse().ok()?;
        let msecs: i64 = cap[4].parse().ok()?;
        return Some(TimePoint::from_msecs(
            hours * 3_600_000 + mins * 60_000 + secs * 1000 + msecs,
        ));
    }

    warn!("unsupported VTT time format: '{text}'");
    None
}
