use core::fmt;
use std::ops::Add;

/// Define a time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(i64);

impl TimePoint {
    /// Create a `TimePoint` from milliseconds
    #[must_use]
    pub const fn from_msecs(time: i64) -> Self {
        Self(time)
    }

    /// Offset in milliseconds.
    #[must_use]
    pub const fn msecs(self) -> i64 {
        self.0
    }

    const fn secs(self) -> i64 {
        self.0 / 1000
    }

    const fn mins(self) -> i64 {
        self.0 / (60 * 1000)
    }

    const fn hours(self) -> i64 {
        self.0 / (60 * 60 * 1000)
    }

    const fn mins_comp(self) -> i64 {
        self.mins() % 60
    }

    const fn secs_comp(self) -> i64 {
        self.secs() % 60
    }

    const fn msecs_comp(self) -> i64 {
        self.0 % 1000
    }
}

impl Add for TimePoint {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Extend `TimePoint` with the SRT `Display`: fixed-width `HH:MM:SS,mmm`
/// with a comma before the milliseconds. The hour field is not bounded to
/// 24. Offsets before zero are clamped to zero, so formatting never fails.
#[repr(transparent)]
pub struct SrtTimePoint(TimePoint);

impl From<TimePoint> for SrtTimePoint {
    fn from(value: TimePoint) -> Self {
        Self(value)
    }
}

impl fmt::Display for SrtTimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = if self.0.msecs() < 0 {
            TimePoint::from_msecs(0)
        } else {
            self.0
        };
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            t.hours(),
            t.mins_comp(),
            t.secs_comp(),
            t.msecs_comp()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(ms: i64) -> String {
        SrtTimePoint::from(TimePoint::from_msecs(ms)).to_string()
    }

    #[test]
    fn format_srt_time() {
        assert_eq!(fmt(0), "00:00:00,000");
        assert_eq!(fmt(3000), "00:00:03,000");
        assert_eq!(fmt(63_500), "00:01:03,500");
        assert_eq!(fmt(3_723_456), "01:02:03,456");
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        assert_eq!(fmt(-1000), "00:00:00,000");
        assert_eq!(fmt(-1), "00:00:00,000");
    }

    #[test]
    fn hours_may_exceed_a_day() {
        let ms = 25 * 3_600_000 + 59 * 60_000 + 59 * 1000 + 999;
        assert_eq!(fmt(ms), "25:59:59,999");
    }

    #[test]
    fn format_then_parse_recovers_the_offset() {
        for ms in [0, 1, 999, 1500, 63_500, 3_723_456, 359_999_999, 500 * 3_600_000] {
            let formatted = fmt(ms);
            let parsed = crate::time::parse_generic(&formatted).unwrap();
            assert_eq!(parsed.msecs(), ms, "round-trip of {formatted}");
        }
    }
}
