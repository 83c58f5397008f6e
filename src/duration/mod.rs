mod format;
mod parser;
mod units;

pub use format::{format_duration, FormatOptions};
pub use parser::parse_duration;
pub(crate) use units::{Unit, UNITS};

/// Helpers for calculating durations
///
/// Every constructor returns a plain second count, so the results can be
/// fed straight into [`format_duration`](crate::format_duration).
///
/// ```
/// use whenwords::{format_duration, Duration, FormatOptions};
///
/// let seconds = Duration::hours(2) + Duration::minutes(30);
/// assert_eq!(9_000, seconds);
///
/// let text = format_duration(seconds as i64, &FormatOptions::default().compact(true))?;
/// assert_eq!("2h 30m", text);
///
/// # Ok::<(), whenwords::Error>(())
/// ```
pub struct Duration;

impl Duration {
    /// Formats N years (of 365 days) as seconds.
    #[must_use]
    pub const fn years(n: u64) -> u64 {
        Self::days(n) * 365
    }

    /// Formats N months (of 30 days) as seconds.
    #[must_use]
    pub const fn months(n: u64) -> u64 {
        Self::days(n) * 30
    }

    /// Formats N weeks as seconds.
    #[must_use]
    pub const fn weeks(n: u64) -> u64 {
        Self::days(n) * 7
    }

    /// Formats N days as seconds.
    #[must_use]
    pub const fn days(n: u64) -> u64 {
        Self::hours(n) * 24
    }

    /// Formats N hours as seconds.
    #[must_use]
    pub const fn hours(n: u64) -> u64 {
        Self::minutes(n) * 60
    }

    /// Formats N minutes as seconds.
    #[must_use]
    pub const fn minutes(n: u64) -> u64 {
        Self::seconds(n) * 60
    }

    /// Formats N seconds as seconds.
    #[must_use]
    pub const fn seconds(n: u64) -> u64 {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn constructors() {
        assert_eq!(604_800, Duration::weeks(1));
        assert_eq!(86_400, Duration::days(1));
        assert_eq!(2_592_000, Duration::months(1));
        assert_eq!(31_536_000, Duration::years(1));
    }
}
