use crate::{time::round_half_up, Duration, Instant};

const MINUTE: u64 = Duration::minutes(1);
const HOUR: u64 = Duration::hours(1);
const DAY: u64 = Duration::days(1);

// average month, 365/12 days
#[allow(clippy::cast_precision_loss)]
const AVG_MONTH: f64 = 365.0 / 12.0 * DAY as f64;

#[allow(clippy::cast_precision_loss)]
const YEAR: f64 = Duration::years(1) as f64;

#[allow(clippy::cast_precision_loss)]
fn per(gap: u64, unit: f64) -> u64 {
    round_half_up(gap as f64 / unit)
}

/// Picks the count and unit name for an absolute gap in seconds.
///
/// `None` means the gap is short enough to read as "just now".
#[allow(clippy::cast_precision_loss)]
fn classify(gap: u64) -> Option<(u64, &'static str)> {
    let bucket = match gap {
        0..=44 => return None,
        45..=89 => (1, "minute"),
        _ if gap < 45 * MINUTE => (per(gap, MINUTE as f64), "minute"),
        _ if gap < 90 * MINUTE => (1, "hour"),
        _ if gap < 22 * HOUR => (per(gap, HOUR as f64), "hour"),
        _ if gap < 36 * HOUR => (1, "day"),
        _ if gap < 26 * DAY => (per(gap, DAY as f64), "day"),
        _ if gap < 46 * DAY => (1, "month"),
        _ if gap < 320 * DAY => (per(gap, AVG_MONTH), "month"),
        _ if gap < 548 * DAY => (1, "year"),
        _ => (per(gap, YEAR), "year"),
    };

    Some(bucket)
}

/// Describes `instant` relative to `reference`, e.g. "3 hours ago" or "in 2 days".
///
/// ```
/// use whenwords::time_ago;
///
/// let now = 1_704_067_200;
///
/// assert_eq!("just now", time_ago(now - 44, now));
/// assert_eq!("1 minute ago", time_ago(now - 45, now));
/// assert_eq!("3 hours ago", time_ago(now - 3 * 3_600, now));
/// assert_eq!("in 2 days", time_ago(now + 2 * 86_400, now));
/// ```
#[must_use]
pub fn time_ago(instant: Instant, reference: Instant) -> String {
    let future = instant > reference;
    let gap = instant.abs_diff(reference);

    let Some((count, unit)) = classify(gap) else {
        return "just now".to_owned();
    };

    let plural = if count == 1 { "" } else { "s" };

    if future {
        format!("in {count} {unit}{plural}")
    } else {
        format!("{count} {unit}{plural} ago")
    }
}

/// [`time_ago`] with the reference defaulting to the instant itself.
///
/// This always reads "just now".
#[must_use]
pub fn time_ago_now(instant: Instant) -> String {
    time_ago(instant, instant)
}
