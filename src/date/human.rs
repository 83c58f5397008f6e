use super::{calendar_day, full_date, month_day, weekday_name};
use crate::Instant;
use chrono::Datelike;

/// Labels `instant` relative to the calendar day of `reference`.
///
/// Time of day is ignored; both points are truncated to their UTC date.
///
/// ```
/// use whenwords::human_date;
///
/// let monday = 1_705_276_800; // 2024-01-15
///
/// assert_eq!("Today", human_date(monday + 3_600, monday));
/// assert_eq!("Yesterday", human_date(monday - 1, monday));
/// assert_eq!("Last Friday", human_date(monday - 3 * 86_400, monday));
/// assert_eq!("This Thursday", human_date(monday + 3 * 86_400, monday));
/// assert_eq!("March 5", human_date(1_709_596_800, monday));
/// assert_eq!("December 25, 2023", human_date(1_703_462_400, monday));
/// ```
#[must_use]
pub fn human_date(instant: Instant, reference: Instant) -> String {
    let date = calendar_day(instant);
    let reference = calendar_day(reference);

    let day_diff = date.signed_duration_since(reference).num_days();

    match day_diff {
        0 => "Today".to_owned(),
        -1 => "Yesterday".to_owned(),
        1 => "Tomorrow".to_owned(),
        -6..=-2 => format!("Last {}", weekday_name(date)),
        2..=6 => format!("This {}", weekday_name(date)),
        _ if date.year() == reference.year() => month_day(date),
        _ => full_date(date),
    }
}

/// [`human_date`] with the reference defaulting to the instant itself.
///
/// This always reads "Today".
#[must_use]
pub fn human_date_now(instant: Instant) -> String {
    human_date(instant, instant)
}
