use super::{calendar_day, full_date, month_day, month_name};
use crate::Instant;
use chrono::Datelike;

/// Formats the span between two instants as a single label.
///
/// The ends may be passed in either order; the label always reads low to high.
///
/// ```
/// use whenwords::date_range;
///
/// let jan1 = 1_704_067_200;
/// let jan5 = 1_704_412_800;
///
/// assert_eq!("January 1–5, 2024", date_range(jan1, jan5));
/// assert_eq!("January 1, 2024", date_range(jan1, jan1));
/// ```
#[must_use]
pub fn date_range(start: Instant, end: Instant) -> String {
    let (start, end) = if end < start { (end, start) } else { (start, end) };

    let start = calendar_day(start);
    let end = calendar_day(end);

    if start == end {
        full_date(start)
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{} {}–{}, {}",
            month_name(start),
            start.day(),
            end.day(),
            start.year()
        )
    } else if start.year() == end.year() {
        format!("{} – {}, {}", month_day(start), month_day(end), start.year())
    } else {
        format!("{} – {}", full_date(start), full_date(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const JAN_1_2024: Instant = 1_704_067_200;
    const JAN_5_2024: Instant = 1_704_412_800;
    const FEB_15_2024: Instant = 1_707_955_200;
    const DEC_28_2024: Instant = 1_735_344_000;
    const JAN_3_2025: Instant = 1_735_862_400;

    #[test]
    fn same_day() {
        assert_eq!("January 1, 2024", date_range(JAN_1_2024, JAN_1_2024));
        assert_eq!(
            "January 1, 2024",
            date_range(JAN_1_2024, JAN_1_2024 + 86_399)
        );
    }

    #[test]
    fn same_month() {
        assert_eq!("January 1–5, 2024", date_range(JAN_1_2024, JAN_5_2024));
    }

    #[test]
    fn same_year() {
        assert_eq!(
            "January 1 – February 15, 2024",
            date_range(JAN_1_2024, FEB_15_2024)
        );
    }

    #[test]
    fn across_years() {
        assert_eq!(
            "December 28, 2024 – January 3, 2025",
            date_range(DEC_28_2024, JAN_3_2025)
        );
    }

    #[test]
    fn swapped_ends() {
        assert_eq!("January 1–5, 2024", date_range(JAN_5_2024, JAN_1_2024));
        assert_eq!(
            "December 28, 2024 – January 3, 2025",
            date_range(JAN_3_2025, DEC_28_2024)
        );
    }
}
