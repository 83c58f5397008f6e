mod human;
mod range;

pub use human::{human_date, human_date_now};
pub use range::date_range;

use crate::Instant;
use chrono::{DateTime, Datelike, Month, NaiveDate, Weekday};

/// Truncates an instant to its UTC calendar day.
///
/// Instants outside the representable calendar clamp to the first or last day.
pub(crate) fn calendar_day(instant: Instant) -> NaiveDate {
    DateTime::from_timestamp(instant, 0).map_or_else(
        || {
            if instant < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            }
        },
        |dt| dt.date_naive(),
    )
}

pub(crate) fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub(crate) fn month_name(date: NaiveDate) -> &'static str {
    u8::try_from(date.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// "March 5"
pub(crate) fn month_day(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.day())
}

/// "March 5, 2023"
pub(crate) fn full_date(date: NaiveDate) -> String {
    format!("{}, {}", month_day(date), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn truncates_time_of_day() {
        let midnight = calendar_day(1_705_276_800);
        assert_eq!(midnight, calendar_day(1_705_276_800 + 86_399));
        assert_ne!(midnight, calendar_day(1_705_276_800 - 1));
    }

    #[test]
    fn before_epoch() {
        let day = calendar_day(-1);
        assert_eq!("December 31, 1969", full_date(day));
        assert_eq!("Wednesday", weekday_name(day));
        assert_eq!("January 1, 1900", full_date(calendar_day(-2_208_988_800)));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(NaiveDate::MAX, calendar_day(Instant::MAX));
        assert_eq!(NaiveDate::MIN, calendar_day(Instant::MIN));
    }

    #[test]
    fn names() {
        let day = calendar_day(1_709_596_800);
        assert_eq!("Tuesday", weekday_name(day));
        assert_eq!("March", month_name(day));
        assert_eq!("March 5", month_day(day));
    }
}
