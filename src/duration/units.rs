use super::Duration;

/// A calendar-ish unit used when decomposing a duration.
#[derive(Debug, Eq, PartialEq)]
pub struct Unit {
    pub seconds: u64,
    pub suffix: &'static str,
    pub name: &'static str,
}

/// Strictly descending by magnitude.
pub static UNITS: [Unit; 6] = [
    Unit {
        seconds: Duration::years(1),
        suffix: "y",
        name: "year",
    },
    Unit {
        seconds: Duration::months(1),
        suffix: "mo",
        name: "month",
    },
    Unit {
        seconds: Duration::days(1),
        suffix: "d",
        name: "day",
    },
    Unit {
        seconds: Duration::hours(1),
        suffix: "h",
        name: "hour",
    },
    Unit {
        seconds: Duration::minutes(1),
        suffix: "m",
        name: "minute",
    },
    Unit {
        seconds: Duration::seconds(1),
        suffix: "s",
        name: "second",
    },
];
