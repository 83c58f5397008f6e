use crate::Instant;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current timestamp in seconds since the Unix epoch.
///
/// Clocks set before the epoch yield a negative instant.
#[must_use]
pub fn timestamp() -> Instant {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => Instant::try_from(since.as_secs()).unwrap_or(Instant::MAX),
        Err(e) => Instant::try_from(e.duration().as_secs()).map_or(Instant::MIN, |s| -s),
    }
}

/// Half-up rounding of a non-negative quotient (2.5 -> 3).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_half_up(f: f64) -> u64 {
    (f + 0.5) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn round_half_up_ties() {
        assert_eq!(3, round_half_up(2.5));
        assert_eq!(2, round_half_up(2.49));
        assert_eq!(1, round_half_up(0.5));
        assert_eq!(0, round_half_up(0.0));
    }

    #[test]
    fn timestamp_is_after_2020() {
        assert!(timestamp() > 1_577_836_800);
    }
}
