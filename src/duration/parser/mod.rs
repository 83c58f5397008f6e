mod colon;
mod lexer;
mod span;

use super::Duration;
use crate::{Error, Result};
use colon::ColonNotation;
use lexer::{tokenize_duration, Token};
use span::Parse;

/// Unit words accepted after a number, matched case-insensitively.
static UNIT_ALIASES: [(&str, u64); 21] = [
    ("w", Duration::weeks(1)),
    ("week", Duration::weeks(1)),
    ("weeks", Duration::weeks(1)),
    ("d", Duration::days(1)),
    ("day", Duration::days(1)),
    ("days", Duration::days(1)),
    ("h", Duration::hours(1)),
    ("hr", Duration::hours(1)),
    ("hrs", Duration::hours(1)),
    ("hour", Duration::hours(1)),
    ("hours", Duration::hours(1)),
    ("m", Duration::minutes(1)),
    ("min", Duration::minutes(1)),
    ("mins", Duration::minutes(1)),
    ("minute", Duration::minutes(1)),
    ("minutes", Duration::minutes(1)),
    ("s", Duration::seconds(1)),
    ("sec", Duration::seconds(1)),
    ("secs", Duration::seconds(1)),
    ("second", Duration::seconds(1)),
    ("seconds", Duration::seconds(1)),
];

fn unit_multiplier(word: &str) -> Option<u64> {
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(word))
        .map(|(_, multiplier)| *multiplier)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn term_seconds(value: f64, multiplier: u64) -> u64 {
    // saturating float -> int cast
    (value * multiplier as f64) as u64
}

fn parse_terms(s: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut terms = 0_usize;
    let mut number = None;

    for tok in tokenize_duration(s) {
        match tok {
            Ok(Token::Number(value)) => {
                number = Some(value);
            }
            Ok(Token::Word(word)) => {
                let Some(value) = number.take() else {
                    continue;
                };

                if let Some(multiplier) = unit_multiplier(word) {
                    log::trace!("duration term {value} {word:?} (x{multiplier})");
                    total = total.saturating_add(term_seconds(value, multiplier));
                    terms += 1;
                } else {
                    log::trace!("skipping unknown unit {word:?}");
                }
            }
            Err(()) => {
                number = None;
            }
        }
    }

    (terms > 0).then_some(total)
}

/// Parses a human-written duration into seconds.
///
/// Accepts colon notation (`1:30`, `2:30:00`) or one or more
/// `<number><unit>` terms (`2h30m`, `1.5 hours`, `1 day, 2 hours`).
///
/// ```
/// use whenwords::parse_duration;
///
/// assert_eq!(9_000, parse_duration("2h30m")?);
/// assert_eq!(5_400, parse_duration("1:30:00")?);
/// assert_eq!(5_400, parse_duration("1.5 hours")?);
///
/// # Ok::<(), whenwords::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for blank input, [`Error::NegativeValue`] if
/// the text starts with `-`, and [`Error::Unparseable`] if no grammar matches.
pub fn parse_duration(text: &str) -> Result<u64> {
    let s = text.trim();

    if s.is_empty() {
        return Err(Error::EmptyInput);
    }

    if s.starts_with('-') {
        log::debug!("rejecting negative duration {s:?}");
        return Err(Error::NegativeValue);
    }

    if let Ok((_, colon)) = ColonNotation::parse_from_raw(s) {
        return colon.total_seconds().ok_or(Error::Unparseable);
    }

    parse_terms(s).ok_or_else(|| {
        log::debug!("no duration terms found in {s:?}");
        Error::Unparseable
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_empty() {
        assert_eq!(Err(Error::EmptyInput), parse_duration(""));
        assert_eq!(Err(Error::EmptyInput), parse_duration("   "));
        assert_eq!(Err(Error::EmptyInput), parse_duration("\t\n"));
    }

    #[test]
    fn parse_negative() {
        assert_eq!(Err(Error::NegativeValue), parse_duration("-5m"));
        assert_eq!(Err(Error::NegativeValue), parse_duration("  -1:30"));
        assert_eq!(Err(Error::NegativeValue), parse_duration("-banana"));
    }

    #[test]
    fn parse_unparseable() {
        assert_eq!(Err(Error::Unparseable), parse_duration("banana"));
        assert_eq!(Err(Error::Unparseable), parse_duration("42"));
        assert_eq!(Err(Error::Unparseable), parse_duration("5 bananas"));
        assert_eq!(Err(Error::Unparseable), parse_duration("h5"));
        assert_eq!(Err(Error::Unparseable), parse_duration("1:5"));
    }

    #[test]
    fn parse_colon() {
        assert_eq!(Ok(5_400), parse_duration("1:30:00"));
        assert_eq!(Ok(5_400), parse_duration("1:30"));
        assert_eq!(Ok(9_000), parse_duration(" 2:30:00 "));
        assert_eq!(Ok(45), parse_duration("0:00:45"));
    }

    #[test]
    fn parse_compact_terms() {
        assert_eq!(Ok(9_000), parse_duration("2h30m"));
        assert_eq!(Ok(9_000), parse_duration("2h 30m"));
        assert_eq!(Ok(5_400), parse_duration("1h30m"));
        assert_eq!(Ok(1_209_600), parse_duration("2w"));
        assert_eq!(Ok(93_784), parse_duration("1d2h3m4s"));
    }

    #[test]
    fn parse_verbose_terms() {
        assert_eq!(Ok(9_000), parse_duration("2 hours, 30 minutes"));
        assert_eq!(Ok(9_000), parse_duration("2 hours and 30 minutes"));
        assert_eq!(Ok(86_400 + 7_200), parse_duration("1 day, 2 hours"));
        assert_eq!(Ok(604_800), parse_duration("1 week"));
        assert_eq!(Ok(90), parse_duration("1 min 30 secs"));
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Ok(9_000), parse_duration("2H30M"));
        assert_eq!(Ok(7_200), parse_duration("2 HOURS"));
        assert_eq!(Ok(3), parse_duration("3 Seconds"));
    }

    #[test]
    fn parse_fractions() {
        assert_eq!(Ok(5_400), parse_duration("1.5h"));
        assert_eq!(Ok(5_400), parse_duration("1.5 hours"));
        assert_eq!(Ok(30), parse_duration("0.5m"));
        // truncated per term
        assert_eq!(Ok(1), parse_duration("1.9s"));
    }

    #[test]
    fn parse_skips_unknown_units() {
        assert_eq!(Ok(7_200), parse_duration("5 bananas 2h"));
        assert_eq!(Ok(60), parse_duration("1m 3 parsecs"));
    }

    #[test]
    fn parse_ignores_dangling_number() {
        assert_eq!(Ok(3_600), parse_duration("1h30"));
    }
}
