use super::span::{Parse, ParseResult, RawSpan};
use crate::Duration;
use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::digit1,
    combinator::{eof, map_res, opt},
    sequence::preceded,
};

/// `hours:minutes[:seconds]`, e.g. `1:30` or `2:30:00`
#[derive(Debug, Eq, PartialEq)]
pub struct ColonNotation {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ColonNotation {
    fn parse_hours(input: RawSpan<'_>) -> ParseResult<'_, u64> {
        map_res(digit1, |s: RawSpan<'_>| s.fragment().parse::<u64>())(input)
    }

    fn parse_two_digits(input: RawSpan<'_>) -> ParseResult<'_, u64> {
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            |s: RawSpan<'_>| s.fragment().parse::<u64>(),
        )(input)
    }

    /// `None` if the total does not fit into 64 bits.
    pub fn total_seconds(&self) -> Option<u64> {
        self.hours
            .checked_mul(Duration::hours(1))?
            .checked_add(self.minutes * Duration::minutes(1))?
            .checked_add(self.seconds)
    }
}

impl<'a> Parse<'a> for ColonNotation {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, hours) = Self::parse_hours(input)?;
        let (input, _) = tag(":")(input)?;
        let (input, minutes) = Self::parse_two_digits(input)?;
        let (input, seconds) = opt(preceded(tag(":"), Self::parse_two_digits))(input)?;

        // must span the whole input
        let (input, _) = eof(input)?;

        Ok((
            input,
            Self {
                hours,
                minutes,
                seconds: seconds.unwrap_or_default(),
            },
        ))
    }
}
