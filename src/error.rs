/// Error type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A negative number of seconds was given to the duration formatter.
    NegativeDuration,

    /// The duration parser was given blank input.
    EmptyInput,

    /// The duration parser was given text with a leading minus sign.
    NegativeValue,

    /// The text did not match any duration grammar.
    Unparseable,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeDuration => {
                write!(f, "duration cannot be negative")
            }
            Self::EmptyInput => {
                write!(f, "input cannot be empty")
            }
            Self::NegativeValue => {
                write!(f, "negative values are not allowed")
            }
            Self::Unparseable => {
                write!(f, "unable to parse duration")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
