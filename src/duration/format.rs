use super::{Unit, UNITS};
use crate::{Error, Result};

/// Options for [`format_duration`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatOptions {
    compact: bool,
    max_units: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_units: 2,
        }
    }
}

impl FormatOptions {
    /// Compact rendering, e.g. `2h 30m` instead of `2 hours, 30 minutes`.
    #[must_use]
    pub fn compact_format() -> Self {
        Self::default().compact(true)
    }

    /// Keeps every non-zero unit.
    #[must_use]
    pub fn all_units() -> Self {
        Self::default().max_units(0)
    }

    /// If `true`, units are rendered as short suffixes without pluralization.
    ///
    /// Default = false
    #[must_use]
    pub fn compact(mut self, enabled: bool) -> Self {
        self.compact = enabled;
        self
    }

    /// Sets how many units (largest first) appear in the output.
    ///
    /// `0` means no limit.
    ///
    /// Default = 2
    #[must_use]
    pub fn max_units(mut self, n: usize) -> Self {
        self.max_units = n;
        self
    }
}

/// Formats a number of seconds as a human-readable duration.
///
/// ```
/// use whenwords::{format_duration, FormatOptions};
///
/// assert_eq!("2 hours, 30 minutes", format_duration(9_000, &FormatOptions::default())?);
/// assert_eq!("1d 1h 1m", format_duration(90_060, &FormatOptions::compact_format().max_units(3))?);
///
/// # Ok::<(), whenwords::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::NegativeDuration`] if `seconds` is negative.
pub fn format_duration(seconds: i64, options: &FormatOptions) -> Result<String> {
    let Ok(mut remaining) = u64::try_from(seconds) else {
        return Err(Error::NegativeDuration);
    };

    let mut parts: Vec<(u64, &Unit)> = Vec::with_capacity(UNITS.len());

    for unit in &UNITS {
        let count = remaining / unit.seconds;
        remaining %= unit.seconds;

        if count > 0 {
            parts.push((count, unit));
        }
    }

    if parts.is_empty() {
        return Ok(if options.compact { "0s" } else { "0 seconds" }.to_owned());
    }

    if options.max_units > 0 {
        parts.truncate(options.max_units);
    }

    let text = if options.compact {
        parts
            .iter()
            .map(|(count, unit)| format!("{count}{}", unit.suffix))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        parts
            .iter()
            .map(|(count, unit)| {
                let plural = if *count == 1 { "" } else { "s" };
                format!("{count} {}{plural}", unit.name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(text)
}
