//! Human-friendly relative times, durations and dates.
//!
//! Five pure conversions, each a plain function over epoch seconds or text:
//!
//! - [`time_ago`]: "3 hours ago", "in 2 days"
//! - [`format_duration`]: "2 hours, 30 minutes" or "2h 30m"
//! - [`parse_duration`]: "1h30m", "2:30:00", "1.5 hours" back into seconds
//! - [`human_date`]: "Today", "Last Friday", "March 5, 2023"
//! - [`date_range`]: "January 1–5, 2024"
//!
//! Calendar comparisons are done on UTC days. Output is English only.
//!
//! ```
//! use whenwords::{date_range, format_duration, human_date, parse_duration, time_ago, FormatOptions};
//!
//! let now = 1_705_276_800; // Monday, 2024-01-15
//!
//! assert_eq!("3 hours ago", time_ago(now - 3 * 3_600, now));
//! assert_eq!("Yesterday", human_date(now - 86_400, now));
//! assert_eq!("January 15–19, 2024", date_range(now, now + 4 * 86_400));
//!
//! let seconds = parse_duration("2h30m")?;
//! assert_eq!("2h 30m", format_duration(seconds as i64, &FormatOptions::compact_format())?);
//!
//! # Ok::<(), whenwords::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod ago;
mod date;
mod duration;
mod error;
mod time;

pub use ago::{time_ago, time_ago_now};
pub use date::{date_range, human_date, human_date_now};
pub use duration::{format_duration, parse_duration, Duration, FormatOptions};
pub use error::{Error, Result};
pub use time::timestamp;

/// A point in time, in seconds since the Unix epoch
pub type Instant = i64;
