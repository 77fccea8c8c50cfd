//! Date and time formatting for history records and the panel header.
//!
//! These formats are part of the stored history and of the CSV export, so they
//! must not change: dates are day-month-year separated by dashes, clock times
//! use the 24-hour clock with seconds.
//!
//! ## Examples
//!
//! ```rust
//! use zonal::libs::formatter::{format_date, format_clock_time};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap().and_hms_opt(9, 5, 30).unwrap();
//! assert_eq!(format_date(&now), "07-03-2025");
//! assert_eq!(format_clock_time(&now), "09:05:30");
//! ```

use chrono::NaiveDateTime;

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

pub fn format_date(instant: &NaiveDateTime) -> String {
    instant.format(DATE_FORMAT).to_string()
}

pub fn format_clock_time(instant: &NaiveDateTime) -> String {
    instant.format(CLOCK_FORMAT).to_string()
}

/// Panel header text, e.g. `07-03-2025 (09:05:30)`.
pub fn format_header(instant: &NaiveDateTime) -> String {
    format!("{} ({})", format_date(instant), format_clock_time(instant))
}
