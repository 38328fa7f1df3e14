//! Local calendar-date helpers.
//!
//! # Responsibility
//! - Parse and format `YYYY-MM-DD` dates from their numeric components.
//! - Provide month-grid calendar math for the aggregation layer.
//!
//! # Invariants
//! - All dates are local wall-clock calendar dates (`NaiveDate`), never UTC
//!   instants, so a date can never shift by one day across timezones.
//! - `parse_local_date` and `format_date` round-trip exactly.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical serialization format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Input did not contain three numeric `YYYY-MM-DD` segments and the
    /// generic datetime fallback could not read it either.
    Malformed(String),
    /// Segments were numeric but do not name a real calendar day.
    OutOfRange(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(input) => write!(f, "malformed date input: `{input}`"),
            Self::OutOfRange(input) => write!(f, "date out of range: `{input}`"),
        }
    }
}

impl Error for DateParseError {}

/// Parses a `YYYY-MM-DD` string from its three numeric components.
///
/// Inputs with a different segment count fall back to a generic datetime
/// parse whose date part is kept.
pub fn parse_local_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    let segments: Vec<&str> = trimmed.split('-').collect();
    if segments.len() != 3 {
        return parse_generic_datetime(trimmed)
            .ok_or_else(|| DateParseError::Malformed(input.to_string()));
    }

    let year = segments[0]
        .parse::<i32>()
        .map_err(|_| DateParseError::Malformed(input.to_string()))?;
    let month = segments[1]
        .parse::<u32>()
        .map_err(|_| DateParseError::Malformed(input.to_string()))?;
    let day = segments[2]
        .parse::<u32>()
        .map_err(|_| DateParseError::Malformed(input.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateParseError::OutOfRange(input.to_string()))
}

fn parse_generic_datetime(input: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(input, "%Y/%m/%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .map(|datetime| datetime.date())
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y/%m/%d"))
        .ok()
}

/// Formats a date in the canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns the day count of the given month, or `None` when `month` is not
/// in `1..=12` or the year is unrepresentable.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days = next_first.signed_duration_since(first).num_days();
    u32::try_from(days).ok()
}

/// Returns the weekday index of the first day of the month, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first.weekday().num_days_from_sunday())
}
