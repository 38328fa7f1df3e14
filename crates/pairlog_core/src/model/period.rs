//! Period history entry.
//!
//! # Invariants
//! - `duration_days` is at least 1.
//! - History order is recording order; entries are never merged or deduped.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One recorded period: a start day plus a whole-day duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub start_date: NaiveDate,
    pub duration_days: u32,
}

/// Period construction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodValidationError {
    ZeroDuration,
}

impl Display for PeriodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDuration => write!(f, "period duration must be at least one day"),
        }
    }
}

impl Error for PeriodValidationError {}

impl PeriodEntry {
    pub fn new(start_date: NaiveDate, duration_days: u32) -> Result<Self, PeriodValidationError> {
        if duration_days == 0 {
            return Err(PeriodValidationError::ZeroDuration);
        }
        Ok(Self {
            start_date,
            duration_days,
        })
    }

    /// Half-open membership test: start inclusive, start + duration exclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        if date < self.start_date {
            return false;
        }
        match self
            .start_date
            .checked_add_days(Days::new(u64::from(self.duration_days)))
        {
            Some(end) => date < end,
            // Span runs past the calendar bounds; everything after start is in.
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PeriodEntry, PeriodValidationError};
    use chrono::NaiveDate;

    fn day(text: &str) -> NaiveDate {
        text.parse().expect("valid test date")
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = PeriodEntry::new(day("2024-01-01"), 0).expect_err("zero days");
        assert_eq!(err, PeriodValidationError::ZeroDuration);
    }

    #[test]
    fn covers_is_half_open() {
        let entry = PeriodEntry::new(day("2024-01-01"), 5).expect("valid entry");
        assert!(entry.covers(day("2024-01-01")));
        assert!(entry.covers(day("2024-01-05")));
        assert!(!entry.covers(day("2024-01-06")));
        assert!(!entry.covers(day("2023-12-31")));
    }
}
