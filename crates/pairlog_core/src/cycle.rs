//! Cycle engine: period history, next-cycle prediction, day membership.
//!
//! # Responsibility
//! - Predict the next cycle start from the most recent history entry.
//! - Answer per-day membership for recorded and predicted spans.
//!
//! # Invariants
//! - Prediction uses a constant 28-day interval and a fixed 5-day window
//!   over the last entry only; historical durations do not feed it. This is
//!   the agreed model, carried as-is.
//! - Recorded and predicted spans may overlap; recorded membership takes
//!   display precedence.

use crate::model::period::PeriodEntry;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Days from one period start to the predicted next start.
pub const CYCLE_INTERVAL_DAYS: u64 = 28;
/// Width of the predicted window, in days.
pub const PREDICTED_WINDOW_DAYS: u64 = 5;
/// Duration recorded for a newly logged period.
pub const DEFAULT_PERIOD_DURATION_DAYS: u32 = 5;

/// Next-cycle prediction derived from the most recent history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CyclePrediction {
    /// Predicted start day: last recorded start + 28 days.
    pub date: NaiveDate,
    /// Whole days until the predicted start; negative when overdue, never
    /// clamped.
    pub days_left: i64,
}

/// Predicts the next cycle start, or `None` for an empty history.
pub fn next_prediction(history: &[PeriodEntry], today: NaiveDate) -> Option<CyclePrediction> {
    let last = history.last()?;
    let date = last
        .start_date
        .checked_add_days(Days::new(CYCLE_INTERVAL_DAYS))?;
    Some(CyclePrediction {
        date,
        days_left: date.signed_duration_since(today).num_days(),
    })
}

/// True when `date` lies inside ANY recorded entry's half-open span.
pub fn is_period_day(date: NaiveDate, history: &[PeriodEntry]) -> bool {
    history.iter().any(|entry| entry.covers(date))
}

/// True when `date` lies inside the predicted window of the LAST entry:
/// `[last.start + 28, last.start + 28 + 5)`.
pub fn is_predicted_day(date: NaiveDate, history: &[PeriodEntry]) -> bool {
    let Some(window_start) = history
        .last()
        .and_then(|last| last.start_date.checked_add_days(Days::new(CYCLE_INTERVAL_DAYS)))
    else {
        return false;
    };
    let Some(window_end) = window_start.checked_add_days(Days::new(PREDICTED_WINDOW_DAYS)) else {
        return date >= window_start;
    };
    date >= window_start && date < window_end
}
