//! Calendar aggregation: per-day join of cycle state and record
//! collections into display-ready summaries.
//!
//! # Responsibility
//! - Filter each collection for a day independently (no cross-filtering).
//! - Lay out a month grid of leading blanks plus numbered day cells.
//!
//! # Invariants
//! - Pure read side: borrows collections, owns no mutable state.
//! - Indicator flags are independent booleans; several may light up on the
//!   same cell. Recorded period membership takes display precedence over
//!   the predicted window when a renderer must pick one.

use crate::cycle;
use crate::date;
use crate::model::conflict::ConflictRecord;
use crate::model::period::PeriodEntry;
use crate::model::todo::TodoItem;
use chrono::NaiveDate;
use serde::Serialize;

/// Borrowed collections the aggregator reads from.
#[derive(Debug, Clone, Copy)]
pub struct CalendarSources<'a> {
    pub periods: &'a [PeriodEntry],
    pub conflicts: &'a [ConflictRecord],
    pub todos: &'a [TodoItem],
}

/// Display-ready summary for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub is_period: bool,
    pub is_predicted: bool,
    pub conflicts: Vec<ConflictRecord>,
    pub todos: Vec<TodoItem>,
}

/// Joins every collection for one day.
pub fn day_summary(date: NaiveDate, sources: CalendarSources<'_>) -> DaySummary {
    DaySummary {
        date,
        is_period: cycle::is_period_day(date, sources.periods),
        is_predicted: cycle::is_predicted_day(date, sources.periods),
        conflicts: sources
            .conflicts
            .iter()
            .filter(|conflict| conflict.date == date)
            .cloned()
            .collect(),
        todos: sources
            .todos
            .iter()
            .filter(|todo| todo.date == Some(date))
            .cloned()
            .collect(),
    }
}

/// Per-cell indicator flags; non-exclusive by design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayIndicators {
    pub has_open_todo: bool,
    pub has_conflict: bool,
    pub in_period: bool,
    pub in_predicted: bool,
}

/// One month-grid cell: a leading blank or a numbered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthCell {
    Blank,
    Day { day: u32, indicators: DayIndicators },
}

/// Month layout: `first_weekday` blanks, then `1..=day_count` day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Weekday of day 1, 0 = Sunday; also the number of leading blanks.
    pub first_weekday: u32,
    pub cells: Vec<MonthCell>,
}

/// Builds the grid for one month, or `None` when `(year, month)` does not
/// name a real month.
pub fn month_grid(year: i32, month: u32, sources: CalendarSources<'_>) -> Option<MonthGrid> {
    let first_weekday = date::first_weekday_of_month(year, month)?;
    let day_count = date::days_in_month(year, month)?;

    let mut cells = Vec::with_capacity((first_weekday + day_count) as usize);
    cells.extend(std::iter::repeat(MonthCell::Blank).take(first_weekday as usize));
    for day in 1..=day_count {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        cells.push(MonthCell::Day {
            day,
            indicators: DayIndicators {
                has_open_todo: sources
                    .todos
                    .iter()
                    .any(|todo| !todo.completed && todo.date == Some(date)),
                has_conflict: sources.conflicts.iter().any(|conflict| conflict.date == date),
                in_period: cycle::is_period_day(date, sources.periods),
                in_predicted: cycle::is_predicted_day(date, sources.periods),
            },
        });
    }

    Some(MonthGrid {
        year,
        month,
        first_weekday,
        cells,
    })
}
