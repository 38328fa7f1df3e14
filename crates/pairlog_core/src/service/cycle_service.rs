//! Cycle use-case service.
//!
//! # Invariants
//! - History is append-only in recording order; no merge with an open
//!   period, every call records a new entry.

use crate::cycle::{self, CyclePrediction, DEFAULT_PERIOD_DURATION_DAYS};
use crate::model::period::PeriodEntry;
use crate::store::{SliceKey, SliceStore};
use chrono::NaiveDate;
use log::warn;

/// Period-history service over one slice store.
pub struct CycleService<S: SliceStore> {
    store: S,
    periods: Vec<PeriodEntry>,
}

impl<S: SliceStore> CycleService<S> {
    /// Loads the persisted history. Entries violating the duration
    /// invariant are dropped with a log instead of poisoning the session.
    pub fn load(store: S) -> Self {
        let mut periods: Vec<PeriodEntry> = store.load(SliceKey::Periods).unwrap_or_default();
        let before = periods.len();
        periods.retain(|entry| entry.duration_days > 0);
        if periods.len() < before {
            warn!(
                "event=period_load module=service status=dropped_invalid count={}",
                before - periods.len()
            );
        }
        Self { store, periods }
    }

    pub fn history(&self) -> &[PeriodEntry] {
        &self.periods
    }

    /// Records a new period starting on `start_date` with the default
    /// duration.
    pub fn add_period(&mut self, start_date: NaiveDate) {
        self.periods.push(PeriodEntry {
            start_date,
            duration_days: DEFAULT_PERIOD_DURATION_DAYS,
        });
        self.store.save(SliceKey::Periods, &self.periods);
    }

    pub fn next_prediction(&self, today: NaiveDate) -> Option<CyclePrediction> {
        cycle::next_prediction(&self.periods, today)
    }

    pub fn is_period_day(&self, date: NaiveDate) -> bool {
        cycle::is_period_day(date, &self.periods)
    }

    pub fn is_predicted_day(&self, date: NaiveDate) -> bool {
        cycle::is_predicted_day(date, &self.periods)
    }
}
