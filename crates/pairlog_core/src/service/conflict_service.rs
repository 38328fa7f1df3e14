//! Conflict use-case service.
//!
//! # Invariants
//! - Submitting a conflict ALWAYS creates a record; a failing judge only
//!   downgrades the verdict to the stock fallback.
//! - The judging control is single-flight: a second submission is refused
//!   while one is outstanding.

use crate::capability::{judge_or_fallback, ConflictJudge, SingleFlight};
use crate::collection;
use crate::model::conflict::{self, ConflictRecord};
use crate::store::{SliceKey, SliceStore};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Conflict submission errors the caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictServiceError {
    /// A judgment is already outstanding on this control.
    JudgeInFlight,
}

impl Display for ConflictServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JudgeInFlight => write!(f, "a judgment is already in flight"),
        }
    }
}

impl Error for ConflictServiceError {}

/// Conflict service over the conflicts slice.
pub struct ConflictService<S: SliceStore, J: ConflictJudge> {
    store: S,
    judge: J,
    judging: SingleFlight,
    conflicts: Vec<ConflictRecord>,
}

impl<S: SliceStore, J: ConflictJudge> ConflictService<S, J> {
    pub fn load(store: S, judge: J) -> Self {
        let conflicts = store.load(SliceKey::Conflicts).unwrap_or_default();
        Self {
            store,
            judge,
            judging: SingleFlight::new(),
            conflicts,
        }
    }

    pub fn conflicts(&self) -> &[ConflictRecord] {
        &self.conflicts
    }

    /// Judges and records one conflict, newest first. Returns the record id.
    pub fn submit_conflict(
        &mut self,
        date: NaiveDate,
        reason: impl Into<String>,
        his_point: impl Into<String>,
        her_point: impl Into<String>,
    ) -> Result<String, ConflictServiceError> {
        let permit = self
            .judging
            .begin()
            .ok_or(ConflictServiceError::JudgeInFlight)?;

        let reason = reason.into();
        let his_point = his_point.into();
        let her_point = her_point.into();
        let verdict = judge_or_fallback(&self.judge, &reason, &his_point, &her_point);
        drop(permit);

        let record = ConflictRecord::new(date, reason, his_point, her_point, Some(verdict));
        let id = record.id.clone();
        self.conflicts.insert(0, record);
        self.store.save(SliceKey::Conflicts, &self.conflicts);
        Ok(id)
    }

    /// Pinned first (stable), then newest creation order.
    pub fn sorted_for_display(&self) -> Vec<ConflictRecord> {
        conflict::sorted_for_display(&self.conflicts)
    }

    pub fn toggle_pinned(&mut self, id: &str) -> bool {
        self.mutate(id, |record| record.is_pinned = !record.is_pinned)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.mutate(id, |record| record.is_favorite = !record.is_favorite)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let removed = collection::remove_by_id(&mut self.conflicts, id);
        if removed {
            self.store.save(SliceKey::Conflicts, &self.conflicts);
        }
        removed
    }

    fn mutate(&mut self, id: &str, mutate: impl FnOnce(&mut ConflictRecord)) -> bool {
        let changed = collection::toggle_by_id(&mut self.conflicts, id, mutate);
        if changed {
            self.store.save(SliceKey::Conflicts, &self.conflicts);
        }
        changed
    }
}
