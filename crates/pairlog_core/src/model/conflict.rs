//! Conflict record and AI verdict shape.
//!
//! # Invariants
//! - A conflict record always exists once submitted, with or without a
//!   verdict from the judge capability.
//! - `his_fault` and `her_fault` are independent scores in `0..=100`; they
//!   are not required to sum to 100.

use crate::collection::Record;
use crate::model::id::next_record_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured judgment for one conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub his_fault: u8,
    pub her_fault: u8,
    pub analysis: String,
    pub advice: String,
    pub prevention: String,
}

/// One recorded conflict with both sides' points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub id: String,
    pub date: NaiveDate,
    pub reason: String,
    pub his_point: String,
    pub her_point: String,
    #[serde(default)]
    pub ai_response: Option<Verdict>,
    pub is_pinned: bool,
    pub is_favorite: bool,
}

impl ConflictRecord {
    pub fn new(
        date: NaiveDate,
        reason: impl Into<String>,
        his_point: impl Into<String>,
        her_point: impl Into<String>,
        ai_response: Option<Verdict>,
    ) -> Self {
        Self {
            id: next_record_id(),
            date,
            reason: reason.into(),
            his_point: his_point.into(),
            her_point: her_point.into(),
            ai_response,
            is_pinned: false,
            is_favorite: false,
        }
    }
}

impl Record for ConflictRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Display ordering: pinned records first (stable), unpinned after; within
/// each partition descending by id parsed as integer, i.e. newest creation
/// first. Ids that fail integer parsing sort with key 0.
pub fn sorted_for_display(records: &[ConflictRecord]) -> Vec<ConflictRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| creation_order_key(&b.id).cmp(&creation_order_key(&a.id)))
    });
    sorted
}

fn creation_order_key(id: &str) -> i64 {
    id.parse().unwrap_or(0)
}
