//! Todo record.

use crate::collection::Record;
use crate::model::id::next_record_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One todo item, created from free text or task extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Day the item belongs to on the calendar; `None` for undated items.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl TodoItem {
    pub fn new(text: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id: next_record_id(),
            text: text.into(),
            completed: false,
            date,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

impl Record for TodoItem {
    fn id(&self) -> &str {
        &self.id
    }
}
