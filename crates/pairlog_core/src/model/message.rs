//! Message-board record.

use crate::collection::Record;
use crate::model::id::next_record_id;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One board message, displayed newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_pinned: bool,
    pub is_favorite: bool,
}

impl Message {
    pub fn new(content: impl Into<String>, posted_at: NaiveDateTime) -> Self {
        Self {
            id: next_record_id(),
            content: content.into(),
            date: posted_at.date(),
            time: posted_at.time(),
            is_pinned: false,
            is_favorite: false,
        }
    }
}

impl Record for Message {
    fn id(&self) -> &str {
        &self.id
    }
}
