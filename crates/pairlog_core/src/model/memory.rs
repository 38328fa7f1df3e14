//! Memory record: a captioned moment with optional media and reactions.

use crate::collection::Record;
use crate::model::id::next_record_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a memory carries media or is text-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryKind {
    Media,
    Text,
}

/// One comment under a memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub date: NaiveDate,
}

/// One memory entry, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    /// Uploaded media URLs in display order; empty for text memories.
    pub media: Vec<String>,
    pub caption: String,
    pub date: NaiveDate,
    pub kind: MemoryKind,
    pub likes: u32,
    pub is_liked: bool,
    pub comments: Vec<Comment>,
}

impl Memory {
    pub fn new_text(caption: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_media(Vec::new(), caption, date, MemoryKind::Text)
    }

    pub fn new_media(media: Vec<String>, caption: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_media(media, caption, date, MemoryKind::Media)
    }

    fn with_media(
        media: Vec<String>,
        caption: impl Into<String>,
        date: NaiveDate,
        kind: MemoryKind,
    ) -> Self {
        Self {
            id: next_record_id(),
            media,
            caption: caption.into(),
            date,
            kind,
            likes: 0,
            is_liked: false,
            comments: Vec::new(),
        }
    }

    /// Flips the like state and keeps the count in step with it.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }

    /// Appends one comment and returns its id.
    pub fn push_comment(&mut self, text: impl Into<String>, date: NaiveDate) -> String {
        let comment = Comment {
            id: next_record_id(),
            text: text.into(),
            date,
        };
        let id = comment.id.clone();
        self.comments.push(comment);
        id
    }
}

impl Record for Memory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}
