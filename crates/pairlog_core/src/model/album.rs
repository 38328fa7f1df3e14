//! Photo album and its exclusively owned media entries.

use crate::collection::Record;
use crate::model::id::next_record_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One media entry inside an album. Owned by exactly one album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumMedia {
    pub id: String,
    pub url: String,
    pub added_on: NaiveDate,
}

/// One album with its media in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub created_on: NaiveDate,
    pub media: Vec<AlbumMedia>,
}

impl Album {
    pub fn new(name: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id: next_record_id(),
            name: name.into(),
            created_on,
            media: Vec::new(),
        }
    }

    /// Appends one uploaded media URL and returns the new entry's id.
    pub fn push_media(&mut self, url: impl Into<String>, added_on: NaiveDate) -> String {
        let entry = AlbumMedia {
            id: next_record_id(),
            url: url.into(),
            added_on,
        };
        let id = entry.id.clone();
        self.media.push(entry);
        id
    }
}

impl Record for Album {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for AlbumMedia {
    fn id(&self) -> &str {
        &self.id
    }
}
