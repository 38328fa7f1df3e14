//! Memory use-case service.
//!
//! # Invariants
//! - Failed uploads drop their pending item; a media memory is only
//!   created when at least one URL survived.
//! - Memories keep insertion order.

use crate::capability::{upload_or_discard, MediaUpload, PendingMedia, SingleFlight};
use crate::collection;
use crate::model::memory::Memory;
use crate::store::{SliceKey, SliceStore};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Memory mutation errors the caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryServiceError {
    /// An upload batch is already outstanding on this control.
    UploadInFlight,
    /// Every pending item was discarded; nothing to commit.
    NothingUploaded,
}

impl Display for MemoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UploadInFlight => write!(f, "an upload is already in flight"),
            Self::NothingUploaded => write!(f, "no pending media survived upload"),
        }
    }
}

impl Error for MemoryServiceError {}

/// Memory service over the memories slice.
pub struct MemoryService<S: SliceStore, U: MediaUpload> {
    store: S,
    uploader: U,
    uploading: SingleFlight,
    memories: Vec<Memory>,
}

impl<S: SliceStore, U: MediaUpload> MemoryService<S, U> {
    pub fn load(store: S, uploader: U) -> Self {
        let memories = store.load(SliceKey::Memories).unwrap_or_default();
        Self {
            store,
            uploader,
            uploading: SingleFlight::new(),
            memories,
        }
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    /// Adds a text-only memory. Returns its id.
    pub fn add_text_memory(&mut self, caption: impl Into<String>, date: NaiveDate) -> String {
        self.push(Memory::new_text(caption, date))
    }

    /// Uploads each pending item and adds a media memory from the survivors.
    pub fn add_media_memory(
        &mut self,
        pending: &[PendingMedia],
        caption: impl Into<String>,
        date: NaiveDate,
    ) -> Result<String, MemoryServiceError> {
        let permit = self
            .uploading
            .begin()
            .ok_or(MemoryServiceError::UploadInFlight)?;
        let media: Vec<String> = pending
            .iter()
            .filter_map(|item| upload_or_discard(&self.uploader, item))
            .collect();
        drop(permit);

        if media.is_empty() {
            return Err(MemoryServiceError::NothingUploaded);
        }
        Ok(self.push(Memory::new_media(media, caption, date)))
    }

    pub fn toggle_like(&mut self, id: &str) -> bool {
        let changed = collection::toggle_by_id(&mut self.memories, id, Memory::toggle_like);
        if changed {
            self.store.save(SliceKey::Memories, &self.memories);
        }
        changed
    }

    /// Appends a comment. Returns the comment id, or `None` when the memory
    /// does not exist (collection unchanged).
    pub fn add_comment(
        &mut self,
        memory_id: &str,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Option<String> {
        let mut comment_id = None;
        let text = text.into();
        let changed = collection::toggle_by_id(&mut self.memories, memory_id, |memory| {
            comment_id = Some(memory.push_comment(text, date));
        });
        if changed {
            self.store.save(SliceKey::Memories, &self.memories);
        }
        comment_id
    }

    pub fn remove_memory(&mut self, id: &str) -> bool {
        let removed = collection::remove_by_id(&mut self.memories, id);
        if removed {
            self.store.save(SliceKey::Memories, &self.memories);
        }
        removed
    }

    fn push(&mut self, memory: Memory) -> String {
        let id = memory.id.clone();
        self.memories.push(memory);
        self.store.save(SliceKey::Memories, &self.memories);
        id
    }
}
