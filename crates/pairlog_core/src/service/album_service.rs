//! Album use-case service.
//!
//! # Invariants
//! - Album media is exclusively owned by its album; moving between albums
//!   is not a supported operation.
//! - A discarded upload never commits a media entry.

use crate::capability::{upload_or_discard, MediaUpload, PendingMedia, SingleFlight};
use crate::collection;
use crate::model::album::Album;
use crate::store::{SliceKey, SliceStore};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Album mutation errors the caller can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumServiceError {
    AlbumNotFound(String),
    /// An upload is already outstanding on this control.
    UploadInFlight,
    /// The pending item was discarded by the upload capability.
    UploadDiscarded,
}

impl Display for AlbumServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlbumNotFound(id) => write!(f, "album not found: {id}"),
            Self::UploadInFlight => write!(f, "an upload is already in flight"),
            Self::UploadDiscarded => write!(f, "pending media was discarded by upload"),
        }
    }
}

impl Error for AlbumServiceError {}

/// Album service over the albums slice.
pub struct AlbumService<S: SliceStore, U: MediaUpload> {
    store: S,
    uploader: U,
    uploading: SingleFlight,
    albums: Vec<Album>,
}

impl<S: SliceStore, U: MediaUpload> AlbumService<S, U> {
    pub fn load(store: S, uploader: U) -> Self {
        let albums = store.load(SliceKey::Albums).unwrap_or_default();
        Self {
            store,
            uploader,
            uploading: SingleFlight::new(),
            albums,
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Creates an empty album. Returns its id.
    pub fn create_album(&mut self, name: impl Into<String>, created_on: NaiveDate) -> String {
        let album = Album::new(name, created_on);
        let id = album.id.clone();
        self.albums.push(album);
        self.store.save(SliceKey::Albums, &self.albums);
        id
    }

    /// Uploads one pending item into an album. Returns the media id.
    pub fn add_media(
        &mut self,
        album_id: &str,
        pending: &PendingMedia,
        added_on: NaiveDate,
    ) -> Result<String, AlbumServiceError> {
        if !self.albums.iter().any(|album| album.id == album_id) {
            return Err(AlbumServiceError::AlbumNotFound(album_id.to_string()));
        }

        let permit = self
            .uploading
            .begin()
            .ok_or(AlbumServiceError::UploadInFlight)?;
        let url = upload_or_discard(&self.uploader, pending);
        drop(permit);
        let url = url.ok_or(AlbumServiceError::UploadDiscarded)?;

        let mut media_id = None;
        collection::toggle_by_id(&mut self.albums, album_id, |album| {
            media_id = Some(album.push_media(url, added_on));
        });
        self.store.save(SliceKey::Albums, &self.albums);
        media_id.ok_or_else(|| AlbumServiceError::AlbumNotFound(album_id.to_string()))
    }

    /// Removes one media entry from its owning album.
    pub fn remove_media(&mut self, album_id: &str, media_id: &str) -> bool {
        let mut removed = false;
        collection::toggle_by_id(&mut self.albums, album_id, |album| {
            removed = collection::remove_by_id(&mut album.media, media_id);
        });
        if removed {
            self.store.save(SliceKey::Albums, &self.albums);
        }
        removed
    }

    pub fn remove_album(&mut self, id: &str) -> bool {
        let removed = collection::remove_by_id(&mut self.albums, id);
        if removed {
            self.store.save(SliceKey::Albums, &self.albums);
        }
        removed
    }
}
