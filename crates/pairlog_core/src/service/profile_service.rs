//! Profile decoration service: cover image and camera icon references.
//!
//! Each reference is one URL string persisted as its own slice.

use crate::capability::{upload_or_discard, MediaUpload, PendingMedia, SingleFlight};
use crate::store::{SliceKey, SliceStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Profile mutation errors the caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileServiceError {
    /// An upload is already outstanding on this control.
    UploadInFlight,
    /// The pending item was discarded by the upload capability.
    UploadDiscarded,
}

impl Display for ProfileServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UploadInFlight => write!(f, "an upload is already in flight"),
            Self::UploadDiscarded => write!(f, "pending media was discarded by upload"),
        }
    }
}

impl Error for ProfileServiceError {}

/// Profile service over the cover-image and camera-icon slices.
pub struct ProfileService<S: SliceStore, U: MediaUpload> {
    store: S,
    uploader: U,
    uploading: SingleFlight,
    cover_image: Option<String>,
    camera_icon: Option<String>,
}

impl<S: SliceStore, U: MediaUpload> ProfileService<S, U> {
    pub fn load(store: S, uploader: U) -> Self {
        let cover_image = store.load(SliceKey::CoverImage);
        let camera_icon = store.load(SliceKey::CameraIcon);
        Self {
            store,
            uploader,
            uploading: SingleFlight::new(),
            cover_image,
            camera_icon,
        }
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    pub fn camera_icon(&self) -> Option<&str> {
        self.camera_icon.as_deref()
    }

    /// Uploads and installs a new cover image reference.
    pub fn set_cover_image(&mut self, pending: &PendingMedia) -> Result<String, ProfileServiceError> {
        let url = self.upload_one(pending)?;
        self.cover_image = Some(url.clone());
        self.store.save(SliceKey::CoverImage, &url);
        Ok(url)
    }

    /// Uploads and installs a new camera icon reference.
    pub fn set_camera_icon(&mut self, pending: &PendingMedia) -> Result<String, ProfileServiceError> {
        let url = self.upload_one(pending)?;
        self.camera_icon = Some(url.clone());
        self.store.save(SliceKey::CameraIcon, &url);
        Ok(url)
    }

    fn upload_one(&self, pending: &PendingMedia) -> Result<String, ProfileServiceError> {
        let permit = self
            .uploading
            .begin()
            .ok_or(ProfileServiceError::UploadInFlight)?;
        let url = upload_or_discard(&self.uploader, pending);
        drop(permit);
        url.ok_or(ProfileServiceError::UploadDiscarded)
    }
}
