//! Media upload capability.

use crate::capability::CapabilityError;
use log::warn;

/// Pending binary attachment handed over by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMedia {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Upload seam: one blob in, one https URL out.
pub trait MediaUpload {
    /// Uploads one blob and returns its URL; an empty string signals the
    /// caller to discard the pending item rather than commit a broken
    /// reference.
    fn upload(&self, media: &PendingMedia) -> Result<String, CapabilityError>;
}

/// Invokes the capability and converts failure or an empty URL into
/// "discard the pending item" (`None`), logged, never surfaced as an error.
pub fn upload_or_discard<U: MediaUpload + ?Sized>(
    uploader: &U,
    media: &PendingMedia,
) -> Option<String> {
    match uploader.upload(media) {
        Ok(url) if url.is_empty() => {
            warn!(
                "event=media_upload module=capability status=discarded file={} error_code=empty_url",
                media.file_name
            );
            None
        }
        Ok(url) => Some(url),
        Err(err) => {
            warn!(
                "event=media_upload module=capability status=discarded file={} error={err}",
                media.file_name
            );
            None
        }
    }
}
