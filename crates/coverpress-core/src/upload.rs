//! Naming and options for storing a compressed profile picture.

use serde::Serialize;

use crate::encode::JPEG_CONTENT_TYPE;

/// Cache lifetime for uploaded pictures, in seconds.
pub const CACHE_CONTROL_SECONDS: &str = "3600";

/// Where and how the storage bucket should receive a compressed picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDescriptor {
    pub file_name: String,
    pub content_type: &'static str,
    pub cache_control: &'static str,
    /// Never overwrite an existing object.
    pub upsert: bool,
}

impl UploadDescriptor {
    /// Descriptor for `user_id`'s picture uploaded at `timestamp_ms`.
    ///
    /// The extension is always `jpg` because compression always emits JPEG.
    pub fn for_user(user_id: &str, timestamp_ms: u64) -> Self {
        Self {
            file_name: format!("{user_id}-{timestamp_ms}.jpg"),
            content_type: JPEG_CONTENT_TYPE,
            cache_control: CACHE_CONTROL_SECONDS,
            upsert: false,
        }
    }
}
