//! Compression settings and result artifact.

use serde::{Deserialize, Serialize};

use super::Quality;
use crate::decode::FilterType;
use crate::encode::JPEG_CONTENT_TYPE;

/// Default target ceiling in KiB.
pub const DEFAULT_TARGET_SIZE_KB: u32 = 90;

/// Default bound on the longest side of the working raster, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 800;

/// Settings for one compressor.
///
/// Deserializes from a partial object: any missing field takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressOptions {
    /// Byte-size ceiling in KiB.
    pub target_size_kb: u32,
    /// Longest side of the working raster. Zero is treated as one.
    pub max_dimension: u32,
    /// Resampling filter used when downscaling.
    pub filter: FilterType,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            target_size_kb: DEFAULT_TARGET_SIZE_KB,
            max_dimension: DEFAULT_MAX_DIMENSION,
            filter: FilterType::default(),
        }
    }
}

impl CompressOptions {
    pub fn with_target_kb(target_size_kb: u32) -> Self {
        Self {
            target_size_kb,
            ..Self::default()
        }
    }

    /// Ceiling in bytes (`target_size_kb * 1024`).
    ///
    /// Widened to `u64` so large ceilings do not wrap on 32-bit targets.
    pub fn target_bytes(&self) -> u64 {
        u64::from(self.target_size_kb) * 1024
    }
}

/// The re-encoded image handed to the upload step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// Encoded JPEG stream.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Quality of the returned encoding.
    pub quality: Quality,
    /// Number of encodes performed, including the returned one.
    pub attempts: u32,
}

impl CompressedImage {
    pub fn content_type(&self) -> &'static str {
        JPEG_CONTENT_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the encoding fits under `target_bytes`. A floor-quality
    /// result may not.
    pub fn is_within(&self, target_bytes: u64) -> bool {
        self.bytes.len() as u64 <= target_bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CompressOptions::default();
        assert_eq!(options.target_size_kb, 90);
        assert_eq!(options.max_dimension, 800);
        assert_eq!(options.filter, FilterType::Bilinear);
        assert_eq!(options.target_bytes(), 92_160);
    }

    #[test]
    fn test_with_target_kb() {
        let options = CompressOptions::with_target_kb(30);
        assert_eq!(options.target_bytes(), 30 * 1024);
        assert_eq!(options.max_dimension, DEFAULT_MAX_DIMENSION);
    }

    #[test]
    fn test_target_bytes_does_not_wrap() {
        let options = CompressOptions::with_target_kb(u32::MAX);
        assert_eq!(options.target_bytes(), u64::from(u32::MAX) * 1024);

        // 4 GiB exactly: 2^32 bytes, which a 32-bit usize cannot hold.
        let options = CompressOptions::with_target_kb(4_194_304);
        assert_eq!(options.target_bytes(), 1 << 32);
    }

    #[test]
    fn test_compressed_image_accessors() {
        let image = CompressedImage {
            bytes: vec![0xFF; 2048],
            width: 800,
            height: 400,
            quality: Quality::INITIAL,
            attempts: 1,
        };

        assert_eq!(image.content_type(), "image/jpeg");
        assert_eq!(image.len(), 2048);
        assert!(!image.is_empty());
        assert!(image.is_within(2048));
        assert!(!image.is_within(2047));
        assert_eq!(image.into_bytes().len(), 2048);
    }
}
