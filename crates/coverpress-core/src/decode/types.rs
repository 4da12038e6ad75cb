//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input buffer was empty.
    #[error("No image data provided")]
    Empty,

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A raster was requested with a zero-sized edge.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded raster with RGB pixel data.
///
/// Alpha is dropped at decode time since the only output format is JPEG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a uniformly filled raster.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let pixels = rgb.iter().copied().cycle().take(count * 3).collect();
        Self::new(width, height, pixels)
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbImage. Returns `None` if the buffer length
    /// does not match the dimensions.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Length of the longest edge in pixels.
    pub fn longest_side(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_filled_image() {
        let img = DecodedImage::filled(4, 2, [10, 20, 30]);
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.pixels.len(), 24);
        assert_eq!(&img.pixels[21..24], &[10, 20, 30]);
    }

    #[test]
    fn test_longest_side() {
        assert_eq!(DecodedImage::filled(30, 10, [0; 3]).longest_side(), 30);
        assert_eq!(DecodedImage::filled(10, 30, [0; 3]).longest_side(), 30);
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
        assert!(!DecodedImage::filled(1, 1, [0; 3]).is_empty());
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::UnsupportedFormat.to_string(),
            "Invalid or unsupported image format"
        );
        let err = DecodeError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (5) must be non-zero"
        );
    }

    #[test]
    fn test_filter_type_serde_names() {
        use serde::de::{value::Error, value::StrDeserializer, IntoDeserializer};

        let de: StrDeserializer<Error> = "lanczos3".into_deserializer();
        assert_eq!(FilterType::deserialize(de).unwrap(), FilterType::Lanczos3);
    }
}
