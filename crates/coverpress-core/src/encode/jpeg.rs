//! JPEG encoding.
//!
//! Uses the `image` crate's baseline JPEG encoder. JPEG is the only output
//! format, so every compressed artifact carries [`JPEG_CONTENT_TYPE`].

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::decode::DecodedImage;

/// Content type declared for every encoded artifact.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder reported a failure
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoder finished without producing any bytes
    #[error("JPEG encoding produced no data")]
    EmptyOutput,
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` follows the encoder's 1-100 scale; out-of-range values are
/// clamped.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    if bytes.is_empty() {
        return Err(EncodeError::EmptyOutput);
    }
    Ok(bytes)
}

/// Encode a decoded raster to JPEG bytes.
pub fn encode_jpeg_image(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&image.pixels, image.width, image.height, quality)
}
