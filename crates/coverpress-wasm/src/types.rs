//! WASM-compatible wrapper types for image data.
//!
//! JavaScript-friendly types that wrap the core Coverpress types and handle
//! conversion between Rust and JavaScript representations.

use coverpress_core::decode::{DecodedImage, FilterType};
use coverpress_core::CompressedImage;
use wasm_bindgen::prelude::*;

/// A decoded RGB raster for JavaScript.
///
/// Calling `pixels()` copies the buffer out of WASM memory into a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create from dimensions and RGB pixel data (3 bytes per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the pixel buffer (width * height * 3).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns a copy of the RGB pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to the core type. Clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A compressed JPEG ready for upload.
#[wasm_bindgen]
pub struct JsCompressedImage {
    inner: CompressedImage,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Copy of the encoded JPEG bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Quality of the returned encoding, 0.1 to 0.9.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.inner.quality.as_f32()
    }

    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u32 {
        self.inner.attempts
    }

    #[wasm_bindgen(getter, js_name = contentType)]
    pub fn content_type(&self) -> String {
        self.inner.content_type().to_string()
    }
}

impl From<CompressedImage> for JsCompressedImage {
    fn from(inner: CompressedImage) -> Self {
        Self { inner }
    }
}

/// Convert a u8 filter value to the core FilterType.
///
/// 0 = Nearest, 1 = Bilinear, 2 = Lanczos3; anything else is Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}
