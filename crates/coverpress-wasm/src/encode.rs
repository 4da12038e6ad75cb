//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode RGB pixel data to JPEG bytes
//! - [`encode_jpeg_from_image`] - Encode a JsDecodedImage to JPEG bytes

use crate::types::JsDecodedImage;
use coverpress_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data (3 bytes per pixel, row-major) to JPEG at
/// `quality` 1-100.
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match
/// `width * height * 3`, either dimension is zero, or encoding fails.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsDecodedImage to JPEG at `quality` 1-100.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg_image(&image.to_decoded(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
