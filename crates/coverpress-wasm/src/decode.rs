//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode any supported image format from bytes
//! - [`resize`] - Resize an image to exact dimensions
//! - [`resize_to_fit`] - Downscale an image to a maximum edge, preserving aspect ratio
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, resize_to_fit } from '@coverpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const preview = resize_to_fit(image, 800, 1);
//! console.log(`Preview: ${preview.width}x${preview.height}`);
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use coverpress_core::decode;
use wasm_bindgen::prelude::*;

/// Decode image bytes of any supported format, applying EXIF orientation.
///
/// # Errors
///
/// Returns an error if the bytes are empty, not a recognized format, or
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// `filter`: 0=Nearest, 1=Bilinear (default), 2=Lanczos3.
#[wasm_bindgen]
pub fn resize(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize(&image.to_decoded(), width, height, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Downscale an image so its longest edge is at most `max_edge`.
///
/// Images that already fit come back unchanged.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsDecodedImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize_to_fit(&image.to_decoded(), max_edge, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests that exercise the core calls behind the bindings.
///
/// Functions returning `Result<T, JsValue>` only run on wasm32; see
/// `wasm_tests` below.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_to_fit_via_wrapper() {
        let img = JsDecodedImage::new(1600, 900, vec![0u8; 1600 * 900 * 3]);
        let resized = decode::resize_to_fit(&img.to_decoded(), 800, filter_from_u8(1)).unwrap();
        assert_eq!(resized.dimensions(), (800, 450));
    }
}
