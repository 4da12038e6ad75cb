//! Profile picture compression WASM bindings.
//!
//! Both functions return a `Promise`; decoding and each encode attempt run
//! as one future driven by the browser's microtask queue.
//!
//! # Example
//!
//! ```typescript
//! import { compress_image, compress_image_with } from '@coverpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const jpeg = await compress_image(bytes, 90);
//! const blob = new Blob([jpeg], { type: 'image/jpeg' });
//!
//! const detailed = await compress_image_with(bytes, { targetSizeKb: 60, maxDimension: 512 });
//! console.log(`${detailed.width}x${detailed.height} q=${detailed.quality}`);
//! ```

use coverpress_core::compress::{CompressOptions, Compressor, DEFAULT_TARGET_SIZE_KB};
use js_sys::{Promise, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::types::JsCompressedImage;

/// Compress image bytes to a JPEG of at most `target_size_kb` KiB
/// (default 90), resolving to a `Uint8Array`.
///
/// If even the lowest quality is over target, that encoding is still
/// returned. Rejects with a message if the input cannot be decoded or
/// encoding fails.
#[wasm_bindgen]
pub fn compress_image(bytes: Vec<u8>, target_size_kb: Option<u32>) -> Promise {
    let options = CompressOptions::with_target_kb(target_size_kb.unwrap_or(DEFAULT_TARGET_SIZE_KB));

    future_to_promise(async move {
        let compressed = Compressor::new(options)
            .compress(&bytes)
            .await
            .map_err(report)?;
        Ok(Uint8Array::from(compressed.bytes.as_slice()).into())
    })
}

/// Compress with explicit options, resolving to a `JsCompressedImage`.
///
/// `options` is `{ targetSizeKb?, maxDimension?, filter? }` where filter is
/// `"nearest" | "bilinear" | "lanczos3"`. `undefined` uses the defaults.
#[wasm_bindgen]
pub fn compress_image_with(bytes: Vec<u8>, options: JsValue) -> Result<Promise, JsValue> {
    let options = parse_options(options)?;

    Ok(future_to_promise(async move {
        let compressed = Compressor::new(options)
            .compress(&bytes)
            .await
            .map_err(report)?;
        Ok(JsCompressedImage::from(compressed).into())
    }))
}

fn parse_options(options: JsValue) -> Result<CompressOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(CompressOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid compress options: {}", e)))
}

fn report(err: coverpress_core::CompressError) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::error_2(&JsValue::from_str("Compression error:"), &message);
    message
}

/// The `Promise`-returning functions only run on wasm32; see `wasm_tests`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_core() {
        let options = CompressOptions::with_target_kb(DEFAULT_TARGET_SIZE_KB);
        assert_eq!(options, CompressOptions::default());
    }
}
