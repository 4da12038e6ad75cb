//! Coverpress WASM - WebAssembly bindings for Coverpress
//!
//! This crate exposes the coverpress-core functionality to the signup page.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `compress` - Promise-returning profile picture compression
//! - `decode` - Image decoding and resizing bindings
//! - `encode` - JPEG encoding bindings
//! - `validate` - Signup/sign-in validators and upload naming
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_image, validate_signup, upload_descriptor } from '@coverpress/wasm';
//!
//! await init();
//!
//! const error = validate_signup(form);
//! if (error) return alert(error);
//!
//! const bytes = new Uint8Array(await coverFile.arrayBuffer());
//! const jpeg = await compress_image(bytes, 90);
//! const upload = upload_descriptor(user.id);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod encode;
mod types;
mod validate;

pub use compress::{compress_image, compress_image_with};
pub use decode::{decode_image, resize, resize_to_fit};
pub use encode::{encode_jpeg, encode_jpeg_from_image};
pub use types::{JsCompressedImage, JsDecodedImage};
pub use validate::{
    bio_word_count, parse_login_identifier, passwords_match, uniqueness_debounce_ms,
    upload_descriptor, validate_bio, validate_email, validate_password, validate_signup,
    validate_stage_name,
};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
