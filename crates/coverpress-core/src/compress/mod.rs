//! Adaptive profile-picture compression.
//!
//! Decodes an uploaded image, downscales it so its longest side is at most
//! [`DEFAULT_MAX_DIMENSION`] pixels, then encodes JPEG at quality 0.90,
//! 0.85, ... down to 0.10 until the result fits under the target size
//! ([`DEFAULT_TARGET_SIZE_KB`] KiB by default). If even the floor quality
//! is too large, that encoding is returned anyway.
//!
//! Decoding and every encode attempt go through [`Codec`], whose methods
//! return futures, so callers can await a compression without blocking.
//!
//! # Examples
//!
//! ```ignore
//! use coverpress_core::compress::compress_image;
//!
//! let upload = std::fs::read("portrait.png").unwrap();
//! let compressed = compress_image(&upload, 90).await.unwrap();
//! println!(
//!     "{}x{} at q={} in {} attempts",
//!     compressed.width, compressed.height, compressed.quality, compressed.attempts
//! );
//! ```

mod codec;
mod compressor;
mod options;
mod quality;

pub use codec::{Codec, ImageCodec};
pub use compressor::{compress_image, CompressError, Compressor};
pub use options::{CompressOptions, CompressedImage, DEFAULT_MAX_DIMENSION, DEFAULT_TARGET_SIZE_KB};
pub use quality::Quality;
