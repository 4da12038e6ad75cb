//! Image encoding for Coverpress.
//!
//! JPEG is the single lossy output format. Quality is expressed on the
//! encoder's 1-100 scale here; the compressor maps its own quality
//! parameter onto it.
//!
//! # Examples
//!
//! ```ignore
//! use coverpress_core::encode::encode_jpeg;
//!
//! let pixels = vec![128u8; 100 * 100 * 3];
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 90).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_image, EncodeError, JPEG_CONTENT_TYPE};
