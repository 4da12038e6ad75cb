//! Image decoding for Coverpress.
//!
//! This module provides functionality for:
//! - Decoding whatever image format a file picker hands over (JPEG, PNG,
//!   GIF, WebP, BMP) into an RGB raster
//! - Applying EXIF orientation so the raster matches what the user saw
//! - Downscaling rasters to a maximum edge length
//!
//! # Examples
//!
//! ```ignore
//! use coverpress_core::decode::{decode_image, resize_to_fit, FilterType};
//!
//! let bytes = std::fs::read("avatar.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! let working = resize_to_fit(&image, 800, FilterType::Bilinear).unwrap();
//! println!("Working raster {}x{}", working.width, working.height);
//! ```

mod resize;
mod source;
mod types;

pub use resize::{fit_dimensions, resize, resize_to_fit};
pub use source::{decode_image, read_orientation};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
