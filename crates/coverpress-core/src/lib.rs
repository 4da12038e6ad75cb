//! Coverpress Core - profile picture compression and signup validation
//!
//! This crate provides the browser-independent logic behind the signup
//! page: adaptive JPEG compression of the uploaded profile picture, the
//! form validators, sign-in identifier resolution and upload naming.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod upload;
pub mod validate;

pub use compress::{
    compress_image, Codec, CompressError, CompressOptions, CompressedImage, Compressor,
    ImageCodec, Quality,
};
pub use decode::{DecodeError, DecodedImage, FilterType};
pub use encode::EncodeError;
pub use upload::UploadDescriptor;
pub use validate::{LoginIdentifier, PasswordCheck, SignupError, SignupForm};
