//! Decode/encode seam for the compressor.

use std::future::Future;

use super::Quality;
use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode::{self, EncodeError};

/// The two awaitable steps of a compression.
///
/// Each call is a suspension point, so an implementation backed by a
/// non-blocking platform facility can yield while it works. Futures are
/// not required to be `Send`; the browser runs them on a single thread.
pub trait Codec {
    /// Decode arbitrary image bytes into an RGB raster.
    fn decode(&self, bytes: &[u8]) -> impl Future<Output = Result<DecodedImage, DecodeError>>;

    /// Encode a raster as JPEG at `quality`.
    fn encode(
        &self,
        image: &DecodedImage,
        quality: Quality,
    ) -> impl Future<Output = Result<Vec<u8>, EncodeError>>;
}

/// Codec backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl Codec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> impl Future<Output = Result<DecodedImage, DecodeError>> {
        async move { decode::decode_image(bytes) }
    }

    fn encode(
        &self,
        image: &DecodedImage,
        quality: Quality,
    ) -> impl Future<Output = Result<Vec<u8>, EncodeError>> {
        async move { encode::encode_jpeg_image(image, quality.jpeg_quality()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_codec_encode_then_decode() {
        let codec = ImageCodec;
        let image = DecodedImage::filled(24, 12, [10, 200, 30]);

        let jpeg = pollster::block_on(codec.encode(&image, Quality::INITIAL)).unwrap();
        let decoded = pollster::block_on(codec.decode(&jpeg)).unwrap();

        assert_eq!(decoded.dimensions(), (24, 12));
    }

    #[test]
    fn test_image_codec_rejects_garbage() {
        let result = pollster::block_on(ImageCodec.decode(b"\x00\x01\x02\x03"));
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }
}
