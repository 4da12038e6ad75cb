//! The adaptive quality-lowering loop.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{Codec, CompressOptions, CompressedImage, ImageCodec, Quality};
use crate::decode::{self, DecodeError};
use crate::encode::EncodeError;

/// Terminal failure of one compression.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The input could not be read as an image.
    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),

    /// The encoder failed on an attempt.
    #[error("Failed to compress image: {0}")]
    Encode(#[from] EncodeError),
}

/// Re-encodes images as JPEG under a byte ceiling.
///
/// Holds only immutable settings, so one compressor can serve any number of
/// concurrent calls; each call owns its raster and quality state.
#[derive(Debug, Clone, Default)]
pub struct Compressor<C = ImageCodec> {
    codec: C,
    options: CompressOptions,
}

impl Compressor<ImageCodec> {
    pub fn new(options: CompressOptions) -> Self {
        Self::with_codec(ImageCodec, options)
    }
}

impl<C: Codec> Compressor<C> {
    pub fn with_codec(codec: C, options: CompressOptions) -> Self {
        Self { codec, options }
    }

    pub fn options(&self) -> &CompressOptions {
        &self.options
    }

    /// Decode `bytes`, downscale to the maximum dimension, then encode at
    /// falling quality until the result fits or quality reaches the floor.
    ///
    /// The floor-quality encoding is returned even when it is still over
    /// the target.
    pub async fn compress(&self, bytes: &[u8]) -> Result<CompressedImage, CompressError> {
        let source = self.codec.decode(bytes).await?;

        let max_edge = self.options.max_dimension.max(1);
        let (width, height) = decode::fit_dimensions(source.width, source.height, max_edge);
        let working = decode::resize(&source, width, height, self.options.filter)?;
        drop(source);

        let target_bytes = self.options.target_bytes();
        let mut quality = Quality::INITIAL;
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let encoded = self.codec.encode(&working, quality).await?;
            if encoded.is_empty() {
                return Err(EncodeError::EmptyOutput.into());
            }

            debug!(
                attempt = attempts,
                quality = quality.as_f32(),
                size = encoded.len(),
                target = target_bytes,
                "encoded attempt"
            );

            let fits = encoded.len() as u64 <= target_bytes;
            if fits || quality.is_floor() {
                if fits {
                    info!(
                        width,
                        height,
                        quality = quality.as_f32(),
                        attempts,
                        size = encoded.len(),
                        "image compressed"
                    );
                } else {
                    warn!(
                        size = encoded.len(),
                        target = target_bytes,
                        attempts,
                        "image still over target at floor quality"
                    );
                }

                return Ok(CompressedImage {
                    bytes: encoded,
                    width,
                    height,
                    quality,
                    attempts,
                });
            }

            quality = quality.step_down();
        }
    }
}

/// Compress `bytes` to at most `target_size_kb` KiB with default settings.
pub async fn compress_image(
    bytes: &[u8],
    target_size_kb: u32,
) -> Result<CompressedImage, CompressError> {
    Compressor::new(CompressOptions::with_target_kb(target_size_kb))
        .compress(bytes)
        .await
}


#[cfg(test)]
mod proptests {
    use std::future::Future;

    use proptest::prelude::*;

    use super::*;
    use crate::decode::DecodedImage;

    /// Codec whose encoded size falls linearly with quality.
    struct LinearCodec {
        width: u32,
        height: u32,
        bytes_per_percent: usize,
    }

    impl Codec for LinearCodec {
        fn decode(
            &self,
            _bytes: &[u8],
        ) -> impl Future<Output = Result<DecodedImage, DecodeError>> {
            let (width, height) = (self.width, self.height);
            async move { Ok(DecodedImage::filled(width, height, [0, 0, 0])) }
        }

        fn encode(
            &self,
            _image: &DecodedImage,
            quality: Quality,
        ) -> impl Future<Output = Result<Vec<u8>, EncodeError>> {
            let size = self.bytes_per_percent * quality.jpeg_quality() as usize;
            async move { Ok(vec![1u8; size]) }
        }
    }

    proptest! {
        /// Property: the loop terminates within 17 attempts, stops at the
        /// first fitting quality, and otherwise returns the floor result.
        #[test]
        fn prop_bounded_and_best_effort(
            bytes_per_percent in 1usize..=20_000,
            target_size_kb in 1u32..=200,
            width in 1u32..=64,
            height in 1u32..=64,
        ) {
            let codec = LinearCodec { width, height, bytes_per_percent };
            let options = CompressOptions::with_target_kb(target_size_kb);
            let target = options.target_bytes();
            let result = pollster::block_on(
                Compressor::with_codec(codec, options).compress(b"x")
            ).unwrap();

            prop_assert!(result.attempts >= 1 && result.attempts <= Quality::MAX_ATTEMPTS);
            prop_assert!(result.quality >= Quality::FLOOR);
            prop_assert!(result.is_within(target) || result.quality == Quality::FLOOR);

            let expected_quality = 90 - 5 * (result.attempts as u8 - 1);
            prop_assert_eq!(result.quality.jpeg_quality(), expected_quality);

            if result.attempts > 1 {
                let previous = bytes_per_percent * (expected_quality as usize + 5);
                prop_assert!(previous as u64 > target);
            }
        }
    }
}
