//! Raster resizing.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target edge is zero,
/// or `DecodeError::CorruptedFile` if the source buffer does not match its
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Downscale an image so its longest edge is at most `max_edge`.
///
/// Images that already fit are returned unchanged; this never upscales.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if `max_edge` is zero.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: max_edge,
            height: max_edge,
        });
    }

    let (width, height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, width, height, filter)
}

/// Compute the working raster size for a `max_edge` bound.
///
/// A landscape or square image wider than `max_edge` is pinned to
/// `max_edge` wide; otherwise a portrait image taller than `max_edge` is
/// pinned to `max_edge` tall. The other edge is scaled by the same
/// floating-point factor, rounded, and kept at least one pixel.
pub fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    if width >= height && width > max_edge {
        let scale = max_edge as f64 / width as f64;
        (max_edge, scale_edge(height, scale))
    } else if height > max_edge {
        let scale = max_edge as f64 / height as f64;
        (scale_edge(width, scale), max_edge)
    } else {
        (width, height)
    }
}

fn scale_edge(edge: u32, scale: f64) -> u32 {
    ((edge as f64 * scale).round() as u32).max(1)
}
