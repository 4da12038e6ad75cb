//! Format-sniffing image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image of any supported format, applying EXIF orientation.
///
/// The format is sniffed from the leading bytes, so the caller does not
/// need to know what the file picker handed over. The result is always
/// RGB8 with the orientation baked in, which matches how a browser
/// renders the picture before it is drawn onto a canvas.
///
/// # Errors
///
/// - `DecodeError::Empty` for a zero-length buffer
/// - `DecodeError::UnsupportedFormat` if the format cannot be recognized
/// - `DecodeError::CorruptedFile` if the recognized format fails to decode
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, read_orientation(bytes));
    Ok(DecodedImage::from_rgb_image(oriented.into_rgb8()))
}

/// Read the EXIF orientation tag.
///
/// Returns `Orientation::Normal` when the container carries no EXIF block
/// or the tag is absent.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
