use std::io::Cursor;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;

use crate::error::DetectError;

/// Fixed JPEG quality so identical pixel input always produces identical
/// bytes.
const JPEG_QUALITY: u8 = 95;

/// Decode encoded image bytes (JPEG, PNG, ...) into an RGB8 image.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, DetectError> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(DetectError::EmptyImage);
    }
    Ok(DynamicImage::ImageRgb8(img.to_rgb8()))
}

/// Encode an image as JPEG bytes.
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, DetectError> {
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
    image.write_with_encoder(encoder).map_err(DetectError::Encode)?;
    Ok(bytes)
}
