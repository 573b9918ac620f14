use serde::Serialize;

/// Axis-aligned cell rectangle in the coordinate space of the resized,
/// rectified image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Whether the box is large enough on either axis to be a cell rather
    /// than a line fragment.
    pub fn exceeds(&self, min_size: u32) -> bool {
        self.width > min_size || self.height > min_size
    }
}

/// Feature toggles for a single detection run.
#[derive(Debug, Clone, Copy)]
pub struct DetectOptions {
    /// Locate the table boundary and rectify it before grid detection.
    pub crop: bool,
    /// Suppress a background watermark before grid detection.
    pub remove_watermark: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            crop: true,
            remove_watermark: false,
        }
    }
}

/// Output of one detection run.
///
/// `original_image` is the resized, rectified table as JPEG bytes;
/// `result_image` is the same image with cell outlines drawn on it.
/// `bounding_boxes` is in reading order and in the coordinate space of
/// those images.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub original_image: Vec<u8>,
    pub result_image: Vec<u8>,
    pub bounding_boxes: Vec<BoundingBox>,
}
