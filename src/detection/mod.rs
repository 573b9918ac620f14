pub mod codec;
pub mod geometry;
pub mod grid;
pub mod morphology;
pub mod preprocessing;
pub mod recognize;
pub mod render;
pub mod roi;
pub mod watermark;

use image::DynamicImage;

use crate::error::DetectError;
use crate::models::{BoundingBox, DetectOptions, DetectionResult};

/// Table detection pipeline orchestrator
pub struct TableDetector {
    /// Longest image side after rectification.
    pub max_dimension: u32,
    /// Gaussian sigma applied before boundary edge detection.
    pub blur_sigma: f32,
    /// Canny hysteresis thresholds for boundary detection.
    pub canny_low: f32,
    pub canny_high: f32,
    /// Polygon approximation tolerance, as a fraction of the boundary
    /// perimeter.
    pub approx_tolerance: f64,
    /// Image width divided by this gives the line-extraction element length.
    pub kernel_divisor: u32,
    /// Boxes at most this large on both axes are not annotated.
    pub min_cell_size: u32,
}

impl TableDetector {
    pub fn new() -> Self {
        Self {
            max_dimension: 1024,
            blur_sigma: 1.0,
            canny_low: 50.0,
            canny_high: 300.0,
            approx_tolerance: 0.05,
            kernel_divisor: 50,
            min_cell_size: 30,
        }
    }

    /// Run the full pipeline on encoded image bytes.
    ///
    /// Decoding failures are the only error; a frame without a detectable
    /// table degrades to running grid detection on the full image.
    pub fn detect(
        &self,
        bytes: &[u8],
        options: &DetectOptions,
    ) -> Result<DetectionResult, DetectError> {
        let decoded = codec::decode(bytes)?;

        let table = if options.crop {
            log::debug!("extracting table region");
            self.rectify(decoded)
        } else {
            decoded
        };
        let resized = preprocessing::resize_to_cap(table, self.max_dimension);
        let original_image = codec::encode_jpeg(&resized)?;

        let bounding_boxes = if options.remove_watermark {
            log::debug!("removing watermark");
            let cleaned = watermark::remove_watermark(&resized);
            self.grid_boxes(&DynamicImage::ImageLuma8(cleaned))
        } else {
            self.grid_boxes(&resized)
        };
        log::debug!("traced {} grid regions", bounding_boxes.len());

        // Annotation always goes onto the resized image, never the
        // binarized watermark intermediate.
        let annotated = render::draw_boxes(&resized, &bounding_boxes, self.min_cell_size);
        let result_image = codec::encode_jpeg(&DynamicImage::ImageRgb8(annotated))?;

        Ok(DetectionResult {
            original_image,
            result_image,
            bounding_boxes,
        })
    }

    /// Run boundary detection and rectification alone (for debugging)
    pub fn rectify(&self, image: DynamicImage) -> DynamicImage {
        roi::extract_roi(
            image,
            self.blur_sigma,
            self.canny_low,
            self.canny_high,
            self.approx_tolerance,
        )
    }

    /// Run grid detection alone on an already rectified image (for debugging)
    pub fn grid_boxes(&self, image: &DynamicImage) -> Vec<BoundingBox> {
        grid::detect_grid(image, self.kernel_divisor)
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new()
    }
}
