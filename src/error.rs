use thiserror::Error;

/// Errors surfaced to callers of [`crate::TableDetector::detect`].
///
/// Geometric anomalies (no table boundary, degenerate corner points) are not
/// part of this surface; they degrade to the uncropped image inside the
/// pipeline.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("could not decode input image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decoded image has zero width or height")]
    EmptyImage,

    #[error("could not encode result image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Four corner points that do not span a quadrilateral, so no perspective
/// transform exists. Caught at the ROI extraction boundary and never
/// surfaced to callers.
#[derive(Debug, Error)]
#[error("corner points are collinear or coincident")]
pub struct DegenerateQuadrilateral;
