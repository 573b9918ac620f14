use image::{DynamicImage, GrayImage};
use imageproc::contours::find_contours;
use imageproc::point::Point;

use super::morphology::{erode_rect, mean_intensity, open_rect, saturating_add};
use super::preprocessing::{invert, to_grayscale};
use crate::models::BoundingBox;

/// Convert a table image into its cell bounding boxes, in reading order
/// (top-to-bottom, left-to-right over the `(y, x)` composite key).
///
/// Every traced region is kept, including fragments no larger than 30px on
/// both axes and the outer table border; callers wanting cells only apply
/// their own size filter.
pub fn detect_grid(image: &DynamicImage, kernel_divisor: u32) -> Vec<BoundingBox> {
    let gray = to_grayscale(image);
    let lines = invert(&gray);

    let kernel_len = (gray.width() / kernel_divisor.max(1)).max(1);

    // Opening with a thin element keeps only runs at least as long as the
    // element, which separates rule lines from text and speckle.
    let vertical = open_rect(&lines, 1, kernel_len, 3);
    let horizontal = open_rect(&lines, kernel_len, 1, 3);

    let merged = saturating_add(&vertical, &horizontal);
    let mut cells = invert(&merged);
    for _ in 0..2 {
        cells = erode_rect(&cells, 2, 2);
    }

    let binary = binarize_at_mean(cells);

    let mut boxes: Vec<BoundingBox> = find_contours::<i32>(&binary)
        .iter()
        .filter_map(|c| bounding_box(&c.points))
        .collect();
    boxes.sort_by_key(|b| (b.y, b.x));
    boxes
}

/// Binarize against the image's own mean intensity: below the mean maps to
/// background, at or above to foreground.
fn binarize_at_mean(mut img: GrayImage) -> GrayImage {
    let mean = mean_intensity(&img).max(1);
    for p in img.pixels_mut() {
        p[0] = if p[0] >= mean { 255 } else { 0 };
    }
    img
}

fn bounding_box(points: &[Point<i32>]) -> Option<BoundingBox> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(BoundingBox {
        x: min_x.max(0) as u32,
        y: min_y.max(0) as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    })
}
