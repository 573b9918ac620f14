use image::{DynamicImage, Rgb, RgbImage};
use imageproc::contours::find_contours;
use imageproc::geometric_transformations::{Interpolation, warp_into};
use imageproc::geometry::{approximate_polygon_dp, arc_length};

use super::geometry::{contour_area, order_corners, perspective_transform};
use super::preprocessing::{apply_blur, detect_edges, to_grayscale};

/// Locate the dominant quadrilateral boundary in `image` and return a
/// perspective-rectified crop of it, sampled from the unblurred input
/// pixels.
///
/// When no usable boundary exists (no contours at all, the boundary does
/// not approximate to four points, or the four points are degenerate) the
/// input is returned unchanged rather than failing: a page without a
/// visible table border is still a valid input.
pub fn extract_roi(
    image: DynamicImage,
    blur_sigma: f32,
    canny_low: f32,
    canny_high: f32,
    approx_tolerance: f64,
) -> DynamicImage {
    let gray = to_grayscale(&image);
    let blurred = apply_blur(&gray, blur_sigma);
    let edges = detect_edges(&blurred, canny_low, canny_high);

    let contours = find_contours::<i32>(&edges);
    let Some((_, outline)) = contours
        .iter()
        .map(|c| (contour_area(&c.points), c))
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
    else {
        log::debug!("no boundary contours found, keeping the full frame");
        return image;
    };

    let perimeter = arc_length(&outline.points, true);
    let polygon = approximate_polygon_dp(&outline.points, approx_tolerance * perimeter, true);
    if polygon.len() != 4 {
        log::debug!(
            "boundary approximates to {} points, keeping the full frame",
            polygon.len()
        );
        return image;
    }

    let corners = order_corners([
        (polygon[0].x as f32, polygon[0].y as f32),
        (polygon[1].x as f32, polygon[1].y as f32),
        (polygon[2].x as f32, polygon[2].y as f32),
        (polygon[3].x as f32, polygon[3].y as f32),
    ]);

    match perspective_transform(&corners) {
        Ok((projection, width, height)) => {
            let mut rectified = RgbImage::new(width, height);
            warp_into(
                &image.to_rgb8(),
                &projection,
                Interpolation::Bilinear,
                Rgb([0, 0, 0]),
                &mut rectified,
            );
            DynamicImage::ImageRgb8(rectified)
        }
        Err(err) => {
            log::debug!("{err}, keeping the full frame");
            image
        }
    }
}
