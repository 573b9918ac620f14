use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::{ThresholdType, otsu_level, threshold};

use super::morphology::{close_rect, open_rect, saturating_sub};

/// Number of background-estimation rounds; the structuring element grows
/// from 1×1 to 9×9 in odd steps.
const ESTIMATION_ROUNDS: u32 = 5;

/// Suppress a diffuse background watermark, producing a binary image (dark
/// strokes on white) for the grid detector.
///
/// The background layer is estimated by alternately closing and opening with
/// growing structuring elements until fine foreground detail is gone.
/// Subtracting the original from that estimate leaves the foreground
/// strokes, binarized at an Otsu level. Dark regions of the background
/// estimate are then re-binarized from the original intensities, so
/// genuinely dark content underneath the watermark survives.
pub fn remove_watermark(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();

    let mut background = gray.clone();
    for round in 0..ESTIMATION_ROUNDS {
        let side = 2 * round + 1;
        background = close_rect(&background, side, side, 1);
        background = open_rect(&background, side, side, 1);
    }

    let residual = saturating_sub(&background, &gray);
    let mut cleaned = threshold(
        &residual,
        otsu_level(&residual),
        ThresholdType::BinaryInverted,
    );

    // Locations the background estimate itself considers dark.
    let dark = threshold(
        &background,
        otsu_level(&background),
        ThresholdType::BinaryInverted,
    );

    let dark_values: Vec<u8> = gray
        .pixels()
        .zip(dark.pixels())
        .filter(|(_, d)| d[0] > 0)
        .map(|(g, _)| g[0])
        .collect();
    if dark_values.is_empty() {
        return cleaned;
    }

    // Otsu over exactly the masked intensities, via a 1-row strip image.
    let Some(strip) = GrayImage::from_raw(dark_values.len() as u32, 1, dark_values) else {
        return cleaned;
    };
    let level = otsu_level(&strip);
    for (x, y, d) in dark.enumerate_pixels() {
        if d[0] > 0 {
            let v = if gray.get_pixel(x, y)[0] > level { 255 } else { 0 };
            cleaned.put_pixel(x, y, Luma([v]));
        }
    }

    cleaned
}
