use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply Gaussian blur to reduce noise
pub fn apply_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}

/// Detect edges using Canny edge detector
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}

/// Flip dark and bright so rule lines become the bright class.
pub fn invert(img: &GrayImage) -> GrayImage {
    let mut out = img.clone();
    image::imageops::invert(&mut out);
    out
}

/// Scale the image down so its longer side is at most `cap` pixels, keeping
/// the aspect ratio. Images already within the cap are returned unchanged.
pub fn resize_to_cap(img: DynamicImage, cap: u32) -> DynamicImage {
    let longest = img.width().max(img.height());
    if longest <= cap {
        return img;
    }
    let ratio = cap as f32 / longest as f32;
    let width = ((img.width() as f32 * ratio).round() as u32).max(1);
    let height = ((img.height() as f32 * ratio).round() as u32).max(1);
    img.resize_exact(width, height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn color_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb([12u8, 34, 56])))
    }

    #[test]
    fn small_images_are_untouched() {
        let img = color_image(800, 600);
        let out = resize_to_cap(img, 1024);
        assert_eq!(out.width(), 800);
        assert_eq!(out.height(), 600);
        assert_eq!(out.to_rgb8().get_pixel(10, 10), &Rgb([12u8, 34, 56]));
    }

    #[test]
    fn long_side_lands_exactly_on_the_cap() {
        let out = resize_to_cap(color_image(2048, 1024), 1024);
        assert_eq!((out.width(), out.height()), (1024, 512));

        let out = resize_to_cap(color_image(900, 1500), 1024);
        assert_eq!(out.height(), 1024);
    }

    #[test]
    fn aspect_ratio_survives_within_rounding() {
        let out = resize_to_cap(color_image(1500, 900), 1024);
        assert_eq!(out.width(), 1024);
        let before = 1500.0 / 900.0;
        let after = out.width() as f64 / out.height() as f64;
        assert!((before - after).abs() < 0.01);
    }

    #[test]
    fn invert_flips_extremes() {
        let gray = GrayImage::from_pixel(4, 4, image::Luma([200u8]));
        let out = invert(&gray);
        assert_eq!(out.get_pixel(0, 0)[0], 55);
    }
}
