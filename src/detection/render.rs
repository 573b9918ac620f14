use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::models::BoundingBox;

const OUTLINE: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw cell outlines onto an RGB copy of `image`.
///
/// Boxes no larger than `min_size` on both axes are line fragments rather
/// than cells; they stay in the structural output but are not drawn.
pub fn draw_boxes(image: &DynamicImage, boxes: &[BoundingBox], min_size: u32) -> RgbImage {
    let mut canvas = image.to_rgb8();
    for bbox in boxes {
        if !bbox.exceeds(min_size) {
            continue;
        }
        // Two nested 1px rectangles make the 2px stroke.
        for inset in 0..2u32 {
            if bbox.width > 2 * inset && bbox.height > 2 * inset {
                let rect = Rect::at((bbox.x + inset) as i32, (bbox.y + inset) as i32)
                    .of_size(bbox.width - 2 * inset, bbox.height - 2 * inset);
                draw_hollow_rect_mut(&mut canvas, rect, OUTLINE);
            }
        }
    }
    canvas
}
