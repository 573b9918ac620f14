use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

use gridframe::BoundingBox;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Creates a uniform white canvas.
pub fn blank_canvas(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, WHITE))
}

/// Draws a `rows`×`cols` table of equal cells with `line`-px black rule
/// lines, inset `margin` px from every canvas edge. `margin` must be at
/// least `line`.
pub fn grid_image(
    width: u32,
    height: u32,
    rows: u32,
    cols: u32,
    margin: u32,
    line: u32,
) -> DynamicImage {
    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, WHITE);
    let span_x = width - 2 * margin;
    let span_y = height - 2 * margin;

    for i in 0..=cols {
        let x = margin + span_x * i / cols;
        for dx in 0..line {
            let px = (x + dx).min(width - 1);
            for y in margin..=(margin + span_y) {
                img.put_pixel(px, y.min(height - 1), BLACK);
            }
        }
    }
    for j in 0..=rows {
        let y = margin + span_y * j / rows;
        for dy in 0..line {
            let py = (y + dy).min(height - 1);
            for x in margin..=(margin + span_x) {
                img.put_pixel(x.min(width - 1), py, BLACK);
            }
        }
    }
    DynamicImage::ImageRgb8(img)
}

/// Draws a filled white quadrilateral on a black canvas, simulating a page
/// photographed at an angle.
pub fn quad_image(width: u32, height: u32, corners: [(i32, i32); 4]) -> DynamicImage {
    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, BLACK);
    let polygon: Vec<Point<i32>> = corners.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(&mut img, &polygon, WHITE);
    DynamicImage::ImageRgb8(img)
}

/// Encodes an image to PNG bytes, the way an upload would arrive.
pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("failed to encode fixture image");
    bytes
}

/// Keeps boxes that plausibly are cells: larger than the 30px fragment
/// bound on one axis, but well below the table and page extents. This is
/// the caller-side size filter the structural output expects.
pub fn cell_boxes(boxes: &[BoundingBox], width: u32, height: u32) -> Vec<BoundingBox> {
    boxes
        .iter()
        .copied()
        .filter(|b| b.exceeds(30))
        .filter(|b| b.width < width * 7 / 10 && b.height < height * 7 / 10)
        .collect()
}
