//! Grayscale morphology with rectangular structuring elements.
//!
//! imageproc parameterizes its morphology by distance norms, which cannot
//! express the 1×n and n×1 kernels line extraction needs, so erosion and
//! dilation are implemented here as separable row and column window scans.

use image::{GrayImage, Luma};

/// A kernel of length `k` spans `[i - (k-1)/2, i + k/2]`: odd kernels are
/// symmetric, even kernels extend one extra pixel forward.
fn reach(k: u32) -> (i64, i64) {
    ((k as i64 - 1) / 2, k as i64 / 2)
}

fn horizontal_pass(img: &GrayImage, k: u32, maximum: bool) -> GrayImage {
    if k <= 1 {
        return img.clone();
    }
    let (w, h) = img.dimensions();
    let (back, fwd) = reach(k);
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let lo = (x as i64 - back).max(0) as u32;
            let hi = (x as i64 + fwd).min(w as i64 - 1) as u32;
            let mut v = img.get_pixel(lo, y)[0];
            for sx in lo + 1..=hi {
                let px = img.get_pixel(sx, y)[0];
                v = if maximum { v.max(px) } else { v.min(px) };
            }
            out.put_pixel(x, y, Luma([v]));
        }
    }
    out
}

fn vertical_pass(img: &GrayImage, k: u32, maximum: bool) -> GrayImage {
    if k <= 1 {
        return img.clone();
    }
    let (w, h) = img.dimensions();
    let (back, fwd) = reach(k);
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        let lo = (y as i64 - back).max(0) as u32;
        let hi = (y as i64 + fwd).min(h as i64 - 1) as u32;
        for x in 0..w {
            let mut v = img.get_pixel(x, lo)[0];
            for sy in lo + 1..=hi {
                let px = img.get_pixel(x, sy)[0];
                v = if maximum { v.max(px) } else { v.min(px) };
            }
            out.put_pixel(x, y, Luma([v]));
        }
    }
    out
}

/// Erosion with a `kw`×`kh` rectangular element: windowed minimum.
pub fn erode_rect(img: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    vertical_pass(&horizontal_pass(img, kw, false), kh, false)
}

/// Dilation with a `kw`×`kh` rectangular element: windowed maximum.
pub fn dilate_rect(img: &GrayImage, kw: u32, kh: u32) -> GrayImage {
    vertical_pass(&horizontal_pass(img, kw, true), kh, true)
}

/// Opening: erosion then dilation. The iteration count multiplies the
/// individual steps (erode ×n, then dilate ×n), not the whole opening.
pub fn open_rect(img: &GrayImage, kw: u32, kh: u32, iterations: u32) -> GrayImage {
    let mut out = img.clone();
    for _ in 0..iterations {
        out = erode_rect(&out, kw, kh);
    }
    for _ in 0..iterations {
        out = dilate_rect(&out, kw, kh);
    }
    out
}

/// Closing: dilation then erosion, iterated like [`open_rect`].
pub fn close_rect(img: &GrayImage, kw: u32, kh: u32, iterations: u32) -> GrayImage {
    let mut out = img.clone();
    for _ in 0..iterations {
        out = dilate_rect(&out, kw, kh);
    }
    for _ in 0..iterations {
        out = erode_rect(&out, kw, kh);
    }
    out
}

/// Per-pixel saturating sum of two equally sized images.
pub fn saturating_add(a: &GrayImage, b: &GrayImage) -> GrayImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let mut out = a.clone();
    for (p, q) in out.pixels_mut().zip(b.pixels()) {
        p[0] = p[0].saturating_add(q[0]);
    }
    out
}

/// Per-pixel saturating difference `a - b` of two equally sized images.
pub fn saturating_sub(a: &GrayImage, b: &GrayImage) -> GrayImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let mut out = a.clone();
    for (p, q) in out.pixels_mut().zip(b.pixels()) {
        p[0] = p[0].saturating_sub(q[0]);
    }
    out
}

/// Mean intensity, truncated towards zero.
pub fn mean_intensity(img: &GrayImage) -> u8 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0;
    }
    let total: u64 = img.pixels().map(|p| p[0] as u64).sum();
    (total / count) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: &[&[u8]]) -> GrayImage {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        GrayImage::from_fn(w, h, |x, y| Luma([rows[y as usize][x as usize]]))
    }

    #[test]
    fn erode_removes_isolated_pixel() {
        let img = from_rows(&[
            &[0, 0, 0],
            &[0, 255, 0],
            &[0, 0, 0],
        ]);
        let out = erode_rect(&img, 3, 3);
        assert!(out.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn dilate_grows_single_pixel_to_kernel() {
        let img = from_rows(&[
            &[0, 0, 0],
            &[0, 255, 0],
            &[0, 0, 0],
        ]);
        let out = dilate_rect(&img, 3, 3);
        assert!(out.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn unit_kernel_is_identity() {
        let img = from_rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(erode_rect(&img, 1, 1), img);
        assert_eq!(dilate_rect(&img, 1, 1), img);
    }

    #[test]
    fn tall_opening_keeps_long_runs_only() {
        // A 2px and a 5px vertical run; opening with a 1x4 element keeps
        // only the long one.
        let mut img = GrayImage::new(5, 6);
        for y in 0..2 {
            img.put_pixel(1, y, Luma([255]));
        }
        for y in 0..5 {
            img.put_pixel(3, y, Luma([255]));
        }
        let out = open_rect(&img, 1, 4, 1);
        assert_eq!(out.get_pixel(1, 0)[0], 0);
        assert_eq!(out.get_pixel(1, 1)[0], 0);
        assert_eq!(out.get_pixel(3, 2)[0], 255);
    }

    #[test]
    fn saturating_arithmetic_clamps() {
        let a = GrayImage::from_pixel(2, 1, Luma([200u8]));
        let b = GrayImage::from_pixel(2, 1, Luma([100u8]));
        assert_eq!(saturating_add(&a, &b).get_pixel(0, 0)[0], 255);
        assert_eq!(saturating_sub(&b, &a).get_pixel(0, 0)[0], 0);
        assert_eq!(saturating_sub(&a, &b).get_pixel(0, 0)[0], 100);
    }

    #[test]
    fn mean_is_truncated() {
        let img = from_rows(&[&[0, 0, 0, 255]]);
        assert_eq!(mean_intensity(&img), 63);
    }
}
