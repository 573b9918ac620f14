use imageproc::geometric_transformations::Projection;
use imageproc::point::Point;

use crate::error::DegenerateQuadrilateral;

/// The four corners of a detected table boundary, in fixed roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedCorners {
    pub top_left: (f32, f32),
    pub top_right: (f32, f32),
    pub bottom_right: (f32, f32),
    pub bottom_left: (f32, f32),
}

/// Assign corner roles to four unordered points.
///
/// Top-left minimizes x + y and bottom-right maximizes it; top-right
/// minimizes y - x and bottom-left maximizes it. The assignment does not
/// depend on the order the points arrive in.
pub fn order_corners(points: [(f32, f32); 4]) -> OrderedCorners {
    OrderedCorners {
        top_left: select(&points, |p| p.0 + p.1, false),
        bottom_right: select(&points, |p| p.0 + p.1, true),
        top_right: select(&points, |p| p.1 - p.0, false),
        bottom_left: select(&points, |p| p.1 - p.0, true),
    }
}

fn select(points: &[(f32, f32); 4], key: impl Fn(&(f32, f32)) -> f32, largest: bool) -> (f32, f32) {
    let mut best = points[0];
    for p in &points[1..] {
        let better = if largest {
            key(p) > key(&best)
        } else {
            key(p) < key(&best)
        };
        if better {
            best = *p;
        }
    }
    best
}

/// Derive the projection that warps `corners` onto an axis-aligned rectangle,
/// along with the rectangle's dimensions.
///
/// The target width is the longer of the two horizontal edges and the target
/// height the longer of the two vertical edges, truncated, never below 1.
pub fn perspective_transform(
    corners: &OrderedCorners,
) -> Result<(Projection, u32, u32), DegenerateQuadrilateral> {
    let width = (distance(corners.top_left, corners.top_right)
        .max(distance(corners.bottom_left, corners.bottom_right)) as u32)
        .max(1);
    let height = (distance(corners.top_left, corners.bottom_left)
        .max(distance(corners.top_right, corners.bottom_right)) as u32)
        .max(1);

    let from = [
        corners.top_left,
        corners.top_right,
        corners.bottom_right,
        corners.bottom_left,
    ];
    let to = [
        (0.0, 0.0),
        ((width - 1) as f32, 0.0),
        ((width - 1) as f32, (height - 1) as f32),
        (0.0, (height - 1) as f32),
    ];

    let projection =
        Projection::from_control_points(from, to).ok_or(DegenerateQuadrilateral)?;
    Ok((projection, width, height))
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Enclosed area of a closed contour, via the shoelace formula.
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area: i64 = 0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice_area.abs() as f64 / 2.0
}
