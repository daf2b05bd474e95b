//! 2D vector definitions for the triangulator.
//!
//! Provides a type alias for `glam::DVec2` and the orientation predicate.
//! Attribute buffers hold `f32`, but all predicates run on `f64` so the
//! products of two widened `f32` coordinates are exact.

use robust::Coord;

pub use glam::DVec2 as Vec2;

/// Reads the X, Y pair stored at `offset` in a flat attribute buffer.
///
/// # Examples
/// ```
/// use tide_triangulate::core::vec2::{read, Vec2};
///
/// let buffer = [0.0, 0.0, 9.0, 1.5, -2.0, 9.0];
/// assert_eq!(read(&buffer, 3), Vec2::new(1.5, -2.0));
/// ```
#[inline]
pub fn read(buffer: &[f32], offset: usize) -> Vec2 {
    Vec2::new(f64::from(buffer[offset]), f64::from(buffer[offset + 1]))
}

/// Twice the signed area of triangle `abc`, i.e. the cross product
/// `(b - a) × (c - a)`.
///
/// Positive when `a`, `b`, `c` turn counter-clockwise, negative when
/// clockwise, exactly zero when collinear.
///
/// # Examples
/// ```
/// use tide_triangulate::core::vec2::{orient, Vec2};
///
/// let a = Vec2::new(0.0, 0.0);
/// let b = Vec2::new(1.0, 0.0);
/// assert!(orient(a, b, Vec2::new(0.0, 1.0)) > 0.0);
/// assert_eq!(orient(a, b, Vec2::new(2.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orient(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Twice the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise winding.
pub fn signed_area2(points: &[Vec2]) -> f64 {
    let Some(&last) = points.last() else {
        return 0.0;
    };
    let mut prev = last;
    let mut sum = 0.0;
    for &p in points {
        sum += prev.perp_dot(p);
        prev = p;
    }
    sum
}
