//! # Ear Predicate
//!
//! Decides whether the vertex under the ring cursor is an ear: a convex
//! corner whose triangle with its two neighbours holds no other live vertex.
//!
//! ## Test
//!
//! For cursor `A` with `B = A.next` and `C = A.prev`:
//!
//! 1. `(B - A) × (C - A)` must carry the sign of the orientation
//! 2. no other live vertex may lie inside `ABC` or on its boundary
//!
//! All cross products go through [`orient`], which is exact.

use crate::core::vec2::{orient, Vec2};
use crate::error::{TriangulateError, TriangulateResult};
use crate::polygon::{Polygon, RingVertex, ScanDirection};

/// Winding assumed while clipping.
///
/// Discriminants are the signs used by the containment tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vertices listed clockwise (`-1`).
    Clockwise = -1,
    /// Vertices listed counter-clockwise (`+1`).
    CounterClockwise = 1,
}

impl Orientation {
    /// `-1.0` or `+1.0`.
    #[inline]
    pub fn sign(self) -> f64 {
        f64::from(self as i8)
    }

    /// Ring scan direction used when clipping under this orientation.
    ///
    /// Clockwise polygons are scanned backward so that a polygon and its
    /// reversal are clipped at the same vertices in the same order.
    #[inline]
    pub fn scan_direction(self) -> ScanDirection {
        match self {
            Orientation::Clockwise => ScanDirection::Backward,
            Orientation::CounterClockwise => ScanDirection::Forward,
        }
    }

    /// The opposite winding.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Returns true if the vertex under the cursor is an ear under `orientation`.
pub fn is_ear(polygon: &Polygon<'_>, orientation: Orientation) -> bool {
    let a = polygon.get(polygon.cursor());
    let b = polygon.point(a.next);
    let c = polygon.point(a.prev);
    let sign = orientation.sign();

    if orient(a.point, b, c) * sign <= 0.0 {
        return false;
    }

    !polygon
        .live_indices()
        .filter(|&m| m != a.index && m != a.next && m != a.prev)
        .any(|m| triangle_covers(a.point, b, c, polygon.point(m), sign))
}

/// Inside-or-on-boundary test of `m` against triangle `abc` whose winding
/// has sign `sign`.
#[inline]
fn triangle_covers(a: Vec2, b: Vec2, c: Vec2, m: Vec2, sign: f64) -> bool {
    orient(a, b, m) * sign >= 0.0
        && orient(b, c, m) * sign >= 0.0
        && orient(c, a, m) * sign >= 0.0
}

/// Scans from the cursor in the ring's scan direction for an ear, trying each
/// live vertex once.
///
/// On success the cursor rests on the ear and its resolved vertex is
/// returned.
///
/// # Errors
///
/// [`TriangulateError::EarNotFound`] when every live vertex was rejected.
pub fn find_ear(
    polygon: &mut Polygon<'_>,
    orientation: Orientation,
) -> TriangulateResult<RingVertex> {
    for _ in 0..polygon.live_count() {
        if is_ear(polygon, orientation) {
            return Ok(polygon.get(polygon.cursor()));
        }
        polygon.advance();
    }
    Err(TriangulateError::EarNotFound {
        remaining: polygon.live_count(),
    })
}
