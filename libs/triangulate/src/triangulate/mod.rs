//! # Triangulation Driver
//!
//! Ear clipping over a flat attribute buffer.
//!
//! ## Algorithm
//!
//! The winding of the input is not known up front, so the driver makes two
//! straight-line attempts:
//!
//! 1. clip assuming clockwise winding
//! 2. if that fails or yields a triangle count other than `n - 2`, rebuild
//!    the ring and clip assuming counter-clockwise winding
//!
//! Each attempt clips ears until three vertices remain. The final triangle
//! must pass the ear predicate too; under the wrong winding that check is
//! what stops a full set of inverted triangles from being accepted.
//!
//! The clockwise attempt scans the ring backward from the last vertex, so a
//! polygon and its reversal produce the same triangles.
//!
//! ## Output
//!
//! Triples `(ear, next, prev)` plus the caller's offset, in clip order. Every
//! triple has the winding of the accepted orientation.

use log::{debug, trace, warn};

use crate::config::TriangulatorConfig;
use crate::ear::{find_ear, is_ear, Orientation};
use crate::error::{TriangulateError, TriangulateResult};
use crate::polygon::{vertex_count, Polygon, RingVertex};
use crate::project;

/// Orientation tried first.
const FIRST_ORIENTATION: Orientation = Orientation::Clockwise;

/// Ear-clipping triangulator bound to a configuration.
///
/// # Example
///
/// ```rust
/// use tide_triangulate::{config::TriangulatorConfig, Triangulator};
///
/// let triangulator = Triangulator::new(TriangulatorConfig::new(1.0e-9, 64).unwrap());
/// let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
/// let indices = triangulator.try_triangulate(&square, 2, 10).unwrap();
/// assert_eq!(indices.len(), 6);
/// assert!(indices.iter().all(|&i| (10..14).contains(&i)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangulator {
    config: TriangulatorConfig,
}

impl Triangulator {
    /// Creates a triangulator using `config`.
    pub fn new(config: TriangulatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &TriangulatorConfig {
        &self.config
    }

    /// Triangulates the polygon stored in `attributes`, `stride` floats per
    /// vertex with X and Y first, numbering output indices from `offset`.
    ///
    /// # Errors
    ///
    /// Input validation errors are returned as-is. When neither orientation
    /// produces a full triangulation, the error of the second attempt is
    /// returned (normally [`TriangulateError::EarNotFound`]).
    pub fn try_triangulate(
        &self,
        attributes: &[f32],
        stride: usize,
        offset: u32,
    ) -> TriangulateResult<Vec<u32>> {
        let count = vertex_count(attributes, stride)?;
        if count > self.config.max_vertices {
            return Err(TriangulateError::TooManyVertices {
                count,
                max: self.config.max_vertices,
            });
        }
        // The largest emitted index is offset + count - 1.
        if u32::try_from(count.saturating_sub(1))
            .ok()
            .and_then(|last| offset.checked_add(last))
            .is_none()
        {
            return Err(TriangulateError::IndexOverflow { offset, count });
        }

        let expected = count.saturating_sub(2) * 3;
        match clip(attributes, stride, offset, FIRST_ORIENTATION) {
            Ok(indices) if indices.len() == expected => return Ok(indices),
            Ok(indices) => debug!(
                "{:?} pass produced {} of {} triangles, retrying",
                FIRST_ORIENTATION,
                indices.len() / 3,
                expected / 3
            ),
            Err(TriangulateError::EarNotFound { remaining }) => debug!(
                "{:?} pass found no ear with {} of {} vertices left, retrying",
                FIRST_ORIENTATION, remaining, count
            ),
            Err(err) => return Err(err),
        }

        clip(attributes, stride, offset, FIRST_ORIENTATION.flipped())
    }

    /// Same as [`try_triangulate`](Self::try_triangulate) but returns an
    /// empty vector on failure, logging the reason.
    pub fn triangulate(&self, attributes: &[f32], stride: usize, offset: u32) -> Vec<u32> {
        self.try_triangulate(attributes, stride, offset)
            .unwrap_or_else(|err| {
                warn!("triangulation failed: {err}");
                Vec::new()
            })
    }

    /// Projects a planar 3D polygon onto 2D using this configuration's
    /// tolerance. See [`project::project_to_plane`].
    pub fn project(&self, points: &[f32]) -> TriangulateResult<Vec<f32>> {
        project::project_with_tolerance(points, self.config.tolerance)
    }

    /// Projects `points` (xyz triples) onto their plane and triangulates the
    /// result.
    pub fn try_triangulate_3d(&self, points: &[f32], offset: u32) -> TriangulateResult<Vec<u32>> {
        let projected = self.project(points)?;
        self.try_triangulate(&projected, 2, offset)
    }
}

/// One clipping pass under a fixed orientation on a fresh ring.
fn clip(
    attributes: &[f32],
    stride: usize,
    offset: u32,
    orientation: Orientation,
) -> TriangulateResult<Vec<u32>> {
    let mut polygon = Polygon::with_direction(attributes, stride, orientation.scan_direction())?;
    let mut indices = Vec::with_capacity((polygon.vertex_count() - 2) * 3);

    while polygon.live_count() > 3 {
        let ear = find_ear(&mut polygon, orientation)?;
        trace!("clip ear {} ({} live)", ear.index, polygon.live_count());
        push_triangle(&mut indices, &ear, offset);
        polygon.remove_triangle(ear.next, ear.prev);
    }

    if !is_ear(&polygon, orientation) {
        return Err(TriangulateError::EarNotFound { remaining: 3 });
    }
    let last = polygon.get(polygon.cursor());
    push_triangle(&mut indices, &last, offset);

    Ok(indices)
}

#[inline]
fn push_triangle(indices: &mut Vec<u32>, ear: &RingVertex, offset: u32) {
    // Bounds were checked against u32 before the ring was built.
    for index in [ear.index, ear.next, ear.prev] {
        indices.push(offset + index as u32);
    }
}

/// Triangulates with the default configuration.
///
/// # Example
///
/// ```rust
/// use tide_triangulate::try_triangulate;
///
/// let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
/// let indices = try_triangulate(&square, 2, 0).unwrap();
/// assert_eq!(indices.len(), 6);
/// ```
pub fn try_triangulate(attributes: &[f32], stride: usize, offset: u32) -> TriangulateResult<Vec<u32>> {
    Triangulator::default().try_triangulate(attributes, stride, offset)
}

/// Triangulates with the default configuration, returning an empty vector
/// when the polygon cannot be triangulated.
///
/// # Example
///
/// ```rust
/// use tide_triangulate::triangulate;
///
/// let collinear = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
/// assert!(triangulate(&collinear, 2, 0).is_empty());
/// ```
pub fn triangulate(attributes: &[f32], stride: usize, offset: u32) -> Vec<u32> {
    Triangulator::default().triangulate(attributes, stride, offset)
}
