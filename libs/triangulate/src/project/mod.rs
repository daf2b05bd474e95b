//! # Plane Projection
//!
//! Flattens a planar 3D polygon into the 2D attribute layout the driver
//! consumes.
//!
//! ## Basis
//!
//! `I = P1 - P0`, and `J = Pk - P0` for the first `k >= 2` whose cross
//! product with `I` is not negligible. Leading collinear points are skipped
//! this way instead of producing a degenerate basis.
//!
//! Every point maps to `((P - P0)·I, (P - P0)·J)`. The map is linear and
//! invertible on the polygon's plane, so simplicity is preserved and the
//! triangle winding relative to the input order carries over to 3D.

use config::constants::{MIN_POLYGON_VERTICES, PLANE_TOLERANCE, POSITION_STRIDE};

use crate::core::vec3::{self, Vec3};
use crate::error::{TriangulateError, TriangulateResult};
use crate::polygon::vertex_count;

/// Projects `points` (xyz triples) onto their plane with the default
/// tolerance. The result has stride 2.
///
/// # Errors
///
/// - [`TriangulateError::MisalignedBuffer`] if the length is not a multiple
///   of 3
/// - [`TriangulateError::InsufficientVertices`] for fewer than 3 points
/// - [`TriangulateError::NonFiniteCoordinate`] for a NaN or infinite
///   coordinate
/// - [`TriangulateError::DegenerateInput`] if every point is collinear with
///   the first edge, within [`PLANE_TOLERANCE`]
///
/// # Example
///
/// ```rust
/// use tide_triangulate::{project_to_plane, TriangulateError};
///
/// let collinear = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
/// assert!(matches!(
///     project_to_plane(&collinear),
///     Err(TriangulateError::DegenerateInput { count: 3 })
/// ));
/// ```
pub fn project_to_plane(points: &[f32]) -> TriangulateResult<Vec<f32>> {
    project_with_tolerance(points, PLANE_TOLERANCE)
}

/// Projects and triangulates `points` with the default configuration.
///
/// # Example
///
/// ```rust
/// use tide_triangulate::triangulate_3d;
///
/// // Unit square standing in the XZ plane.
/// let square = [
///     0.0, 0.0, 0.0,
///     1.0, 0.0, 0.0,
///     1.0, 0.0, 1.0,
///     0.0, 0.0, 1.0,
/// ];
/// assert_eq!(triangulate_3d(&square, 0).unwrap().len(), 6);
/// ```
pub fn triangulate_3d(points: &[f32], offset: u32) -> TriangulateResult<Vec<u32>> {
    crate::Triangulator::default().try_triangulate_3d(points, offset)
}

pub(crate) fn project_with_tolerance(points: &[f32], tolerance: f64) -> TriangulateResult<Vec<f32>> {
    let (origin, i, j) = plane_basis(points, tolerance)?;

    let mut projected = Vec::with_capacity(points.len() / POSITION_STRIDE * 2);
    for offset in (0..points.len()).step_by(POSITION_STRIDE) {
        let d = vec3::read(points, offset) - origin;
        projected.push(d.dot(i) as f32);
        projected.push(d.dot(j) as f32);
    }
    Ok(projected)
}

/// Origin and the two spanning edge vectors of the polygon's plane.
fn plane_basis(points: &[f32], tolerance: f64) -> TriangulateResult<(Vec3, Vec3, Vec3)> {
    let count = vertex_count(points, POSITION_STRIDE)?;
    if count < MIN_POLYGON_VERTICES {
        return Err(TriangulateError::InsufficientVertices { count });
    }

    let non_finite = (0..count).find(|&k| !vec3::read(points, k * POSITION_STRIDE).is_finite());
    if let Some(vertex) = non_finite {
        return Err(TriangulateError::NonFiniteCoordinate { vertex });
    }

    let origin = vec3::read(points, 0);
    let i = vec3::read(points, POSITION_STRIDE) - origin;
    let i_len = i.length();

    // |I × J| = |I||J| sin θ; comparing sin θ keeps the test scale-free. The
    // tolerance has to clear f32 rounding of the input, not just f64 noise.
    let j = (2..count)
        .map(|k| vec3::read(points, k * POSITION_STRIDE) - origin)
        .find(|j| i.cross(*j).length() > tolerance * i_len * j.length())
        .ok_or(TriangulateError::DegenerateInput { count })?;

    Ok((origin, i, j))
}
