//! Thin wrapper around `glam::DVec3` used by the projection helper.

pub use glam::DVec3 as Vec3;

/// Reads the X, Y, Z triple stored at `offset` in a flat position buffer.
///
/// # Examples
/// ```
/// use tide_triangulate::core::vec3::{read, Vec3};
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
/// assert_eq!(read(&positions, 3), Vec3::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn read(buffer: &[f32], offset: usize) -> Vec3 {
    Vec3::new(
        f64::from(buffer[offset]),
        f64::from(buffer[offset + 1]),
        f64::from(buffer[offset + 2]),
    )
}
