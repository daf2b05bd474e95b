//! Triangulator configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so geometry components can
//! stay decoupled from literal constants.

use config::constants::{GlobalConfig, MAX_VERTICES, PLANE_TOLERANCE};

use crate::error::TriangulateResult;

/// Triangulator configuration wrapper.
///
/// # Examples
/// ```
/// use tide_triangulate::config::TriangulatorConfig;
/// let cfg = TriangulatorConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulatorConfig {
    /// Tolerance below which two edge vectors are treated as collinear when
    /// choosing a projection plane.
    pub tolerance: f64,
    /// Largest polygon accepted by a single triangulation call.
    pub max_vertices: usize,
}

impl TriangulatorConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use tide_triangulate::config::TriangulatorConfig;
    /// let cfg = TriangulatorConfig::new(1.0e-6, 4096).unwrap();
    /// assert_eq!(cfg.max_vertices, 4096);
    /// ```
    pub fn new(tolerance: f64, max_vertices: usize) -> TriangulateResult<Self> {
        let cfg = GlobalConfig::new(tolerance, max_vertices)?;
        Ok(Self::from(cfg))
    }
}

impl From<GlobalConfig> for TriangulatorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            max_vertices: cfg.max_vertices,
        }
    }
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            tolerance: PLANE_TOLERANCE,
            max_vertices: MAX_VERTICES,
        }
    }
}
