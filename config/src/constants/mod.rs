//! Centralized configuration values shared across the Tide triangulation
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Smallest sine of the angle between two edge vectors for them to span a
/// plane.
///
/// Inputs are `f32`, so points that are collinear in decimal notation carry
/// rounding noise of a few `f32::EPSILON` (about `1.2e-7`). The tolerance
/// sits above that noise so such points still read as collinear.
///
/// # Examples
/// ```
/// use config::constants::PLANE_TOLERANCE;
/// assert!(PLANE_TOLERANCE > f64::from(f32::EPSILON));
/// ```
pub const PLANE_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// BUFFER LAYOUT CONSTANTS
// =============================================================================

/// Smallest polygon that can be triangulated.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// assert_eq!(MIN_POLYGON_VERTICES, 3);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Smallest attribute stride of a flat vertex buffer. The first two attributes
/// of every vertex are always X and Y.
///
/// # Examples
/// ```
/// use config::constants::MIN_ATTRIBUTE_STRIDE;
/// let stride = 5; // x, y, u, v, w
/// assert!(stride >= MIN_ATTRIBUTE_STRIDE);
/// ```
pub const MIN_ATTRIBUTE_STRIDE: usize = 2;

/// Stride of 3D position buffers (x, y, z).
pub const POSITION_STRIDE: usize = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single polygon.
///
/// Ear clipping is quadratic in the vertex count; this bound keeps a single
/// malformed face from stalling a render.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 1_000_000;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry predicates.
    pub tolerance: f64,
    /// Upper bound on vertices accepted for a single polygon.
    pub max_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 4096).expect("valid config");
    /// assert_eq!(cfg.max_vertices, 4096);
    /// ```
    pub fn new(tolerance: f64, max_vertices: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_vertices < MIN_POLYGON_VERTICES {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            tolerance,
            max_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: PLANE_TOLERANCE,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the vertex limit cannot hold a single triangle.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be >= {MIN_POLYGON_VERTICES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
