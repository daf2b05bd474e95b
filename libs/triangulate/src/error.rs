//! # Error Types
//!
//! Error types for triangulation operations. All errors are explicit and
//! provide clear debugging information.
//!
//! ## Error Policy
//!
//! - `try_*` operations never fall back: every failure is an explicit error
//! - The infallible `triangulate` entry point maps any error to an empty
//!   result and logs the reason
//! - Variants carry the counts, indices and line numbers needed to locate
//!   the offending input

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during triangulation.
///
/// ## Example
///
/// ```rust
/// use tide_triangulate::{try_triangulate, TriangulateError};
///
/// match try_triangulate(&[0.0, 0.0, 1.0, 1.0], 2, 0) {
///     Ok(indices) => println!("{} triangles", indices.len() / 3),
///     Err(TriangulateError::InsufficientVertices { count }) => {
///         eprintln!("only {count} vertices")
///     }
///     Err(e) => eprintln!("triangulation failed: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum TriangulateError {
    /// Fewer than three vertices were supplied.
    #[error("At least 3 vertices are required, got {count}")]
    InsufficientVertices {
        /// Number of vertices found in the input.
        count: usize,
    },

    /// Every candidate edge vector is collinear with the first edge, so no
    /// projection plane exists.
    #[error("Degenerate input: all {count} points are collinear")]
    DegenerateInput {
        /// Number of points inspected.
        count: usize,
    },

    /// A vertex position holds NaN or an infinity.
    #[error("Vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending vertex.
        vertex: usize,
    },

    /// The ear scan visited every live vertex without finding an ear under
    /// either orientation.
    #[error("No ear found with {remaining} vertices remaining")]
    EarNotFound {
        /// Live vertices left in the ring when the scan gave up.
        remaining: usize,
    },

    /// Attribute stride cannot hold an X, Y pair.
    #[error("Attribute stride must be at least {min}, got {stride}")]
    InvalidStride {
        /// Requested stride.
        stride: usize,
        /// Smallest accepted stride.
        min: usize,
    },

    /// Buffer length is not a whole number of vertices.
    #[error("Buffer of {len} floats is not a multiple of stride {stride}")]
    MisalignedBuffer {
        /// Buffer length in floats.
        len: usize,
        /// Attribute stride.
        stride: usize,
    },

    /// Polygon exceeds the configured vertex limit.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of vertices supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Offset index triples would not fit in `u32`.
    #[error("Index offset {offset} with {count} vertices overflows u32")]
    IndexOverflow {
        /// Caller-supplied base offset.
        offset: u32,
        /// Number of vertices in the polygon.
        count: usize,
    },

    /// A mesh face references a vertex that does not exist.
    #[error("Face {face} references vertex {index}, mesh has {vertex_count} vertices")]
    FaceIndexOutOfBounds {
        /// Face position in the mesh.
        face: usize,
        /// Offending vertex index.
        index: u32,
        /// Vertices available in the mesh.
        vertex_count: usize,
    },

    /// A single mesh face could not be triangulated.
    #[error("Face {face} failed to triangulate: {source}")]
    FaceFailed {
        /// Face position in the mesh.
        face: usize,
        /// Underlying failure.
        #[source]
        source: Box<TriangulateError>,
    },

    /// Malformed Wavefront OBJ input.
    #[error("OBJ parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Invalid triangulator configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl TriangulateError {
    /// Creates a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Wraps an error raised while triangulating mesh face `face`.
    pub fn face_failed(face: usize, source: TriangulateError) -> Self {
        Self::FaceFailed {
            face,
            source: Box::new(source),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for triangulation operations.
pub type TriangulateResult<T> = Result<T, TriangulateError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = TriangulateError::InsufficientVertices { count: 2 };
        assert!(err.to_string().contains("got 2"));

        let err = TriangulateError::face_failed(4, TriangulateError::EarNotFound { remaining: 5 });
        assert!(err.to_string().contains("Face 4"));
        assert!(err.to_string().contains("No ear found"));
    }

    #[test]
    fn test_face_failed_exposes_source() {
        use std::error::Error as _;

        let err = TriangulateError::face_failed(0, TriangulateError::DegenerateInput { count: 3 });
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("collinear"));
    }

    #[test]
    fn test_non_finite_names_vertex() {
        let err = TriangulateError::NonFiniteCoordinate { vertex: 7 };
        assert!(err.to_string().contains("Vertex 7"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: TriangulateError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, TriangulateError::Config(_)));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TriangulateError>();
    }
}
