//! # Tide Triangulate
//!
//! Ear-clipping triangulation of simple polygons for GPU rendering on the
//! Tide display wall.
//!
//! ## Architecture
//!
//! ```text
//! OBJ source ──parse_obj──▶ Mesh (positions, face loops)
//!                              │ per face
//!                              ▼
//!              project (3D loop → 2D attribute buffer)
//!                              │
//!                              ▼
//!     polygon (vertex ring) ◀─▶ ear (predicate) ◀─▶ triangulate (driver)
//!                              │
//!                              ▼
//!                     Vec<u32> index triples
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tide_triangulate::{triangulate, try_triangulate};
//!
//! // x, y per vertex
//! let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//! assert_eq!(triangulate(&square, 2, 0).len(), 6);
//!
//! // Three points on a line have no triangulation.
//! assert!(try_triangulate(&[0.0, 0.0, 1.0, 0.0, 2.0, 0.0], 2, 0).is_err());
//! ```

pub mod config;
pub mod core;
pub mod ear;
pub mod error;
pub mod mesh;
pub mod obj;
pub mod polygon;
pub mod project;
pub mod triangulate;

pub use ear::Orientation;
pub use error::{TriangulateError, TriangulateResult};
pub use mesh::Mesh;
pub use obj::parse_obj;
pub use project::{project_to_plane, triangulate_3d};
pub use triangulate::{triangulate, try_triangulate, Triangulator};
