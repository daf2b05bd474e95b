//! Core vector types and predicates for the triangulator.
//!
//! Includes vector aliases (`Vec2`, `Vec3`) and the exact orientation test
//! every containment check is built on.

pub mod vec2;
pub mod vec3;
