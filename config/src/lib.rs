//! # Config Crate
//!
//! Centralized configuration constants for the Tide triangulation pipeline.
//! Tolerances, vertex limits and buffer layout constants live here so the
//! geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, MIN_POLYGON_VERTICES};
//!
//! let cfg = GlobalConfig::default();
//! assert!(cfg.tolerance > 0.0);
//! assert!(cfg.max_vertices >= MIN_POLYGON_VERTICES);
//! ```
//!
//! ## Contents
//!
//! - **Precision**: the collinearity tolerance used when choosing a plane
//! - **Layout**: vertex minimum and attribute/position strides
//! - **Limits**: the per-polygon vertex cap, plus `GlobalConfig` validation

pub mod constants;
