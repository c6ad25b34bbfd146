//! # Config Crate
//!
//! Centralized configuration constants for the WFC terrain pipeline.
//! Grid defaults, solver budgets, tile dimensions and artifact naming are
//! defined here so the tile, solver and composition crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_GRID_SHAPE, DEFAULT_MAX_STEPS, EPSILON};
//!
//! let (rows, cols) = DEFAULT_GRID_SHAPE;
//! assert!(rows * cols <= DEFAULT_MAX_STEPS);
//!
//! let drift: f64 = 1e-12;
//! assert!(drift.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Global State**: Runtime settings are passed in explicitly; only
//!   compile-time defaults live here
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
