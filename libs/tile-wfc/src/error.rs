//! # Error Types
//!
//! Errors for catalog construction and grid solving. All failures are
//! explicit; nothing falls back to a default tile.

use std::path::PathBuf;
use thiserror::Error;
use tile_mesh::MeshError;

// =============================================================================
// CATALOG ERRORS
// =============================================================================

/// Errors raised while turning a [`crate::MeshPattern`] into a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The pattern defines no tiles.
    #[error("Pattern '{pattern}' defines no tiles")]
    EmptyPattern { pattern: String },

    /// The tile footprint is not usable.
    #[error("Pattern '{pattern}' has an invalid footprint: {message}")]
    InvalidDimension { pattern: String, message: String },

    /// Two tiles (or rotated variants) share a name.
    #[error("Duplicate tile name '{name}'")]
    DuplicateTile { name: String },

    /// A tile specification is malformed.
    #[error("Tile '{name}' is invalid: {message}")]
    InvalidTile { name: String, message: String },

    /// A tile shape could not be meshed.
    #[error("Tile '{name}' geometry failed: {source}")]
    Geometry {
        name: String,
        #[source]
        source: MeshError,
    },

    /// A pattern file is not valid JSON for a pattern.
    #[error("Malformed pattern config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A pattern file could not be read.
    #[error("Failed to read pattern config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Creates an invalid tile error.
    pub fn invalid_tile(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTile {
            name: name.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// SOLVER ERRORS
// =============================================================================

/// Errors raised by a [`crate::GridSolver`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// `run` was called before any tile was registered.
    #[error("No tiles registered")]
    NoTiles,

    /// A tile name was registered twice.
    #[error("Tile '{name}' is already registered")]
    DuplicateTile { name: String },

    /// The grid has a zero dimension.
    #[error("Grid shape {rows}x{cols} has no cells")]
    InvalidShape { rows: usize, cols: usize },

    /// A seed names a tile that was never registered.
    #[error("Unknown tile '{name}'")]
    UnknownTile { name: String },

    /// A seed lies outside the grid.
    #[error("Seed '{name}' at ({row}, {col}) is outside the {rows}x{cols} grid")]
    SeedOutOfBounds {
        name: String,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Seeds contradict each other or the adjacency rules.
    #[error("Seed '{name}' at ({row}, {col}) cannot be satisfied")]
    SeedConflict { name: String, row: usize, col: usize },

    /// The registered tiles cannot tile the grid at all.
    #[error("Registered tiles admit no arrangement on the grid")]
    Unsatisfiable,

    /// The step budget ran out before every cell was assigned.
    #[error("Solve did not complete within {max_steps} steps")]
    StepBudgetExhausted { max_steps: usize },
}

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
