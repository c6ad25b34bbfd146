//! # Error Types
//!
//! Fatal pipeline errors ([`TerrainError`]) and advisory history errors
//! ([`HistoryError`]). There is no partial-success mode: a terrain with a
//! missing cell is never returned.

use std::path::PathBuf;
use thiserror::Error;
use tile_mesh::MeshError;
use tile_wfc::{CatalogError, GridShape};

/// Errors that abort terrain generation.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// Bad initial tile, malformed pattern or invalid grid shape.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The solver ran out of steps before assigning every cell.
    #[error("Layer '{pattern}' did not complete within {max_steps} steps")]
    SolveIncomplete { pattern: String, max_steps: usize },

    /// Base and overhang grids differ in shape.
    #[error("Overhang grid {overhang:?} does not match base grid {base:?}")]
    LayerShapeMismatch { base: GridShape, overhang: GridShape },

    /// A solved tile name has no fragment in the catalog.
    #[error("No mesh fragment for tile '{name}' at ({row}, {col})")]
    MissingTileFragment { name: String, row: usize, col: usize },

    /// A grid value does not index into the layer's name table.
    #[error("Tile index {index} at ({row}, {col}) is outside the name table of {len} tiles")]
    TileIndexOutOfRange {
        index: usize,
        len: usize,
        row: usize,
        col: usize,
    },

    /// The export target's parent directory does not exist.
    #[error("Export directory {path} does not exist")]
    ExportDirectoryMissing { path: PathBuf },

    /// Mesh construction failed.
    #[error("Mesh error: {0}")]
    Mesh(MeshError),

    /// File system failure on the primary artifact.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TerrainError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<CatalogError> for TerrainError {
    fn from(err: CatalogError) -> Self {
        Self::configuration(err.to_string())
    }
}

impl From<MeshError> for TerrainError {
    fn from(err: MeshError) -> Self {
        match err {
            MeshError::Io { path, source } => Self::Io { path, source },
            other => Self::Mesh(other),
        }
    }
}

/// Result type alias for pipeline operations.
pub type TerrainResult<T> = Result<T, TerrainError>;

/// Failures writing diagnostic history. Reported, never fatal.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History write to {path} failed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("History serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("History mesh failed: {0}")]
    Mesh(#[from] MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_become_configuration() {
        let err: TerrainError = CatalogError::invalid_tile("wall", "bad socket").into();
        assert!(matches!(err, TerrainError::Configuration { ref message } if message.contains("wall")));
    }

    #[test]
    fn test_mesh_io_becomes_terrain_io() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TerrainError = MeshError::io("out/terrain.obj", source).into();
        assert!(matches!(err, TerrainError::Io { ref path, .. } if path.ends_with("terrain.obj")));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = TerrainError::LayerShapeMismatch {
            base: (3, 3),
            overhang: (3, 4),
        };
        assert_eq!(
            err.to_string(),
            "Overhang grid (3, 4) does not match base grid (3, 3)"
        );
    }
}
