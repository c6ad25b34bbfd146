//! # Mesh Errors
//!
//! Error types for mesh construction and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero or negative extent)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Writing a mesh file failed
    #[error("Failed to write mesh to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an I/O error bound to the file being written.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
