//! # Recenter and Export
//!
//! The composed mesh is moved so its bounding box is centred on the Z axis
//! (height is kept), then written as Wavefront OBJ.

use crate::error::{TerrainError, TerrainResult};
use std::path::Path;
use tile_mesh::Mesh;
use tracing::info;

/// Translates `mesh` so the XY midpoint of its bounding box is the origin.
/// Empty meshes are left alone.
pub fn recenter(mesh: &mut Mesh) {
    if mesh.is_empty() {
        return;
    }
    let mut center = mesh.bounding_box_center();
    center.z = 0.0;
    mesh.translate(-center);
}

/// Consumes a composed mesh and returns it recentred.
pub fn finalize(mut mesh: Mesh) -> Mesh {
    recenter(&mut mesh);
    mesh
}

/// Writes `mesh` to `path` as OBJ. The parent directory must exist.
pub fn export(mesh: &Mesh, path: &Path) -> TerrainResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(TerrainError::ExportDirectoryMissing {
                path: parent.to_path_buf(),
            });
        }
    }

    mesh.export_obj(path)?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "terrain exported"
    );
    Ok(())
}
