//! Mesh export to Wavefront OBJ.
//!
//! OBJ is written with `v` and `f` records only. Face indices are 1-based as
//! the format requires.

use crate::error::MeshError;
use crate::mesh::Mesh;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `mesh` as OBJ text to `writer`.
///
/// # Example
///
/// ```rust
/// use tile_mesh::{export::write_obj, primitives::create_plane};
/// use glam::DVec2;
///
/// let square = create_plane(DVec2::ZERO, DVec2::ONE, 0.0).unwrap();
/// let mut out = Vec::new();
/// write_obj(&square, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
/// assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 2);
/// ```
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> io::Result<()> {
    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for tri in mesh.triangles() {
        writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }
    writer.flush()
}

impl Mesh {
    /// Writes the mesh to an OBJ file at `path`, replacing any existing file.
    ///
    /// The parent directory must exist.
    pub fn export_obj(&self, path: &Path) -> Result<(), MeshError> {
        let file = File::create(path).map_err(|e| MeshError::io(path, e))?;
        write_obj(self, BufWriter::new(file)).map_err(|e| MeshError::io(path, e))
    }
}
