//! # Cuboid Primitive
//!
//! Generates an axis-aligned box between two corners.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box mesh spanning `min` to `max`.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face), outward winding.
///
/// # Example
///
/// ```rust
/// use tile_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(min: DVec3, max: DVec3) -> Result<Mesh, MeshError> {
    let size = max - min;
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cuboid extent must be positive: {:?}",
            size
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    mesh.add_quad(v0, v3, v2, v1); // bottom
    mesh.add_quad(v4, v5, v6, v7); // top
    mesh.add_quad(v0, v1, v5, v4); // south (-Y)
    mesh.add_quad(v2, v3, v7, v6); // north (+Y)
    mesh.add_quad(v3, v0, v4, v7); // west (-X)
    mesh.add_quad(v1, v2, v6, v5); // east (+X)

    Ok(mesh)
}
