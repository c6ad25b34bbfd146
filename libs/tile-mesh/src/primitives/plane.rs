//! # Plane Primitive
//!
//! A single upward-facing rectangle. Used for zero-thickness floors.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::{DVec2, DVec3};

/// Creates a horizontal rectangle at height `z` facing +Z.
///
/// # Example
///
/// ```rust
/// use tile_mesh::primitives::create_plane;
/// use glam::DVec2;
///
/// let square = create_plane(DVec2::ZERO, DVec2::ONE, 0.0).unwrap();
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.triangle_count(), 2);
/// ```
pub fn create_plane(min: DVec2, max: DVec2, z: f64) -> Result<Mesh, MeshError> {
    let size = max - min;
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Plane extent must be positive: {:?}",
            size
        )));
    }

    let mut mesh = Mesh::with_capacity(4, 2);
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, z));
    mesh.add_quad(v0, v1, v2, v3);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_faces_up() {
        let mesh = create_plane(DVec2::splat(-0.5), DVec2::splat(0.5), 0.0).unwrap();
        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            assert!((b - a).cross(c - a).z > 0.0);
        }
    }

    #[test]
    fn test_plane_bounds_at_height() {
        let mesh = create_plane(DVec2::ZERO, DVec2::new(2.0, 3.0), 1.5).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(0.0, 0.0, 1.5));
        assert_eq!(max, DVec3::new(2.0, 3.0, 1.5));
    }

    #[test]
    fn test_plane_zero_width_is_degenerate() {
        assert!(create_plane(DVec2::ZERO, DVec2::new(0.0, 1.0), 0.0).is_err());
    }
}
