//! # Ramp Primitive
//!
//! Generates a wedge whose top surface rises from `min.z` on one side of the
//! footprint to `max.z` on the opposite side.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Horizontal direction in which a ramp rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    /// Rises toward +Y
    PosY,
    /// Rises toward -X
    NegX,
    /// Rises toward -Y
    NegY,
    /// Rises toward +X
    PosX,
}

impl Slope {
    /// Counter-clockwise quarter turns from [`Slope::PosY`].
    fn quarter_turns(self) -> u8 {
        match self {
            Slope::PosY => 0,
            Slope::NegX => 1,
            Slope::NegY => 2,
            Slope::PosX => 3,
        }
    }
}

/// Creates a wedge inside the box `min..max` rising in direction `slope`.
///
/// The low edge sits at `min.z` and the high edge at `max.z`, with a vertical
/// face under the high edge.
///
/// # Example
///
/// ```rust
/// use tile_mesh::primitives::{create_ramp, Slope};
/// use glam::DVec3;
///
/// let ramp = create_ramp(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 1.0), Slope::PosX).unwrap();
/// assert_eq!(ramp.vertex_count(), 6);
/// assert_eq!(ramp.triangle_count(), 8);
/// ```
pub fn create_ramp(min: DVec3, max: DVec3, slope: Slope) -> Result<Mesh, MeshError> {
    let size = max - min;
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Ramp extent must be positive: {:?}",
            size
        )));
    }

    // Build a +Y ramp centred on the origin, then turn it into place.
    let turns = slope.quarter_turns();
    let half = size * 0.5;
    let (hx, hy) = if turns % 2 == 1 {
        (half.y, half.x)
    } else {
        (half.x, half.y)
    };

    let mut mesh = Mesh::with_capacity(6, 8);
    let b0 = mesh.add_vertex(DVec3::new(-hx, -hy, min.z));
    let b1 = mesh.add_vertex(DVec3::new(hx, -hy, min.z));
    let b2 = mesh.add_vertex(DVec3::new(hx, hy, min.z));
    let b3 = mesh.add_vertex(DVec3::new(-hx, hy, min.z));
    let t2 = mesh.add_vertex(DVec3::new(hx, hy, max.z));
    let t3 = mesh.add_vertex(DVec3::new(-hx, hy, max.z));

    mesh.add_quad(b0, b3, b2, b1); // bottom
    mesh.add_quad(b0, b1, t2, t3); // slope
    mesh.add_quad(b2, b3, t3, t2); // high side
    mesh.add_triangle(b0, t3, b3); // west side
    mesh.add_triangle(b1, b2, t2); // east side

    mesh.rotate_quarter_turns(turns);
    let center = (min + max) * 0.5;
    mesh.translate(DVec3::new(center.x, center.y, 0.0));

    Ok(mesh)
}
