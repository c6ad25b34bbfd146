//! # World Placement
//!
//! Grid coordinates to world translations. Columns run east (+X), rows run
//! south (-Y); both layers share the mapping so fragments of one cell are
//! coincident.

use glam::{DVec2, DVec3};

/// Translation for the cell at `(row, col)` on a lattice of `dims` tiles.
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use terrain_gen::world_offset;
///
/// let offset = world_offset(2, 3, DVec2::new(2.0, 1.5));
/// assert_eq!(offset, DVec3::new(6.0, -3.0, 0.0));
/// ```
#[inline]
pub fn world_offset(row: usize, col: usize, dims: DVec2) -> DVec3 {
    DVec3::new(col as f64 * dims.x, -(row as f64) * dims.y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_origin_cell_is_not_moved() {
        assert_eq!(world_offset(0, 0, DVec2::new(3.0, 7.0)), DVec3::ZERO);
    }

    #[test]
    fn test_unit_lattice() {
        let dims = DVec2::ONE;
        assert_eq!(world_offset(0, 1, dims), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(world_offset(1, 0, dims), DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(world_offset(1, 1, dims), DVec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_placement_is_injective() {
        for dims in [DVec2::ONE, DVec2::new(0.25, 3.0), DVec2::new(2.0, 2.0)] {
            let mut seen = HashSet::new();
            for row in 0..12 {
                for col in 0..15 {
                    let o = world_offset(row, col, dims);
                    assert!(
                        seen.insert((o.x.to_bits(), (o.y + 0.0).to_bits())),
                        "({row}, {col}) collides for {dims:?}"
                    );
                }
            }
        }
    }
}
