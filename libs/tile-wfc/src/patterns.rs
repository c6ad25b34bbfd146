//! # Built-in Patterns
//!
//! Ready-made tile sets:
//!
//! - [`indoor_navigation`]: rooms with walls, raised platforms and walled ramps
//! - [`overhanging_terrain`]: two-level ground with cliffs, corners and ramps
//! - [`overhanging`]: overlay of floating slabs and pillars, meant to be solved
//!   as a second layer over either base pattern
//!
//! All built-ins use a square footprint of
//! [`DEFAULT_TILE_DIM`](config::constants::DEFAULT_TILE_DIM).

use crate::direction::Direction;
use crate::pattern::{MeshPattern, ShapeSpec, Symmetry, TileSpec};
use config::constants::{DEFAULT_TILE_DIM, FLOOR_THICKNESS, WALL_THICKNESS};
use glam::DVec3;

/// Quadrants of a tile footprint.
#[derive(Clone, Copy)]
enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Sockets of a two-level family read clockwise: `high` and `low` fill whole
/// edge thirds, `seam` marks where the level changes mid-edge.
struct Levels {
    high: char,
    low: char,
    seam: char,
}

impl Levels {
    fn socket(&self, a: char, b: char, c: char) -> String {
        [a, b, c].iter().collect()
    }

    fn full(&self) -> [String; 4] {
        let h = self.socket(self.high, self.high, self.high);
        [h.clone(), h.clone(), h.clone(), h]
    }

    fn empty(&self) -> [String; 4] {
        let l = self.socket(self.low, self.low, self.low);
        [l.clone(), l.clone(), l.clone(), l]
    }

    /// High along the north half.
    fn edge(&self) -> [String; 4] {
        [
            self.socket(self.high, self.high, self.high),
            self.socket(self.high, self.seam, self.low),
            self.socket(self.low, self.low, self.low),
            self.socket(self.low, self.seam, self.high),
        ]
    }

    /// High in the north-west quadrant only.
    fn outer_corner(&self) -> [String; 4] {
        [
            self.socket(self.high, self.seam, self.low),
            self.socket(self.low, self.low, self.low),
            self.socket(self.low, self.low, self.low),
            self.socket(self.low, self.seam, self.high),
        ]
    }

    /// High everywhere except the south-east quadrant.
    fn inner_corner(&self) -> [String; 4] {
        [
            self.socket(self.high, self.high, self.high),
            self.socket(self.high, self.seam, self.low),
            self.socket(self.low, self.seam, self.high),
            self.socket(self.high, self.high, self.high),
        ]
    }
}

fn tile(name: &str, edges: [String; 4], shapes: Vec<ShapeSpec>, symmetry: Symmetry) -> TileSpec {
    TileSpec {
        name: name.to_string(),
        weight: 1.0,
        edges,
        shapes,
        symmetry,
    }
}

fn block(min: DVec3, max: DVec3) -> ShapeSpec {
    ShapeSpec::Box { min, max }
}

/// Full-footprint slab from `z0` to `z1`.
fn slab(half: f64, z0: f64, z1: f64) -> ShapeSpec {
    block(DVec3::new(-half, -half, z0), DVec3::new(half, half, z1))
}

fn quadrants(half: f64, z0: f64, z1: f64, which: &[Quadrant]) -> Vec<ShapeSpec> {
    which
        .iter()
        .map(|q| {
            let (x0, x1, y0, y1) = match q {
                Quadrant::NorthWest => (-half, 0.0, 0.0, half),
                Quadrant::NorthEast => (0.0, half, 0.0, half),
                Quadrant::SouthWest => (-half, 0.0, -half, 0.0),
                Quadrant::SouthEast => (0.0, half, -half, 0.0),
            };
            block(DVec3::new(x0, y0, z0), DVec3::new(x1, y1, z1))
        })
        .collect()
}

/// Indoor rooms: floor, walls, outer and inner wall corners, raised
/// platforms at half the wall height and walled ramps leading up to them.
///
/// Seed tile: `floor`.
pub fn indoor_navigation(wall_height: f64) -> MeshPattern {
    let half = DEFAULT_TILE_DIM / 2.0;
    let inner = half - WALL_THICKNESS;
    let level = wall_height / 2.0;
    let floor = || slab(half, 0.0, FLOOR_THICKNESS);
    let north_wall = || block(DVec3::new(-half, inner, 0.0), DVec3::new(half, half, wall_height));
    let west_wall = || block(DVec3::new(-half, -half, 0.0), DVec3::new(-inner, half, wall_height));
    let east_wall = || block(DVec3::new(inner, -half, 0.0), DVec3::new(half, half, wall_height));

    let edges = |n: &str, e: &str, s: &str, w: &str| [n, e, s, w].map(str::to_string);

    let tiles = vec![
        tile("floor", edges("fff", "fff", "fff", "fff"), vec![floor()], Symmetry::None)
            .with_weight(4.0),
        tile(
            "wall",
            edges("www", "wff", "fff", "ffw"),
            vec![floor(), north_wall()],
            Symmetry::Quarter,
        ),
        tile(
            "wall_corner",
            edges("www", "wff", "ffw", "www"),
            vec![floor(), north_wall(), west_wall()],
            Symmetry::Quarter,
        ),
        tile(
            "wall_inner_corner",
            edges("wff", "fff", "fff", "ffw"),
            vec![
                floor(),
                block(
                    DVec3::new(-half, inner, 0.0),
                    DVec3::new(-inner, half, wall_height),
                ),
            ],
            Symmetry::Quarter,
        ),
        tile(
            "platform",
            edges("ppp", "ppp", "ppp", "ppp"),
            vec![slab(half, 0.0, level)],
            Symmetry::None,
        )
        .with_weight(0.5),
        tile(
            "ramp",
            edges("ppp", "www", "fff", "www"),
            vec![
                floor(),
                ShapeSpec::Ramp {
                    min: DVec3::new(-inner, -half, FLOOR_THICKNESS),
                    max: DVec3::new(inner, half, level),
                    rise: Direction::North,
                },
                west_wall(),
                east_wall(),
            ],
            Symmetry::Quarter,
        )
        .with_weight(0.25),
    ];

    MeshPattern::new(
        "indoor",
        DVec3::new(DEFAULT_TILE_DIM, DEFAULT_TILE_DIM, wall_height),
        tiles,
    )
}

/// Two-level outdoor ground: low floor, raised steps, cliff edges, outer and
/// inner cliff corners, and ramps between the levels.
///
/// Seed tile: `floor`.
pub fn overhanging_terrain() -> MeshPattern {
    let half = DEFAULT_TILE_DIM / 2.0;
    let step = DEFAULT_TILE_DIM / 2.0;
    let levels = Levels {
        high: 'b',
        low: 'a',
        seam: 'c',
    };
    let ground = || slab(half, 0.0, FLOOR_THICKNESS);
    let raised = |which: &[Quadrant]| -> Vec<ShapeSpec> {
        std::iter::once(ground())
            .chain(quadrants(half, 0.0, step, which))
            .collect()
    };

    use Quadrant::*;
    let tiles = vec![
        tile("floor", levels.empty(), vec![ground()], Symmetry::None).with_weight(3.0),
        tile("step", levels.full(), vec![slab(half, 0.0, step)], Symmetry::None),
        tile(
            "cliff",
            levels.edge(),
            raised(&[NorthWest, NorthEast][..]),
            Symmetry::Quarter,
        ),
        tile(
            "cliff_corner",
            levels.outer_corner(),
            raised(&[NorthWest][..]),
            Symmetry::Quarter,
        ),
        tile(
            "cliff_inner_corner",
            levels.inner_corner(),
            raised(&[NorthWest, NorthEast, SouthWest][..]),
            Symmetry::Quarter,
        ),
        tile(
            "ramp",
            levels.edge(),
            vec![
                ground(),
                ShapeSpec::Ramp {
                    min: DVec3::new(-half, -half, FLOOR_THICKNESS),
                    max: DVec3::new(half, half, step),
                    rise: Direction::North,
                },
            ],
            Symmetry::Quarter,
        )
        .with_weight(0.3),
    ];

    MeshPattern::new(
        "overhanging_terrain",
        DVec3::new(DEFAULT_TILE_DIM, DEFAULT_TILE_DIM, step),
        tiles,
    )
}

/// Overlay of floating slabs: `walls_empty` (no geometry), full overhangs,
/// overhang edges and corners, and overhangs carried by a pillar.
///
/// Solved as a second layer over the base pattern. Seed tile: `walls_empty`.
pub fn overhanging() -> MeshPattern {
    let half = DEFAULT_TILE_DIM / 2.0;
    let bottom = DEFAULT_TILE_DIM;
    let top = bottom + WALL_THICKNESS;
    let pillar = WALL_THICKNESS;
    let levels = Levels {
        high: 'o',
        low: 'e',
        seam: 'x',
    };

    use Quadrant::*;
    let tiles = vec![
        tile("walls_empty", levels.empty(), Vec::new(), Symmetry::None).with_weight(6.0),
        tile("overhang", levels.full(), vec![slab(half, bottom, top)], Symmetry::None),
        tile(
            "overhang_pillar",
            levels.full(),
            vec![
                slab(half, bottom, top),
                block(DVec3::new(-pillar, -pillar, 0.0), DVec3::new(pillar, pillar, bottom)),
            ],
            Symmetry::None,
        )
        .with_weight(0.2),
        tile(
            "overhang_edge",
            levels.edge(),
            quadrants(half, bottom, top, &[NorthWest, NorthEast]),
            Symmetry::Quarter,
        ),
        tile(
            "overhang_corner",
            levels.outer_corner(),
            quadrants(half, bottom, top, &[NorthWest]),
            Symmetry::Quarter,
        ),
        tile(
            "overhang_inner_corner",
            levels.inner_corner(),
            quadrants(half, bottom, top, &[NorthWest, NorthEast, SouthWest]),
            Symmetry::Quarter,
        ),
    ];

    MeshPattern::new(
        "overhanging",
        DVec3::new(DEFAULT_TILE_DIM, DEFAULT_TILE_DIM, top),
        tiles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_mesh_pattern;
    use config::constants::{DEFAULT_INITIAL_TILE, DEFAULT_OVERHANG_INITIAL_TILE, DEFAULT_WALL_HEIGHT};

    #[test]
    fn test_builtins_build_catalogs() {
        for pattern in [
            indoor_navigation(DEFAULT_WALL_HEIGHT),
            overhanging_terrain(),
            overhanging(),
        ] {
            let catalog = create_mesh_pattern(&pattern).unwrap();
            assert!(catalog.len() > pattern.tiles.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_builtins_contain_seed_tiles() {
        let indoor = create_mesh_pattern(&indoor_navigation(DEFAULT_WALL_HEIGHT)).unwrap();
        let terrain = create_mesh_pattern(&overhanging_terrain()).unwrap();
        let overlay = create_mesh_pattern(&overhanging()).unwrap();
        assert!(indoor.contains(DEFAULT_INITIAL_TILE));
        assert!(terrain.contains(DEFAULT_INITIAL_TILE));
        assert!(overlay.contains(DEFAULT_OVERHANG_INITIAL_TILE));
    }

    #[test]
    fn test_seed_tiles_connect_to_themselves() {
        let indoor = create_mesh_pattern(&indoor_navigation(DEFAULT_WALL_HEIGHT)).unwrap();
        let overlay = create_mesh_pattern(&overhanging()).unwrap();
        for (catalog, name) in [(&indoor, "floor"), (&overlay, "walls_empty")] {
            let seed = catalog.get(name).unwrap().descriptor();
            for dir in Direction::ALL {
                assert!(seed.connects(seed, dir));
            }
        }
    }

    #[test]
    fn test_wall_height_scales_walls() {
        let catalog = create_mesh_pattern(&indoor_navigation(5.0)).unwrap();
        let (_, max) = catalog.get("wall").unwrap().mesh().bounding_box();
        assert_eq!(max.z, 5.0);
        assert_eq!(catalog.dim().z, 5.0);
    }

    #[test]
    fn test_cliff_corners_close_a_square_island() {
        let catalog = create_mesh_pattern(&overhanging_terrain()).unwrap();
        let get = |name: &str| catalog.get(name).unwrap().descriptor();
        // 2x2 island: corners turned so the raised quadrants meet in the middle
        let nw = get("cliff_corner_rot180");
        let ne = get("cliff_corner_rot90");
        let sw = get("cliff_corner_rot270");
        let se = get("cliff_corner");
        assert!(nw.connects(ne, Direction::East));
        assert!(sw.connects(se, Direction::East));
        assert!(nw.connects(sw, Direction::South));
        assert!(ne.connects(se, Direction::South));
    }

    #[test]
    fn test_overlay_empty_tile_has_no_geometry() {
        let overlay = create_mesh_pattern(&overhanging()).unwrap();
        assert!(overlay.get("walls_empty").unwrap().mesh().is_empty());
        let (min, _) = overlay.get("overhang").unwrap().mesh().bounding_box();
        assert!(min.z > 0.0);
    }
}
