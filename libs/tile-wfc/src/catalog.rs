//! # Tile Catalog
//!
//! Turns a [`MeshPattern`] into concrete tiles: every tile spec (and each of
//! its rotated variants) becomes a [`Tile`] owning a mesh fragment and the
//! [`TileDescriptor`] the solver registers.
//!
//! Catalogs are immutable values built once per solve. Consumers that place
//! a fragment must clone it; the catalog's meshes are never moved.

use crate::direction::Direction;
use crate::error::CatalogError;
use crate::pattern::{MeshPattern, ShapeSpec, TileSpec};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tile_mesh::primitives::{create_cuboid, create_ramp};
use tile_mesh::Mesh;

/// Solver-facing description of a tile: name, weight and edge sockets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub name: String,
    pub weight: f64,
    /// Sockets in north, east, south, west order, read clockwise
    pub edges: [String; 4],
}

impl TileDescriptor {
    /// Socket on the given edge.
    #[inline]
    pub fn edge(&self, direction: Direction) -> &str {
        &self.edges[direction.index()]
    }

    /// Whether `other` may sit next to this tile in `direction`.
    ///
    /// ```rust
    /// use tile_wfc::{Direction, TileDescriptor};
    ///
    /// let wall = TileDescriptor::new("wall", 1.0, ["www", "wff", "fff", "ffw"]);
    /// // Two walls side by side along the east-west axis
    /// assert!(wall.connects(&wall, Direction::East));
    /// // A wall's open side cannot face another wall's back
    /// assert!(!wall.connects(&wall, Direction::South));
    /// ```
    pub fn connects(&self, other: &TileDescriptor, direction: Direction) -> bool {
        self.edge(direction)
            .chars()
            .eq(other.edge(direction.opposite()).chars().rev())
    }

    /// Creates a descriptor from socket literals.
    pub fn new(name: impl Into<String>, weight: f64, edges: [&str; 4]) -> Self {
        Self {
            name: name.into(),
            weight,
            edges: edges.map(str::to_string),
        }
    }

    /// The descriptor after `turns` counter-clockwise quarter turns.
    fn rotated(&self, turns: u8, name: String) -> Self {
        let mut edges = self.edges.clone();
        for dir in Direction::ALL {
            edges[dir.rotated(turns).index()] = self.edge(dir).to_string();
        }
        Self {
            name,
            weight: self.weight,
            edges,
        }
    }
}

/// A named tile: its solver descriptor and the mesh fragment it places.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    descriptor: TileDescriptor,
    mesh: Mesh,
}

impl Tile {
    pub fn new(descriptor: TileDescriptor, mesh: Mesh) -> Self {
        Self { descriptor, mesh }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Descriptor to register with a solver.
    #[inline]
    pub fn descriptor(&self) -> &TileDescriptor {
        &self.descriptor
    }

    /// Master mesh fragment, in the tile-local frame.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// Immutable, ordered set of tiles with lookup by name.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    pattern: String,
    dim: DVec3,
    tiles: Vec<Tile>,
    index: HashMap<String, usize>,
}

impl TileCatalog {
    /// Builds the catalog for a pattern, expanding rotated variants.
    ///
    /// Variant names are `name`, `name_rot90`, `name_rot180`, `name_rot270`.
    pub fn from_pattern(pattern: &MeshPattern) -> Result<Self, CatalogError> {
        pattern.validate()?;

        let mut tiles = Vec::new();
        for spec in &pattern.tiles {
            let mesh = build_mesh(spec)?;
            let base = TileDescriptor {
                name: spec.name.clone(),
                weight: spec.weight,
                edges: spec.edges.clone(),
            };

            for &turns in spec.symmetry.turns() {
                let name = variant_name(&spec.name, turns);
                let mut variant = mesh.clone();
                variant.rotate_quarter_turns(turns);
                tiles.push(Tile::new(base.rotated(turns, name), variant));
            }
        }

        Self::from_tiles(&pattern.name, pattern.dim, tiles)
    }

    /// Builds a catalog from ready-made tiles.
    pub fn from_tiles(
        pattern: impl Into<String>,
        dim: DVec3,
        tiles: Vec<Tile>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(tiles.len());
        for (i, tile) in tiles.iter().enumerate() {
            if index.insert(tile.name().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateTile {
                    name: tile.name().to_string(),
                });
            }
        }

        Ok(Self {
            pattern: pattern.into(),
            dim,
            tiles,
            index,
        })
    }

    /// Name of the pattern the catalog was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tile footprint `(dim_x, dim_y, height)`.
    pub fn dim(&self) -> DVec3 {
        self.dim
    }

    /// Looks up a tile by name.
    pub fn get(&self, name: &str) -> Option<&Tile> {
        self.index.get(name).map(|&i| &self.tiles[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tile names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiles.iter().map(Tile::name)
    }
}

/// Builds the catalog for a pattern.
pub fn create_mesh_pattern(pattern: &MeshPattern) -> Result<TileCatalog, CatalogError> {
    TileCatalog::from_pattern(pattern)
}

fn variant_name(name: &str, turns: u8) -> String {
    match turns {
        0 => name.to_string(),
        t => format!("{}_rot{}", name, t as u32 * 90),
    }
}

fn build_mesh(spec: &TileSpec) -> Result<Mesh, CatalogError> {
    let mut mesh = Mesh::new();
    for shape in &spec.shapes {
        let part = match shape {
            ShapeSpec::Box { min, max } => create_cuboid(*min, *max),
            ShapeSpec::Ramp { min, max, rise } => create_ramp(*min, *max, rise.slope()),
        }
        .map_err(|source| CatalogError::Geometry {
            name: spec.name.clone(),
            source,
        })?;
        mesh.merge(&part);
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Symmetry;

    fn wall_pattern() -> MeshPattern {
        let wall = TileSpec::new("wall", ["www", "wff", "fff", "ffw"])
            .with_box(DVec3::new(-1.0, 0.8, 0.0), DVec3::new(1.0, 1.0, 3.0))
            .with_symmetry(Symmetry::Quarter);
        let floor = TileSpec::new("floor", ["fff", "fff", "fff", "fff"])
            .with_box(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.1));
        MeshPattern::new("walls", DVec3::new(2.0, 2.0, 3.0), vec![floor, wall])
    }

    #[test]
    fn test_catalog_expands_variants() {
        let catalog = create_mesh_pattern(&wall_pattern()).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            ["floor", "wall", "wall_rot90", "wall_rot180", "wall_rot270"]
        );
        assert!(catalog.contains("wall_rot270"));
        assert!(catalog.get("wall_rot45").is_none());
    }

    #[test]
    fn test_rotated_sockets_follow_geometry() {
        let catalog = create_mesh_pattern(&wall_pattern()).unwrap();
        // A quarter turn moves the north wall to the west
        let turned = catalog.get("wall_rot90").unwrap();
        assert_eq!(turned.descriptor().edge(Direction::West), "www");
        assert_eq!(turned.descriptor().edge(Direction::South), "ffw");

        let (min, max) = turned.mesh().bounding_box();
        assert!(max.x <= -0.8 + 1e-12);
        assert!(min.x >= -1.0 - 1e-12);
        assert!(max.y >= 1.0 - 1e-12);
    }

    #[test]
    fn test_rotated_walls_join_at_corner_sockets() {
        let catalog = create_mesh_pattern(&wall_pattern()).unwrap();
        let north = catalog.get("wall").unwrap().descriptor();
        let south = catalog.get("wall_rot180").unwrap().descriptor();
        // Back to back across their walled edges
        assert!(north.connects(south, Direction::North));
        // Walls never face open floor
        assert!(!north.connects(north, Direction::South));
        assert!(north.connects(north, Direction::East));
        assert!(south.connects(south, Direction::West));
        assert!(!north.connects(south, Direction::East));
    }

    #[test]
    fn test_variant_edges_follow_direction_rotation() {
        let catalog = create_mesh_pattern(&wall_pattern()).unwrap();
        let wall = catalog.get("wall").unwrap().descriptor();
        for (turns, name) in [(1, "wall_rot90"), (2, "wall_rot180"), (3, "wall_rot270")] {
            let variant = catalog.get(name).unwrap().descriptor();
            for dir in Direction::ALL {
                assert_eq!(variant.edge(dir.rotated(turns)), wall.edge(dir), "{name} {dir:?}");
            }
        }
    }

    #[test]
    fn test_connects_is_symmetric() {
        let catalog = create_mesh_pattern(&wall_pattern()).unwrap();
        for a in catalog.iter() {
            for b in catalog.iter() {
                for dir in Direction::ALL {
                    assert_eq!(
                        a.descriptor().connects(b.descriptor(), dir),
                        b.descriptor().connects(a.descriptor(), dir.opposite()),
                        "{} -> {} ({:?})",
                        a.name(),
                        b.name(),
                        dir
                    );
                }
            }
        }
    }

    #[test]
    fn test_master_mesh_is_not_shared_between_variants() {
        let catalog = create_mesh_pattern(&wall_pattern()).unwrap();
        let wall = catalog.get("wall").unwrap().mesh();
        let turned = catalog.get("wall_rot90").unwrap().mesh();
        assert_eq!(wall.vertex_count(), turned.vertex_count());
        assert_ne!(wall, turned);
    }

    #[test]
    fn test_duplicate_variant_name_rejected() {
        let mut pattern = wall_pattern();
        pattern
            .tiles
            .push(TileSpec::new("wall_rot90", ["fff", "fff", "fff", "fff"]));
        let err = create_mesh_pattern(&pattern).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTile { name } if name == "wall_rot90"));
    }

    #[test]
    fn test_degenerate_shape_reports_tile() {
        let tile = TileSpec::new("flat", ["f", "f", "f", "f"])
            .with_box(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
        let pattern = MeshPattern::new("p", DVec3::splat(2.0), vec![tile]);
        let err = create_mesh_pattern(&pattern).unwrap_err();
        assert!(matches!(err, CatalogError::Geometry { name, .. } if name == "flat"));
    }

    #[test]
    fn test_empty_tile_has_empty_mesh() {
        let tile = TileSpec::new("empty", ["e", "e", "e", "e"]);
        let pattern = MeshPattern::new("p", DVec3::splat(2.0), vec![tile]);
        let catalog = create_mesh_pattern(&pattern).unwrap();
        assert!(catalog.get("empty").unwrap().mesh().is_empty());
    }
}
