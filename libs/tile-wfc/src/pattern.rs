//! # Mesh Patterns
//!
//! Declarative tile-set configuration. A [`MeshPattern`] lists tile
//! descriptions: edge sockets for the solver and simple shapes for the
//! mesh. Patterns are plain data and can be loaded from JSON.
//!
//! ## Sockets
//!
//! Each edge carries a socket string read clockwise around the tile. Two
//! tiles fit across a shared edge when one socket equals the other reversed,
//! so asymmetric profiles (a wall hugging one end of an edge) line up
//! correctly under rotation.
//!
//! ```text
//!          north →
//!        ┌───────┐
//!   ↑    │       │  east
//!  west  │       │   ↓
//!        └───────┘
//!          ← south
//! ```

use crate::direction::Direction;
use crate::error::CatalogError;
use config::constants::{approx_equal, EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named tile set with a shared footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPattern {
    /// Pattern name, used in logs
    pub name: String,
    /// Tile footprint `(dim_x, dim_y, height)` in world units
    pub dim: DVec3,
    /// Tiles in registration order
    pub tiles: Vec<TileSpec>,
}

/// Declarative description of one tile and its rotated variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSpec {
    pub name: String,
    /// Relative selection weight
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Sockets in north, east, south, west order
    pub edges: [String; 4],
    /// Shapes in the tile-local frame: XY centred on the tile, Z up
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
    #[serde(default)]
    pub symmetry: Symmetry,
}

fn default_weight() -> f64 {
    1.0
}

/// A solid making up part of a tile mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Axis-aligned box
    Box { min: DVec3, max: DVec3 },
    /// Wedge rising toward `rise`
    Ramp {
        min: DVec3,
        max: DVec3,
        rise: Direction,
    },
}

impl ShapeSpec {
    fn bounds(&self) -> (DVec3, DVec3) {
        match self {
            ShapeSpec::Box { min, max } | ShapeSpec::Ramp { min, max, .. } => (*min, *max),
        }
    }
}

/// Which quarter-turn variants of a tile are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    /// Only the tile as authored
    #[default]
    None,
    /// The tile and its 180° turn
    Half,
    /// All four quarter turns
    Quarter,
}

impl Symmetry {
    /// Counter-clockwise quarter turns of each generated variant.
    pub fn turns(self) -> &'static [u8] {
        match self {
            Symmetry::None => &[0],
            Symmetry::Half => &[0, 2],
            Symmetry::Quarter => &[0, 1, 2, 3],
        }
    }
}

impl TileSpec {
    /// Creates a tile with unit weight, no shapes and no symmetry.
    pub fn new(name: impl Into<String>, edges: [&str; 4]) -> Self {
        Self {
            name: name.into(),
            weight: 1.0,
            edges: edges.map(str::to_string),
            shapes: Vec::new(),
            symmetry: Symmetry::None,
        }
    }

    /// Sets the selection weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Adds an axis-aligned box.
    pub fn with_box(mut self, min: DVec3, max: DVec3) -> Self {
        self.shapes.push(ShapeSpec::Box { min, max });
        self
    }

    /// Adds a ramp rising toward `rise`.
    pub fn with_ramp(mut self, min: DVec3, max: DVec3, rise: Direction) -> Self {
        self.shapes.push(ShapeSpec::Ramp { min, max, rise });
        self
    }

    /// Sets which rotated variants are generated.
    pub fn with_symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Socket on the given edge.
    #[inline]
    pub fn edge(&self, direction: Direction) -> &str {
        &self.edges[direction.index()]
    }
}

impl MeshPattern {
    /// Creates a pattern with the given footprint.
    pub fn new(name: impl Into<String>, dim: DVec3, tiles: Vec<TileSpec>) -> Self {
        Self {
            name: name.into(),
            dim,
            tiles,
        }
    }

    /// Parses a pattern from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a pattern from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Serializes the pattern to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the pattern for problems that would make catalog building
    /// or solving meaningless.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.tiles.is_empty() {
            return Err(CatalogError::EmptyPattern {
                pattern: self.name.clone(),
            });
        }

        if !(self.dim.x > 0.0 && self.dim.y > 0.0) || !self.dim.is_finite() {
            return Err(CatalogError::InvalidDimension {
                pattern: self.name.clone(),
                message: format!("footprint must be positive, got {:?}", self.dim),
            });
        }

        let square = approx_equal(self.dim.x, self.dim.y);
        let half = self.dim * 0.5;

        for tile in &self.tiles {
            if !(tile.weight > 0.0 && tile.weight.is_finite()) {
                return Err(CatalogError::invalid_tile(
                    &tile.name,
                    format!("weight must be positive, got {}", tile.weight),
                ));
            }

            if let Some(direction) = Direction::ALL.iter().find(|d| tile.edge(**d).is_empty()) {
                return Err(CatalogError::invalid_tile(
                    &tile.name,
                    format!("{:?} socket is empty", direction),
                ));
            }

            if tile.symmetry == Symmetry::Quarter && !square {
                return Err(CatalogError::invalid_tile(
                    &tile.name,
                    "quarter-turn symmetry needs a square footprint",
                ));
            }

            for shape in &tile.shapes {
                let (min, max) = shape.bounds();
                let outside = min.x < -half.x - EPSILON
                    || min.y < -half.y - EPSILON
                    || max.x > half.x + EPSILON
                    || max.y > half.y + EPSILON;
                if outside {
                    return Err(CatalogError::invalid_tile(
                        &tile.name,
                        format!("shape {:?}..{:?} leaves the footprint", min, max),
                    ));
                }
            }
        }

        Ok(())
    }
}
