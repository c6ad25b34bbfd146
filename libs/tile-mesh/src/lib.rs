//! # Tile Mesh
//!
//! Triangle meshes for WFC terrain tiles and the terrain composed from them.
//!
//! ## Architecture
//!
//! ```text
//! tile-wfc (tile shapes) → tile-mesh (Mesh) → terrain-gen (composition, export)
//! ```
//!
//! ## Operations
//!
//! - **Accumulation**: [`Mesh::merge`] concatenates geometry, no boolean union
//! - **Placement**: [`Mesh::translate`] and [`Mesh::rotate_quarter_turns`]
//! - **Primitives**: cuboids, ramps and planes for tile authoring
//! - **Export**: Wavefront OBJ via [`export::write_obj`]
//!
//! ## Usage
//!
//! ```rust
//! use tile_mesh::{primitives::create_cuboid, Mesh};
//! use glam::DVec3;
//!
//! let mut terrain = Mesh::new();
//! let mut slab = create_cuboid(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.1)).unwrap();
//! slab.translate(DVec3::new(2.0, 0.0, 0.0));
//! terrain.merge(&slab);
//! assert_eq!(terrain.triangle_count(), 12);
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
