//! # Tile WFC
//!
//! Tile authoring and wave-function-collapse grid solving.
//!
//! ## Architecture
//!
//! ```text
//! MeshPattern ──create_mesh_pattern──▶ TileCatalog ──descriptors──▶ GridSolver
//!                                          │                           │
//!                                    mesh fragments              SolvedGrid
//! ```
//!
//! Tiles carry four edge sockets in north, east, south, west order. Two tiles
//! fit side by side when the shared edge of one is the reverse of the other's,
//! so asymmetric sockets only match their mirrored partner.
//!
//! ## Usage
//!
//! ```rust
//! use tile_wfc::{create_mesh_pattern, patterns, GridSolver, Seed, WfcSolver};
//!
//! let catalog = create_mesh_pattern(&patterns::indoor_navigation(3.0)).unwrap();
//! let mut solver = WfcSolver::with_seed(1);
//! for tile in catalog.iter() {
//!     solver.register_tile(tile.descriptor().clone()).unwrap();
//! }
//! let solved = solver.run((4, 4), &[Seed::new("floor", (2, 2))], 1_000).unwrap();
//! assert_eq!(solved.grid.dim(), (4, 4));
//! ```

pub mod catalog;
pub mod direction;
pub mod error;
pub mod pattern;
pub mod patterns;
pub mod solver;

pub use catalog::{create_mesh_pattern, Tile, TileCatalog, TileDescriptor};
pub use direction::Direction;
pub use error::{CatalogError, SolverError, SolverResult};
pub use pattern::{MeshPattern, ShapeSpec, Symmetry, TileSpec};
pub use solver::{GridShape, GridSolver, Seed, SolvedGrid, WfcSolver};
