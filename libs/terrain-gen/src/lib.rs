//! # Terrain Gen
//!
//! Composition of wave-function-collapse tile grids into terrain meshes.
//!
//! ## Architecture
//!
//! ```text
//! tile-wfc (catalogs, solver) → terrain-gen (layers, composition, export) → OBJ
//! ```
//!
//! A terrain is one base layer plus an optional overhang layer solved
//! independently over the same grid. Each cell's fragments are merged,
//! placed at `(col * dim_x, -row * dim_y, 0)` and appended to one mesh,
//! which is then recentred on the Z axis and exported.
//!
//! ## Usage
//!
//! ```rust
//! use terrain_gen::{finalize, LayerSolver, MeshComposer};
//! use tile_wfc::patterns;
//! use glam::DVec2;
//!
//! let base = LayerSolver::new()
//!     .with_seed(Some(3))
//!     .solve(&patterns::indoor_navigation(3.0), (4, 4), "floor")
//!     .unwrap();
//! let dim = base.catalog.dim();
//! let composition = MeshComposer::new(DVec2::new(dim.x, dim.y))
//!     .compose(&base, None)
//!     .unwrap();
//! assert_eq!(composition.fragments, 16);
//! let terrain = finalize(composition.mesh);
//! assert!(!terrain.is_empty());
//! ```

pub mod compose;
pub mod error;
pub mod finalize;
pub mod history;
pub mod layer;
pub mod pipeline;
pub mod placement;

pub use compose::{Composition, MeshComposer};
pub use error::{HistoryError, TerrainError, TerrainResult};
pub use finalize::{export, finalize, recenter};
pub use history::{
    DirectoryHistory, FragmentStage, FragmentTag, HistorySink, LayerRole, RecordingHistory,
};
pub use layer::{solve_layer, LayerSolution, LayerSolver};
pub use pipeline::{GenerationReport, GenerationRequest, TerrainGenerator};
pub use placement::world_offset;
