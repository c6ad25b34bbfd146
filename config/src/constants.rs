//! # Configuration Constants
//!
//! Centralized constants for the terrain pipeline. Grid defaults, solver
//! budgets, tile footprints and history naming are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Grid**: Default grid shape and seed tiles
//! - **Solver**: Step budget for wave-function-collapse
//! - **Tiles**: Default footprint and wall height
//! - **Artifacts**: Output directory, file naming and history layout

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when checking that recentring is idempotent and that shapes lie
/// inside a tile footprint.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Default grid shape as `(rows, cols)`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_GRID_SHAPE;
///
/// let (rows, cols) = DEFAULT_GRID_SHAPE;
/// assert_eq!(rows * cols, 400);
/// ```
pub const DEFAULT_GRID_SHAPE: (usize, usize) = (20, 20);

/// Tile anchored at the grid center of the base layer.
pub const DEFAULT_INITIAL_TILE: &str = "floor";

/// Tile anchored at the grid center of the overhanging layer.
pub const DEFAULT_OVERHANG_INITIAL_TILE: &str = "walls_empty";

// =============================================================================
// SOLVER CONSTANTS
// =============================================================================

/// Maximum number of observation steps a single solve may take.
///
/// Steps spent on attempts that ended in a contradiction count toward this
/// budget, so a solve always terminates.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_GRID_SHAPE, DEFAULT_MAX_STEPS};
///
/// let (rows, cols) = DEFAULT_GRID_SHAPE;
/// // Room for many restarts on the default grid
/// assert!(DEFAULT_MAX_STEPS / (rows * cols) >= 10);
/// ```
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Noise amplitude added to cell entropy to break ties randomly.
pub const ENTROPY_NOISE: f64 = 1e-6;

// =============================================================================
// TILE CONSTANTS
// =============================================================================

/// Default tile footprint edge length (world units) for built-in patterns.
pub const DEFAULT_TILE_DIM: f64 = 2.0;

/// Default wall height for the indoor navigation pattern.
pub const DEFAULT_WALL_HEIGHT: f64 = 3.0;

/// Thickness of floor slabs in built-in patterns.
pub const FLOOR_THICKNESS: f64 = 0.1;

/// Thickness of walls in built-in patterns.
pub const WALL_THICKNESS: f64 = 0.2;

// =============================================================================
// ARTIFACT CONSTANTS
// =============================================================================

/// Default directory for generated meshes.
pub const DEFAULT_MESH_DIR: &str = "results/generated_terrain";

/// Default base name for generated meshes; files become `{name}_{i}.obj`.
pub const DEFAULT_MESH_NAME: &str = "mesh";

/// Number of meshes the CLI generates per invocation by default.
pub const DEFAULT_MESH_COUNT: usize = 10;

/// File extension of exported meshes.
pub const MESH_EXTENSION: &str = "obj";

/// Suffix appended to a mesh file name to form its history directory.
///
/// # Example
///
/// ```rust
/// use config::constants::HISTORY_DIR_SUFFIX;
///
/// let dir = format!("{}{}", "mesh_0.obj", HISTORY_DIR_SUFFIX);
/// assert_eq!(dir, "mesh_0.obj_history");
/// ```
pub const HISTORY_DIR_SUFFIX: &str = "_history";

/// History subdirectory for per-cell fragments before placement.
pub const HISTORY_PARTS_DIR: &str = "parts";

/// History subdirectory for per-cell fragments after placement.
pub const HISTORY_TRANSLATED_PARTS_DIR: &str = "translated_parts";

/// Marker appended to the file stem of a placed fragment.
pub const TRANSLATED_MARKER: &str = "_translated";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the grid cell where the initial tile is anchored.
///
/// # Example
///
/// ```rust
/// use config::constants::grid_center;
///
/// assert_eq!(grid_center((20, 20)), (10, 10));
/// assert_eq!(grid_center((3, 4)), (1, 2));
/// ```
#[inline]
pub fn grid_center(shape: (usize, usize)) -> (usize, usize) {
    (shape.0 / 2, shape.1 / 2)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
