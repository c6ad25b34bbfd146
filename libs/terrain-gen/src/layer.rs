//! # Layer Solve
//!
//! One independent solve of a tile grid: build the catalog, register every
//! tile with a [`GridSolver`], anchor the initial tile at the grid centre and
//! run the solver within a step budget.
//!
//! The initial tile is checked against the catalog before the solver is
//! touched, so a misnamed tile never costs a solve.

use crate::error::{TerrainError, TerrainResult};
use config::constants::{grid_center, DEFAULT_MAX_STEPS};
use ndarray::Array2;
use tile_mesh::Mesh;
use tile_wfc::{
    create_mesh_pattern, GridShape, GridSolver, MeshPattern, Seed, SolverError, TileCatalog,
    WfcSolver,
};
use tracing::{debug, info};

/// A solved layer: the catalog it was solved against, the tile grid, the
/// resolution order and the name table grid values index into.
#[derive(Debug, Clone)]
pub struct LayerSolution {
    pub catalog: TileCatalog,
    pub grid: Array2<usize>,
    pub order: Array2<usize>,
    pub names: Vec<String>,
}

impl LayerSolution {
    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> GridShape {
        self.grid.dim()
    }

    /// Tile index and name at a cell.
    pub fn tile_at(&self, row: usize, col: usize) -> TerrainResult<(usize, &str)> {
        let index = self.grid[[row, col]];
        let name = self
            .names
            .get(index)
            .ok_or(TerrainError::TileIndexOutOfRange {
                index,
                len: self.names.len(),
                row,
                col,
            })?;
        Ok((index, name.as_str()))
    }

    /// Tile index, name and master fragment at a cell.
    pub fn fragment_at(&self, row: usize, col: usize) -> TerrainResult<(usize, &str, &Mesh)> {
        let (index, name) = self.tile_at(row, col)?;
        let tile = self
            .catalog
            .get(name)
            .ok_or_else(|| TerrainError::MissingTileFragment {
                name: name.to_string(),
                row,
                col,
            })?;
        Ok((index, name, tile.mesh()))
    }
}

/// Solves layers with a fixed step budget and optional seed.
#[derive(Debug, Clone, Copy)]
pub struct LayerSolver {
    max_steps: usize,
    seed: Option<u64>,
}

impl Default for LayerSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerSolver {
    pub fn new() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Seeds the solver so repeated solves produce the same grid.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Builds the catalog for `pattern` and checks the grid shape and initial
    /// tile against it. No solver is involved.
    pub fn prepare(
        &self,
        pattern: &MeshPattern,
        shape: GridShape,
        initial_tile: &str,
    ) -> TerrainResult<TileCatalog> {
        let catalog = create_mesh_pattern(pattern)?;
        check_layer(&catalog, shape, initial_tile)?;
        Ok(catalog)
    }

    /// Solves `pattern` with a fresh [`WfcSolver`].
    pub fn solve(
        &self,
        pattern: &MeshPattern,
        shape: GridShape,
        initial_tile: &str,
    ) -> TerrainResult<LayerSolution> {
        let catalog = self.prepare(pattern, shape, initial_tile)?;
        self.solve_prepared(catalog, shape, initial_tile)
    }

    /// Solves a ready-made catalog with a fresh [`WfcSolver`].
    pub fn solve_prepared(
        &self,
        catalog: TileCatalog,
        shape: GridShape,
        initial_tile: &str,
    ) -> TerrainResult<LayerSolution> {
        let mut solver = match self.seed {
            Some(seed) => WfcSolver::with_seed(seed),
            None => WfcSolver::new(),
        };
        self.solve_catalog(catalog, shape, initial_tile, &mut solver)
    }

    /// Solves `pattern` with the given solver.
    pub fn solve_with<S: GridSolver>(
        &self,
        pattern: &MeshPattern,
        shape: GridShape,
        initial_tile: &str,
        solver: &mut S,
    ) -> TerrainResult<LayerSolution> {
        let catalog = self.prepare(pattern, shape, initial_tile)?;
        self.solve_catalog(catalog, shape, initial_tile, solver)
    }

    /// Solves a ready-made catalog with the given solver.
    pub fn solve_catalog<S: GridSolver>(
        &self,
        catalog: TileCatalog,
        shape: GridShape,
        initial_tile: &str,
        solver: &mut S,
    ) -> TerrainResult<LayerSolution> {
        check_layer(&catalog, shape, initial_tile)?;
        let (rows, cols) = shape;

        for tile in catalog.iter() {
            solver
                .register_tile(tile.descriptor().clone())
                .map_err(|err| solver_error(catalog.pattern(), err))?;
        }

        let seed = Seed::new(initial_tile, grid_center(shape));
        debug!(
            pattern = catalog.pattern(),
            tiles = catalog.len(),
            row = seed.row,
            col = seed.col,
            "solving layer"
        );

        let solved = solver
            .run(shape, &[seed], self.max_steps)
            .map_err(|err| solver_error(catalog.pattern(), err))?;

        info!(
            pattern = catalog.pattern(),
            rows,
            cols,
            steps = solved.steps,
            attempts = solved.attempts,
            "layer solved"
        );

        Ok(LayerSolution {
            names: solver.names().to_vec(),
            grid: solved.grid,
            order: solved.order,
            catalog,
        })
    }
}

/// Solves one layer with the default step budget.
pub fn solve_layer<S: GridSolver>(
    pattern: &MeshPattern,
    shape: GridShape,
    initial_tile: &str,
    solver: &mut S,
) -> TerrainResult<LayerSolution> {
    LayerSolver::new().solve_with(pattern, shape, initial_tile, solver)
}

fn check_layer(catalog: &TileCatalog, (rows, cols): GridShape, initial_tile: &str) -> TerrainResult<()> {
    if rows == 0 || cols == 0 {
        return Err(TerrainError::configuration(format!(
            "grid shape {}x{} has no cells",
            rows, cols
        )));
    }
    if !catalog.contains(initial_tile) {
        return Err(TerrainError::configuration(format!(
            "initial tile '{}' is not in pattern '{}'",
            initial_tile,
            catalog.pattern()
        )));
    }
    Ok(())
}

fn solver_error(pattern: &str, err: SolverError) -> TerrainError {
    match err {
        SolverError::StepBudgetExhausted { max_steps } => TerrainError::SolveIncomplete {
            pattern: pattern.to_string(),
            max_steps,
        },
        other => TerrainError::configuration(format!("pattern '{}': {}", pattern, other)),
    }
}
