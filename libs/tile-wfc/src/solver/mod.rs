//! # Grid Solving
//!
//! The [`GridSolver`] trait is the seam between tile catalogs and the
//! constraint solver: register descriptors, run with seed placements, get a
//! grid of tile indices back. [`WfcSolver`] is the wave-function-collapse
//! implementation; composition code only ever sees the trait.
//!
//! ```text
//! TileCatalog ──descriptors──▶ GridSolver::register_tile
//! seeds ──────────────────────▶ GridSolver::run ──▶ SolvedGrid { grid, order }
//! ```

mod wave;
mod wfc;


pub use wfc::WfcSolver;

use crate::catalog::TileDescriptor;
use crate::error::SolverResult;
use ndarray::Array2;

/// Grid shape as `(rows, cols)`.
pub type GridShape = (usize, usize);

/// A tile pinned to a cell before solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub name: String,
    pub row: usize,
    pub col: usize,
}

impl Seed {
    pub fn new(name: impl Into<String>, (row, col): (usize, usize)) -> Self {
        Self {
            name: name.into(),
            row,
            col,
        }
    }
}

/// Output of a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedGrid {
    /// Tile index per cell, into the solver's name table
    pub grid: Array2<usize>,
    /// Step at which each cell became determined; seeded cells are 0
    pub order: Array2<usize>,
    /// Observation steps spent, across all attempts
    pub steps: usize,
    /// Attempts made (restarts after contradictions plus one)
    pub attempts: usize,
}

/// A constraint solver that assigns one registered tile to every grid cell.
pub trait GridSolver {
    /// Registers a tile and returns its index in the name table.
    fn register_tile(&mut self, descriptor: TileDescriptor) -> SolverResult<usize>;

    /// Registered tile names; grid values index into this table.
    fn names(&self) -> &[String];

    /// Solves a grid of `shape` with the given seeds within `max_steps`.
    fn run(&mut self, shape: GridShape, seeds: &[Seed], max_steps: usize) -> SolverResult<SolvedGrid>;
}
