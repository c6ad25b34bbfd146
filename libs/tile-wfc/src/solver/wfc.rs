//! Socket-based wave-function-collapse.
//!
//! Non-periodic, four-neighbour grid. Each step observes the cell with the
//! lowest Shannon entropy, collapses it to a weighted-random tile and
//! propagates arc consistency. A contradiction restarts from the seeds;
//! every step counts toward the budget across restarts.

use super::wave::Wave;
use super::{GridShape, GridSolver, Seed, SolvedGrid};
use crate::catalog::TileDescriptor;
use crate::direction::Direction;
use crate::error::{SolverError, SolverResult};
use config::constants::ENTROPY_NOISE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// `allowed[(a * 4 + d) * n + b]`: tile `b` may sit in direction `d` of `a`.
struct Adjacency {
    tiles: usize,
    allowed: Vec<bool>,
}

impl Adjacency {
    fn build(descriptors: &[TileDescriptor]) -> Self {
        let n = descriptors.len();
        let mut allowed = vec![false; n * 4 * n];
        for (a, from) in descriptors.iter().enumerate() {
            for dir in Direction::ALL {
                for (b, to) in descriptors.iter().enumerate() {
                    allowed[(a * 4 + dir.index()) * n + b] = from.connects(to, dir);
                }
            }
        }
        Self { tiles: n, allowed }
    }

    #[inline]
    fn allows(&self, from: usize, dir: Direction, to: usize) -> bool {
        self.allowed[(from * 4 + dir.index()) * self.tiles + to]
    }
}

/// Wave-function-collapse [`GridSolver`].
///
/// # Example
///
/// ```rust
/// use tile_wfc::{GridSolver, Seed, TileDescriptor, WfcSolver};
///
/// let mut solver = WfcSolver::with_seed(7);
/// solver.register_tile(TileDescriptor::new("floor", 1.0, ["f", "f", "f", "f"])).unwrap();
/// let solved = solver.run((3, 3), &[Seed::new("floor", (1, 1))], 100).unwrap();
/// assert!(solved.grid.iter().all(|&t| t == 0));
/// ```
pub struct WfcSolver {
    tiles: Vec<TileDescriptor>,
    names: Vec<String>,
    rng: StdRng,
}

impl Default for WfcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl WfcSolver {
    /// Creates a solver seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible solver.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            tiles: Vec::new(),
            names: Vec::new(),
            rng,
        }
    }

    fn resolve_seeds(&self, (rows, cols): GridShape, seeds: &[Seed]) -> SolverResult<Vec<(usize, usize)>> {
        seeds
            .iter()
            .map(|seed| {
                let tile = self
                    .names
                    .iter()
                    .position(|name| *name == seed.name)
                    .ok_or_else(|| SolverError::UnknownTile {
                        name: seed.name.clone(),
                    })?;
                if seed.row >= rows || seed.col >= cols {
                    return Err(SolverError::SeedOutOfBounds {
                        name: seed.name.clone(),
                        row: seed.row,
                        col: seed.col,
                        rows,
                        cols,
                    });
                }
                Ok((seed.row * cols + seed.col, tile))
            })
            .collect()
    }

    /// Fresh wave with the grid made arc-consistent and seeds applied.
    fn seeded_wave(
        &self,
        shape: GridShape,
        adjacency: &Adjacency,
        seeds: &[Seed],
        resolved: &[(usize, usize)],
    ) -> SolverResult<Wave> {
        let mut wave = Wave::new(shape, self.tiles.len());

        let all_cells: Vec<usize> = (0..wave.cells()).collect();
        if !propagate(&mut wave, adjacency, all_cells, 0) {
            return Err(SolverError::Unsatisfiable);
        }

        for (seed, &(cell, tile)) in seeds.iter().zip(resolved) {
            let conflict = || SolverError::SeedConflict {
                name: seed.name.clone(),
                row: seed.row,
                col: seed.col,
            };
            if !wave.collapse(cell, tile) {
                return Err(conflict());
            }
            wave.mark_resolved(cell, 0);
            if !propagate(&mut wave, adjacency, vec![cell], 0) {
                return Err(conflict());
            }
        }

        for cell in 0..wave.cells() {
            wave.mark_resolved(cell, 0);
        }
        Ok(wave)
    }

    /// Undecided cell with the lowest entropy, ties broken by noise.
    fn lowest_entropy_cell(&mut self, wave: &Wave) -> Option<usize> {
        let mut best = None;
        let mut best_entropy = f64::INFINITY;

        for cell in 0..wave.cells() {
            if wave.count(cell) <= 1 {
                continue;
            }
            let (sum, sum_log) = wave.possible_tiles(cell).fold((0.0, 0.0), |(sum, sum_log), t| {
                let w = self.tiles[t].weight;
                (sum + w, sum_log + w * w.ln())
            });
            let entropy = sum.ln() - sum_log / sum + ENTROPY_NOISE * self.rng.random::<f64>();
            if entropy < best_entropy {
                best_entropy = entropy;
                best = Some(cell);
            }
        }

        best
    }

    /// Weighted-random choice among the tiles still possible in `cell`.
    fn choose_tile(&mut self, wave: &Wave, cell: usize) -> usize {
        let total: f64 = wave.possible_tiles(cell).map(|t| self.tiles[t].weight).sum();
        let mut remaining = self.rng.random::<f64>() * total;
        let mut chosen = 0;
        for t in wave.possible_tiles(cell) {
            chosen = t;
            remaining -= self.tiles[t].weight;
            if remaining <= 0.0 {
                break;
            }
        }
        chosen
    }
}

/// Removes tiles without support from the neighbours of every cell in
/// `pending`, transitively. Returns false on a contradiction.
fn propagate(wave: &mut Wave, adjacency: &Adjacency, mut pending: Vec<usize>, step: usize) -> bool {
    let shape = wave.shape();

    while let Some(cell) = pending.pop() {
        let pos = wave.coords(cell);
        for dir in Direction::ALL {
            let Some(next) = dir.step(pos, shape) else {
                continue;
            };
            let neighbor = wave.cell(next);

            let mut changed = false;
            for tile in 0..adjacency.tiles {
                if !wave.is_possible(neighbor, tile) {
                    continue;
                }
                let supported = wave
                    .possible_tiles(cell)
                    .any(|from| adjacency.allows(from, dir, tile));
                if !supported {
                    changed |= wave.ban(neighbor, tile);
                }
            }

            if changed {
                if wave.count(neighbor) == 0 {
                    return false;
                }
                wave.mark_resolved(neighbor, step);
                pending.push(neighbor);
            }
        }
    }

    true
}

impl GridSolver for WfcSolver {
    fn register_tile(&mut self, descriptor: TileDescriptor) -> SolverResult<usize> {
        if self.names.contains(&descriptor.name) {
            return Err(SolverError::DuplicateTile {
                name: descriptor.name,
            });
        }
        self.names.push(descriptor.name.clone());
        self.tiles.push(descriptor);
        Ok(self.tiles.len() - 1)
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn run(&mut self, shape: GridShape, seeds: &[Seed], max_steps: usize) -> SolverResult<SolvedGrid> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(SolverError::InvalidShape { rows, cols });
        }
        if self.tiles.is_empty() {
            return Err(SolverError::NoTiles);
        }

        let resolved = self.resolve_seeds(shape, seeds)?;
        let adjacency = Adjacency::build(&self.tiles);
        let mut steps = 0;
        let mut attempts = 0;

        'attempt: loop {
            attempts += 1;
            let mut wave = self.seeded_wave(shape, &adjacency, seeds, &resolved)?;

            loop {
                let Some(cell) = self.lowest_entropy_cell(&wave) else {
                    debug!(rows, cols, steps, attempts, "wave collapsed");
                    let (grid, order) = wave.into_grids();
                    return Ok(SolvedGrid {
                        grid,
                        order,
                        steps,
                        attempts,
                    });
                };

                if steps >= max_steps {
                    debug!(max_steps, attempts, "step budget exhausted");
                    return Err(SolverError::StepBudgetExhausted { max_steps });
                }
                steps += 1;

                let tile = self.choose_tile(&wave, cell);
                wave.collapse(cell, tile);
                wave.mark_resolved(cell, steps);

                if !propagate(&mut wave, &adjacency, vec![cell], steps) {
                    debug!(attempt = attempts, steps, "contradiction, restarting");
                    continue 'attempt;
                }
            }
        }
    }
}
