//! Per-cell tile possibilities.

use super::GridShape;
use ndarray::Array2;

/// Which tiles are still possible in each cell, plus when each cell was
/// resolved.
pub(crate) struct Wave {
    shape: GridShape,
    tiles: usize,
    possible: Vec<bool>,
    counts: Vec<usize>,
    resolved_at: Vec<Option<usize>>,
}

impl Wave {
    /// A wave where every tile is possible everywhere.
    pub fn new(shape: GridShape, tiles: usize) -> Self {
        let cells = shape.0 * shape.1;
        Self {
            shape,
            tiles,
            possible: vec![true; cells * tiles],
            counts: vec![tiles; cells],
            resolved_at: vec![None; cells],
        }
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn cell(&self, (row, col): (usize, usize)) -> usize {
        row * self.shape.1 + col
    }

    #[inline]
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        (cell / self.shape.1, cell % self.shape.1)
    }

    #[inline]
    pub fn is_possible(&self, cell: usize, tile: usize) -> bool {
        self.possible[cell * self.tiles + tile]
    }

    #[inline]
    pub fn count(&self, cell: usize) -> usize {
        self.counts[cell]
    }

    pub fn possible_tiles(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.tiles).filter(move |&t| self.is_possible(cell, t))
    }

    /// Removes `tile` from `cell`. Returns whether anything changed.
    pub fn ban(&mut self, cell: usize, tile: usize) -> bool {
        let slot = &mut self.possible[cell * self.tiles + tile];
        if !*slot {
            return false;
        }
        *slot = false;
        self.counts[cell] -= 1;
        true
    }

    /// Bans every tile in `cell` except `tile`. Returns false if `tile` was
    /// already impossible there.
    pub fn collapse(&mut self, cell: usize, tile: usize) -> bool {
        if !self.is_possible(cell, tile) {
            return false;
        }
        for other in 0..self.tiles {
            if other != tile {
                self.ban(cell, other);
            }
        }
        true
    }

    /// Records `step` as the resolution step of `cell` if it just became
    /// single-valued.
    pub fn mark_resolved(&mut self, cell: usize, step: usize) {
        if self.counts[cell] == 1 && self.resolved_at[cell].is_none() {
            self.resolved_at[cell] = Some(step);
        }
    }

    /// Converts a fully collapsed wave into the tile grid and the order grid.
    pub fn into_grids(self) -> (Array2<usize>, Array2<usize>) {
        let grid = Array2::from_shape_fn(self.shape, |pos| {
            let cell = self.cell(pos);
            self.possible_tiles(cell).next().unwrap_or(0)
        });
        let order = Array2::from_shape_fn(self.shape, |pos| {
            self.resolved_at[self.cell(pos)].unwrap_or(0)
        });
        (grid, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wave_all_possible() {
        let wave = Wave::new((2, 3), 4);
        assert_eq!(wave.cells(), 6);
        assert_eq!(wave.count(5), 4);
        assert_eq!(wave.coords(5), (1, 2));
        assert_eq!(wave.cell((1, 2)), 5);
    }

    #[test]
    fn test_ban_is_idempotent() {
        let mut wave = Wave::new((1, 1), 3);
        assert!(wave.ban(0, 1));
        assert!(!wave.ban(0, 1));
        assert_eq!(wave.count(0), 2);
        assert_eq!(wave.possible_tiles(0).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_collapse_and_order() {
        let mut wave = Wave::new((1, 2), 3);
        assert!(wave.collapse(1, 2));
        wave.mark_resolved(1, 7);
        wave.mark_resolved(1, 9);
        assert!(wave.collapse(0, 0));
        let (grid, order) = wave.into_grids();
        assert_eq!(grid[[0, 1]], 2);
        assert_eq!(grid[[0, 0]], 0);
        assert_eq!(order[[0, 1]], 7);
        assert_eq!(order[[0, 0]], 0);
    }

    #[test]
    fn test_collapse_to_banned_tile_fails() {
        let mut wave = Wave::new((1, 1), 2);
        wave.ban(0, 0);
        assert!(!wave.collapse(0, 0));
    }
}
