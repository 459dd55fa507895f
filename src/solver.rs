//! Exhaustive backtracking solver.
//!
//! Cells are filled row-major. At each cell every available tile is tried in
//! all four orientations and kept only if it matches the neighbours already
//! placed to its left and above, so a full grid is consistent by construction.
//!
//! Tiles live in a fixed arena with an availability flag per slot instead of
//! being moved in and out of a pool. Discovery order is pinned: at each cell
//! the available tiles are tried cyclically, starting from the slot after the
//! tile placed at the previous cell, and orientations run 0 to 3.

use crate::error::SolveError;
use crate::geometry::{Connection, NUM_SIDES};
use crate::grid::{check_shape, Grid};
use crate::tile::Tile;

/// State of one search, owned so concurrent callers never share tiles.
struct Search {
    /// Tile arena; orientations are mutated in place while trying placements.
    tiles: Vec<Tile>,
    /// `available[i]` is true while `tiles[i]` is not on the grid.
    available: Vec<bool>,
    /// Number of `true` entries in `available`.
    remaining: usize,
    /// Working grid; cells past the cursor may hold stale trial placements.
    grid: Grid,
    solutions: Vec<Grid>,
    max_solutions: Option<usize>,
}

impl Search {
    fn new(tiles: &[Tile], rows: usize, cols: usize, max_solutions: Option<usize>) -> Self {
        Self {
            tiles: tiles.to_vec(),
            available: vec![true; tiles.len()],
            remaining: tiles.len(),
            grid: Grid::new(rows, cols),
            solutions: Vec::new(),
            max_solutions,
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.max_solutions
            .is_some_and(|limit| self.solutions.len() >= limit)
    }

    /// Whether `candidate` at `(row, col)` matches its placed left and top neighbours.
    #[inline]
    fn fits(&self, candidate: &Tile, row: usize, col: usize) -> bool {
        let left_ok = col == 0
            || self
                .grid
                .get(row, col - 1)
                .map_or(true, |left| candidate.is_matched(left, Connection::Left));
        let above_ok = row == 0
            || self
                .grid
                .get(row - 1, col)
                .map_or(true, |above| candidate.is_matched(above, Connection::Above));
        left_ok && above_ok
    }

    /// Fills `(row, col)` and everything after it.
    ///
    /// `start` is the arena slot to try first at this cell.
    fn find_all(&mut self, row: usize, col: usize, start: usize) {
        if self.is_done() {
            return;
        }

        if self.remaining == 0 {
            // the tile count equals the cell count, so the grid is full
            self.solutions.push(self.grid.clone());
            return;
        }

        if col == self.grid.cols() {
            self.find_all(row + 1, 0, start);
            return;
        }

        let tile_count = self.tiles.len();
        for offset in 0..tile_count {
            let index = (start + offset) % tile_count;
            if !self.available[index] {
                continue;
            }

            self.available[index] = false;
            self.remaining -= 1;
            let initial_orientation = self.tiles[index].orientation();

            for orientation in 0..NUM_SIDES {
                self.tiles[index].set_orientation(orientation);
                let candidate = self.tiles[index];
                if self.fits(&candidate, row, col) {
                    self.grid.set(row, col, candidate);
                    self.find_all(row, col + 1, index + 1);
                    if self.is_done() {
                        break;
                    }
                }
            }

            self.tiles[index].set_orientation(initial_orientation);
            self.available[index] = true;
            self.remaining += 1;

            if self.is_done() {
                return;
            }
        }
    }
}

/// Finds every arrangement of `tiles` in a `rows x cols` grid where all
/// shared edges match.
///
/// Solutions are returned in discovery order. An empty result means the
/// puzzle has no solution.
///
/// # Errors
///
/// Returns an error if the grid has no cells or the tile count differs from
/// the cell count.
pub fn solve(tiles: &[Tile], rows: usize, cols: usize) -> Result<Vec<Grid>, SolveError> {
    solve_with_limit(tiles, rows, cols, None)
}

/// Like [`solve`], but stops once `max_solutions` grids have been found.
///
/// The returned solutions are the first ones [`solve`] would report.
///
/// # Errors
///
/// Returns an error if the grid has no cells or the tile count differs from
/// the cell count.
pub fn solve_with_limit(
    tiles: &[Tile],
    rows: usize,
    cols: usize,
    max_solutions: Option<usize>,
) -> Result<Vec<Grid>, SolveError> {
    check_shape(tiles.len(), rows, cols)?;

    let mut search = Search::new(tiles, rows, cols, max_solutions);
    search.find_all(0, 0, 0);
    Ok(search.solutions)
}
