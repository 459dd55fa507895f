//! Rectangular grids of placed tiles and whole-grid checks.
//!
//! Cells are stored row-major in a flat vector; `None` marks an empty cell.
//! A captured solution owns its tiles, so later mutation of the solver's
//! working grid never reaches it.

use rustc_hash::FxHashSet;

use crate::error::SolveError;
use crate::geometry::{Connection, GridRotation, NUM_SIDES};
use crate::tile::{Edge, Tile};

/// Oriented edges of every cell after a grid rotation, used to compare
/// solutions that differ only by turning the whole grid.
pub type GridKey = Vec<Option<[Edge; NUM_SIDES]>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Creates an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Fills a grid row-major from `tiles`, keeping each tile's orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no cells or `tiles` does not fill it
    /// exactly.
    pub fn from_tiles(rows: usize, cols: usize, tiles: Vec<Tile>) -> Result<Self, SolveError> {
        check_shape(tiles.len(), rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: tiles.into_iter().map(Some).collect(),
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    /// Places `tile` at `(row, col)`, replacing whatever was there.
    ///
    /// Out-of-bounds positions are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) {
        if self.in_bounds(row, col) {
            self.cells[row * self.cols + col] = Some(tile);
        }
    }

    /// Whether every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Placed tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// The oriented edges of every cell after turning the grid by `rotation`.
    fn rotated_key(&self, rotation: GridRotation) -> GridKey {
        let mut key = vec![None; self.cells.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let Some(tile) = self.get(row, col) else {
                    continue;
                };
                let mut turned = *tile;
                turned.set_orientation(tile.orientation() + rotation.quarter_turns);
                let (dest_row, dest_col) = rotation.apply(self.rows, self.cols, row, col);
                key[dest_row * self.cols + dest_col] = Some(turned.oriented_edges());
            }
        }
        key
    }

    /// The smallest key over every rotation that keeps the grid's shape.
    pub fn canonical_key(&self) -> GridKey {
        GridRotation::preserving(self.rows, self.cols)
            .into_iter()
            .map(|rotation| self.rotated_key(rotation))
            .min()
            .unwrap_or_default()
    }
}

/// Rejects grid shapes the tile set cannot fill exactly.
pub(crate) const fn check_shape(tiles: usize, rows: usize, cols: usize) -> Result<(), SolveError> {
    if rows == 0 || cols == 0 {
        return Err(SolveError::EmptyGrid { rows, cols });
    }
    if tiles != rows * cols {
        return Err(SolveError::TileCountMismatch { tiles, rows, cols });
    }
    Ok(())
}

/// Checks whether every pair of neighbouring cells matches.
///
/// Each adjacency is tested once, from the cell to its right and below
/// neighbours. An empty cell never matches.
pub fn all_match(grid: &Grid) -> bool {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(tile) = grid.get(row, col) else {
                return false;
            };

            if col + 1 < grid.cols() {
                match grid.get(row, col + 1) {
                    Some(right) if tile.is_matched(right, Connection::Right) => {}
                    _ => return false,
                }
            }

            if row + 1 < grid.rows() {
                match grid.get(row + 1, col) {
                    Some(below) if tile.is_matched(below, Connection::Below) => {}
                    _ => return false,
                }
            }
        }
    }
    true
}

/// Drops solutions that are a rotation of an earlier one, keeping discovery order.
pub fn distinct_solutions(solutions: &[Grid]) -> Vec<Grid> {
    let mut seen: FxHashSet<GridKey> = FxHashSet::default();
    solutions
        .iter()
        .filter(|grid| seen.insert(grid.canonical_key()))
        .cloned()
        .collect()
}

/// Formats a grid as rows of three-line tile drawings.
///
/// Empty cells show as '.'.
pub fn format_solution(grid: &Grid) -> String {
    let mut output = String::new();

    for row in 0..grid.rows() {
        let mut lines = [String::new(), String::new(), String::new()];
        for col in 0..grid.cols() {
            if col > 0 {
                for line in &mut lines {
                    line.push_str("  ");
                }
            }
            let [top, right, bottom, left] = grid.get(row, col).map_or(['.'; NUM_SIDES], |tile| {
                tile.oriented_edges().map(Edge::label)
            });
            lines[0].push_str(&format!("  {top}  "));
            lines[1].push_str(&format!("{left}   {right}"));
            lines[2].push_str(&format!("  {bottom}  "));
        }
        for line in lines {
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}
