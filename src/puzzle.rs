//! Puzzle definitions: a tile set plus the grid it has to fill.
//!
//! Puzzle files hold one tile definition per line. Blank lines and lines
//! starting with `#` are skipped.

use std::fs;
use std::path::Path;

use crate::error::{PuzzleError, SolveError};
use crate::grid::{check_shape, Grid};
use crate::solver;
use crate::tile::Tile;

/// Rows in the standard puzzle format.
pub const DEFAULT_ROWS: usize = 3;

/// Columns in the standard puzzle format.
pub const DEFAULT_COLS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Puzzle {
    /// # Errors
    ///
    /// Returns an error if `tiles` cannot exactly fill a `rows x cols` grid.
    pub fn new(tiles: Vec<Tile>, rows: usize, cols: usize) -> Result<Self, SolveError> {
        check_shape(tiles.len(), rows, cols)?;
        Ok(Self { tiles, rows, cols })
    }

    /// Parses a puzzle from file contents.
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed tile line or a tile count that does
    /// not fill the grid.
    pub fn parse(text: &str, rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        let tiles = parse_tiles(text)?;
        Ok(Self::new(tiles, rows, cols)?)
    }

    /// Reads and parses a puzzle file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path, rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, rows, cols)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Lays the tiles out row-major exactly as listed, orientations included.
    ///
    /// This is the board a player starts from before moving anything.
    pub fn as_grid(&self) -> Grid {
        let mut grid = Grid::new(self.rows, self.cols);
        for (index, tile) in self.tiles.iter().enumerate() {
            grid.set(index / self.cols, index % self.cols, *tile);
        }
        grid
    }

    /// Finds solutions for this puzzle, stopping early if `max_solutions` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles cannot fill the grid. Constructors
    /// already reject such shapes.
    pub fn solve(&self, max_solutions: Option<usize>) -> Result<Vec<Grid>, SolveError> {
        solver::solve_with_limit(&self.tiles, self.rows, self.cols, max_solutions)
    }
}

/// Parses tile definitions, one per line, skipping blanks and `#` comments.
///
/// Trailing whitespace, including a carriage return, is ignored.
///
/// # Errors
///
/// Returns the first malformed line with its 1-based line number.
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>, PuzzleError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, definition)| {
            definition
                .parse()
                .map_err(|source| PuzzleError::Tile { line, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TileError;
    use crate::grid::all_match;

    const RING: &str = "# 2x2 ring\nW A B X\nW X C a\n\nb D Y Z\r\nc Z Y d 1\n";

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let puzzle = Puzzle::parse(RING, 2, 2).unwrap();
        assert_eq!(puzzle.tiles().len(), 4);
        assert_eq!(puzzle.tiles()[3].to_string(), "c Z Y d 1");
        assert_eq!((puzzle.rows(), puzzle.cols()), (2, 2));
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = Puzzle::parse("A a B b\nA a B\n", 1, 2).unwrap_err();
        match err {
            PuzzleError::Tile { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, TileError::WrongLength { length: 5, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_tile_count() {
        let err = Puzzle::parse(RING, 3, 3).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Solve(SolveError::TileCountMismatch { tiles: 4, .. })
        ));
    }

    #[test]
    fn test_as_grid_keeps_listed_order() {
        let puzzle = Puzzle::parse(RING, 2, 2).unwrap();
        let grid = puzzle.as_grid();
        assert_eq!(grid.get(1, 1).unwrap().orientation(), 1);
        assert!(!all_match(&grid));
    }

    #[test]
    fn test_solve_and_limit() {
        let puzzle = Puzzle::parse(RING, 2, 2).unwrap();
        assert_eq!(puzzle.solve(None).unwrap().len(), 4);
        assert_eq!(puzzle.solve(Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_solve_surfaces_shape_error() {
        let puzzle = Puzzle {
            tiles: parse_tiles(RING).unwrap(),
            rows: 3,
            cols: 3,
        };
        assert_eq!(
            puzzle.solve(None),
            Err(SolveError::TileCountMismatch {
                tiles: 4,
                rows: 3,
                cols: 3
            })
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Puzzle::load(&dir.path().join("missing.txt"), 3, 3).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, RING).unwrap();
        assert_eq!(Puzzle::load(&path, 2, 2).unwrap(), Puzzle::parse(RING, 2, 2).unwrap());
    }
}
