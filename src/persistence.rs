//! File I/O for saving and loading solved grids.
//!
//! Text format:
//! ```text
//! Found 2 solutions:
//!
//! Solution 1 (2x2):
//! W A B X 0
//! W X C a 0
//! b D Y Z 0
//! c Z Y d 0
//!
//! Solution 2 (2x2):
//! ...
//! ```
//! Each solution lists its tiles row-major with their orientation, so a
//! single block is also a valid puzzle file.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::PuzzleError;
use crate::grid::Grid;
use crate::tile::Tile;

/// Renders solutions in the saved text format.
pub fn format_solutions(solutions: &[Grid]) -> String {
    let mut output = format!("Found {} solutions:\n", solutions.len());
    for (i, grid) in solutions.iter().enumerate() {
        output.push_str(&format!(
            "\nSolution {} ({}x{}):\n",
            i + 1,
            grid.rows(),
            grid.cols()
        ));
        for tile in grid.tiles() {
            output.push_str(&tile.to_string());
            output.push('\n');
        }
    }
    output
}

/// Saves solutions to `path` in the text format.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(path: &Path, solutions: &[Grid]) -> Result<(), PuzzleError> {
    fs::write(path, format_solutions(solutions)).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses the header count from a `Found N solutions:` line.
fn parse_count(line: &str) -> Option<usize> {
    line.strip_prefix("Found ")?
        .strip_suffix(" solutions:")?
        .parse()
        .ok()
}

/// Parses the `(rows, cols)` from a `Solution i (RxC):` line.
fn parse_solution_header(line: &str) -> Option<(usize, usize)> {
    let shape = line
        .strip_prefix("Solution ")?
        .split_once(" (")?
        .1
        .strip_suffix("):")?;
    let (rows, cols) = shape.split_once('x')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

fn format_error(line: usize, reason: impl Into<String>) -> PuzzleError {
    PuzzleError::Format {
        line,
        reason: reason.into(),
    }
}

/// Parses every solution from saved text.
///
/// # Errors
///
/// Returns an error on a malformed header, tile line, or a count that does
/// not match the header.
pub fn parse_solutions(text: &str) -> Result<Vec<Grid>, PuzzleError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let (header_line, header) = *lines
        .first()
        .ok_or_else(|| format_error(1, "missing solution count"))?;
    let expected =
        parse_count(header).ok_or_else(|| format_error(header_line, "expected 'Found N solutions:'"))?;

    let mut solutions = Vec::new();
    let mut cursor = 1;
    while let Some(&(line_number, line)) = lines.get(cursor) {
        cursor += 1;
        let (rows, cols) = parse_solution_header(line).ok_or_else(|| {
            format_error(line_number, "expected 'Solution N (RxC):'")
        })?;

        let cells = rows
            .checked_mul(cols)
            .ok_or_else(|| format_error(line_number, format!("grid {rows}x{cols} is too large")))?;
        if cells == 0 {
            return Err(format_error(line_number, format!("grid {rows}x{cols} has no cells")));
        }
        // each cell takes one line
        if cells > lines.len() - cursor {
            return Err(format_error(line_number, "solution ends before its grid is full"));
        }
        let tile_lines = &lines[cursor..cursor + cells];
        cursor += cells;

        let tiles = tile_lines
            .iter()
            .map(|&(tile_line, definition)| {
                definition.parse::<Tile>().map_err(|source| PuzzleError::Tile {
                    line: tile_line,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        solutions.push(Grid::from_tiles(rows, cols, tiles)?);
    }

    if solutions.len() != expected {
        return Err(format_error(
            header_line,
            format!("header says {expected} solutions, found {}", solutions.len()),
        ));
    }

    Ok(solutions)
}

/// Loads all solutions saved at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_all(path: &Path) -> Result<Vec<Grid>, PuzzleError> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_solutions(&text)
}

/// Returns the number of saved solutions without loading them all.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its header is malformed.
pub fn count(path: &Path) -> Result<usize, PuzzleError> {
    let io_error = |source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_error)?;
        let header = line.trim_end();
        if header.is_empty() {
            continue;
        }
        return parse_count(header)
            .ok_or_else(|| format_error(index + 1, "expected 'Found N solutions:'"));
    }
    Err(format_error(1, "missing solution count"))
}
