//! Error types for tile parsing, puzzle loading and solving.

use std::path::PathBuf;

use thiserror::Error;

/// A tile definition string could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TileError {
    #[error("tile definition {definition:?} has length {length}, expected 7 or 9")]
    WrongLength { definition: String, length: usize },

    #[error("tile definition {definition:?} has non-alphabetic edge label {found:?} at position {position}")]
    InvalidLabel {
        definition: String,
        position: usize,
        found: char,
    },

    #[error("tile definition {definition:?} is missing a space at position {position}")]
    MissingSeparator { definition: String, position: usize },

    #[error("tile definition {definition:?} has orientation {found:?}, expected a digit 0-3")]
    InvalidOrientation { definition: String, found: char },
}

/// The solver was called with a shape it cannot fill.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("grid must have at least one cell, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{tiles} tiles cannot fill a {rows}x{cols} grid")]
    TileCountMismatch {
        tiles: usize,
        rows: usize,
        cols: usize,
    },
}

/// A puzzle or solutions file could not be read or written.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Tile { line: usize, source: TileError },

    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error(transparent)]
    Solve(#[from] SolveError),
}
