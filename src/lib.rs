//! Tile Match Puzzle Solver Library
//!
//! Square tiles carry a letter on each edge, and the case of the letter is its
//! polarity. A puzzle is solved when every tile sits in the grid, rotated so
//! that each shared edge pairs a letter with its opposite-case twin.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod persistence;
pub mod puzzle;
pub mod solver;
pub mod tile;

pub use error::{PuzzleError, SolveError, TileError};
pub use geometry::Connection;
pub use grid::{all_match, Grid};
pub use puzzle::Puzzle;
pub use solver::{solve, solve_with_limit};
pub use tile::{Edge, Tile};
