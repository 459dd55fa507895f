//! Tile Match Solver
//!
//! Loads a puzzle of nine (or any rows x cols) edge-labelled tiles, finds every
//! arrangement where all touching edges pair a letter with its opposite-case
//! twin, and prints or saves the solved grids.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use tilematch::grid::{all_match, distinct_solutions, format_solution, Grid};
use tilematch::persistence;
use tilematch::puzzle::{Puzzle, DEFAULT_COLS, DEFAULT_ROWS};

/// Solves edge-matching tile puzzles.
#[derive(Parser)]
#[command(name = "tilematch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Grid dimensions shared by every command that reads a puzzle file.
#[derive(Args, Clone, Copy)]
struct Shape {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Find every solution of a puzzle file.
    Solve {
        /// Puzzle file with one tile definition per line.
        puzzle: PathBuf,
        #[command(flatten)]
        shape: Shape,
        /// Stop after this many solutions.
        #[arg(long)]
        max: Option<usize>,
        /// Drop solutions that are a rotation of the whole board.
        #[arg(long)]
        distinct: bool,
        /// Write the solutions to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Draw each tile of a puzzle file in its listed orientation.
    Show {
        puzzle: PathBuf,
        #[command(flatten)]
        shape: Shape,
    },
    /// Check whether a grid file, read row-major, is already solved.
    Check {
        grid: PathBuf,
        #[command(flatten)]
        shape: Shape,
    },
    /// Show the number of solutions in a saved file.
    Count { solutions: PathBuf },
    /// Print the solutions in a saved file.
    Display { solutions: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            puzzle,
            shape,
            max,
            distinct,
            save,
        } => run_solve(&puzzle, shape, max, distinct, save.as_deref()),
        Command::Show { puzzle, shape } => run_show(&puzzle, shape),
        Command::Check { grid, shape } => run_check(&grid, shape),
        Command::Count { solutions } => run_count(&solutions),
        Command::Display { solutions } => run_display(&solutions),
    }
}

fn load_puzzle(path: &Path, shape: Shape) -> Result<Puzzle> {
    Puzzle::load(path, shape.rows, shape.cols)
        .with_context(|| format!("Failed to load puzzle {}", path.display()))
}

/// Formats solutions one after another, numbered from 1.
fn render_solutions(solutions: &[Grid]) -> String {
    let mut output = String::new();
    for (i, grid) in solutions.iter().enumerate() {
        output.push_str(&format!("Solution {}:\n", i + 1));
        output.push_str(&format_solution(grid));
        output.push('\n');
    }
    output
}

/// Solves the puzzle, prints the results, and optionally saves them.
fn run_solve(
    path: &Path,
    shape: Shape,
    max: Option<usize>,
    distinct: bool,
    save: Option<&Path>,
) -> Result<()> {
    let puzzle = load_puzzle(path, shape)?;
    println!("Beginning tiles:");
    print!("{}", format_solution(&puzzle.as_grid()));
    println!();

    let start = Instant::now();
    let mut solutions = puzzle
        .solve(max)
        .with_context(|| format!("Failed to solve {}", path.display()))?;
    let elapsed = start.elapsed();

    if distinct {
        solutions = distinct_solutions(&solutions);
    }

    println!("Time: {}ms", elapsed.as_millis());
    println!("Found {} solutions:\n", solutions.len());
    print!("{}", render_solutions(&solutions));

    if let Some(save_path) = save {
        persistence::save(save_path, &solutions)
            .with_context(|| format!("Failed to save solutions to {}", save_path.display()))?;
        println!("Wrote {}", save_path.display());
    }

    Ok(())
}

fn run_show(path: &Path, shape: Shape) -> Result<()> {
    let puzzle = load_puzzle(path, shape)?;
    for (i, tile) in puzzle.tiles().iter().enumerate() {
        println!("Tile {} ({tile}):", i + 1);
        println!("{}", tile.display_str());
    }
    Ok(())
}

fn run_check(path: &Path, shape: Shape) -> Result<()> {
    let grid = load_puzzle(path, shape)?.as_grid();
    print!("{}", format_solution(&grid));
    if all_match(&grid) {
        println!("All edges match.");
    } else {
        println!("Some edges do not match.");
    }
    Ok(())
}

fn run_count(path: &Path) -> Result<()> {
    let count = persistence::count(path)
        .with_context(|| format!("Failed to read {}. Run 'tilematch solve --save' first.", path.display()))?;
    println!("{count} solutions");
    Ok(())
}

fn run_display(path: &Path) -> Result<()> {
    let solutions = persistence::load_all(path)
        .with_context(|| format!("Failed to read {}. Run 'tilematch solve --save' first.", path.display()))?;
    println!("Loaded {} solutions\n", solutions.len());
    print!("{}", render_solutions(&solutions));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RING: &str = include_str!("../puzzles/ring-3x3.txt");
    const CLASSIC: &str = include_str!("../puzzles/classic-3x3.txt");

    #[test]
    fn test_ring_puzzle_solution_count() {
        let puzzle = Puzzle::parse(RING, 3, 3).unwrap();
        let solutions = puzzle.solve(None).unwrap();
        assert_eq!(solutions.len(), 4);
        assert!(solutions.iter().all(all_match));
        assert_eq!(distinct_solutions(&solutions).len(), 1);
    }

    #[test]
    fn test_classic_puzzle_solution_count() {
        let puzzle = Puzzle::parse(CLASSIC, 3, 3).unwrap();
        let solutions = puzzle.solve(None).unwrap();
        assert_eq!(solutions.len(), 12);
        assert!(solutions.iter().all(all_match));

        // the first three solutions are the distinct ones
        assert_eq!(distinct_solutions(&solutions), solutions[..3]);
    }

    #[test]
    fn test_classic_first_solution() {
        let puzzle = Puzzle::parse(CLASSIC, 3, 3).unwrap();
        let solutions = puzzle.solve(Some(1)).unwrap();
        let tiles: Vec<String> = solutions[0].tiles().map(ToString::to_string).collect();
        assert_eq!(
            tiles,
            [
                "b A c B 0", "B c d a 0", "b c a C 0", "C C C b 0", "D b c c 0", "A d d B 0",
                "c b c C 0", "C d D B 0", "D d d D 0",
            ]
        );
    }

    #[test]
    fn test_unsolved_start_board() {
        let puzzle = Puzzle::parse(CLASSIC, 3, 3).unwrap();
        assert!(!all_match(&puzzle.as_grid()));
    }

    #[test]
    fn test_render_solutions_numbers_each_grid() {
        let puzzle = Puzzle::parse(RING, 3, 3).unwrap();
        let solutions = puzzle.solve(Some(2)).unwrap();
        let output = render_solutions(&solutions);
        assert!(output.starts_with("Solution 1:\n"));
        assert!(output.contains("\nSolution 2:\n"));
        assert_eq!(output.lines().count(), 2 * (1 + 9 + 1));
    }
}
