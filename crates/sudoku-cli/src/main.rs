use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use sudoku_core::{Board, Solver};

/// Solve 9x9 Sudoku puzzles
///
/// The puzzle is 81 cells in row-major order: digits 1-9 for givens, with
/// '.', '0', or '_' for empty cells. Whitespace is ignored, so both a single
/// line and a 9-line grid work. With no argument and no --file, the puzzle
/// is read from stdin.
#[derive(Parser)]
#[command(name = "sudoku", version, about = "Solve 9x9 Sudoku puzzles")]
struct Cli {
    /// Puzzle as 81 cells (digits 1-9; '.', '0', or '_' for empty)
    puzzle: Option<String>,

    /// Read the puzzle from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "puzzle")]
    file: Option<PathBuf>,

    /// Print the solution as a single 81-character line
    #[arg(long)]
    compact: bool,

    /// Print the solution as JSON
    #[arg(long, conflicts_with = "compact")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = read_input(&cli)?;
    let puzzle = Board::from_string(&input).ok_or_else(|| {
        anyhow!("expected 81 cells of digits 1-9 with '.', '0', or '_' for empty")
    })?;

    let solution = Solver::new().solve(&puzzle)?;

    if cli.json {
        println!("{}", serde_json::to_string(&solution)?);
    } else if cli.compact {
        println!("{}", solution.to_string_compact());
    } else {
        println!("Puzzle ({} givens):", puzzle.given_count());
        println!("{}", puzzle);
        println!("\nSolution:");
        println!("{}", solution);
    }

    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(puzzle) = &cli.puzzle {
        return Ok(puzzle.clone());
    }
    if let Some(path) = &cli.file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read puzzle from stdin")?;
    Ok(buffer)
}
