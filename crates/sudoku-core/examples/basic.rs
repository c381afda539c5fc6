//! Basic example of using the Sudoku engine

use sudoku_core::{Board, Solver};

fn main() {
    // Parse a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Board::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    match Solver::new().solve(&puzzle) {
        Ok(solution) => {
            println!("Solution:");
            println!("{}", solution);
            println!("Compact: {}", solution.to_string_compact());
        }
        Err(err) => println!("No solution found: {}", err),
    }

    // A puzzle whose givens already conflict is rejected up front
    println!("\n--- Solving a contradictory puzzle ---\n");
    let broken = Board::from_string(
        "550070000600195000098000060800060003400803001700020006060000280000419005000080079",
    )
    .expect("valid puzzle string");
    if let Err(err) = Solver::new().solve(&broken) {
        println!("Rejected: {}", err);
    }
}
