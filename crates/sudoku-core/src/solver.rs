use crate::{Board, Position};
use std::fmt;

/// Why a solve attempt produced no solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The given cells already conflict within a row, column, or box
    InvalidPuzzle,
    /// No assignment of the remaining cells satisfies every constraint
    Unsolvable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidPuzzle => write!(f, "puzzle givens are contradictory"),
            SolveError::Unsolvable => write!(f, "puzzle has no solution"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Validate the initial board and reject contradictory givens before
    /// solving starts, so a malformed puzzle is reported as
    /// [`SolveError::InvalidPuzzle`] rather than searched to exhaustion
    pub check_givens: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { check_givens: true }
    }
}

/// Sudoku solver: a naked-single propagation pass plus backtracking search
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver with default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with custom configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve the puzzle, returning the completed board.
    ///
    /// The input board is copied and never mutated. Propagation runs first;
    /// if it fills the whole grid the search is skipped entirely.
    pub fn solve(&self, board: &Board) -> Result<Board, SolveError> {
        let mut working = board.clone();

        if self.config.check_givens && !working.validate().is_valid {
            return Err(SolveError::InvalidPuzzle);
        }

        self.propagate(&mut working);
        if working.is_complete() {
            return Ok(working);
        }

        // The set of empty cells is fixed for the whole search: the search
        // only ever rewrites cells from this snapshot, so it stays correct
        // while values inside it change.
        let order = working.empty_positions();
        if self.search(&mut working, &order, 0) {
            Ok(working)
        } else {
            Err(SolveError::Unsolvable)
        }
    }

    /// Commit every naked single until a full pass changes nothing.
    ///
    /// A cell whose candidate set has exactly one member is written
    /// immediately; each write can create new singles for later passes.
    /// Terminates because every write reduces the empty count, bounded by 81.
    /// Only certainties are committed, so nothing here ever backtracks.
    /// Behavior on an already contradictory board is unspecified; callers
    /// validate first, which [`Solver::solve`] does by default.
    ///
    /// Returns whether anything was written.
    pub fn propagate(&self, board: &mut Board) -> bool {
        let mut applied = false;
        let mut changed = true;
        while changed {
            changed = false;
            for pos in board.empty_positions() {
                if let Some(value) = board.candidates(pos).single_value() {
                    board.set(pos, Some(value));
                    changed = true;
                    applied = true;
                }
            }
        }
        applied
    }

    // ==================== Backtracking Search ====================

    /// Depth-first search over the snapshot of empty cells.
    ///
    /// `cursor` indexes into `order`; one call frame per cell, so the
    /// recursion is bounded at 81 frames. Candidates are tried in ascending
    /// order, which makes the first solution found reproducible. Each write
    /// is checked with a full-grid validate before recursing; a frame that
    /// exhausts its candidates resets its cell to empty, rolling the board
    /// back cell by cell as the recursion unwinds.
    fn search(&self, board: &mut Board, order: &[Position], cursor: usize) -> bool {
        if cursor == order.len() {
            return true;
        }
        let pos = order[cursor];

        for value in board.candidates(pos).iter() {
            board.set(pos, Some(value));
            if board.validate().is_valid && self.search(board, order, cursor + 1) {
                return true;
            }
        }

        board.set(pos, None);
        false
    }
}
