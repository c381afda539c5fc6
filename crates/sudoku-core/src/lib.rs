//! Core Sudoku engine.
//!
//! [`Board`] holds the 9x9 grid of optional digits and answers the
//! constraint queries (rows, columns, boxes, candidates, validation).
//! [`Solver`] layers the solving algorithm on top: a naked-single
//! propagation pass iterated to a fixed point, then a validation-pruned
//! backtracking search over the remaining empty cells.
//!
//! The engine does no I/O. Parsing helpers ([`Board::from_string`]) and
//! rendering ([`Board::to_string_compact`], `Display`) exist so callers can
//! map their formats onto the grid, but solving itself is a pure
//! board-in/board-out call:
//!
//! ```
//! use sudoku_core::{Board, Solver};
//!
//! let puzzle = Board::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//! let solution = Solver::new().solve(&puzzle).unwrap();
//! assert!(solution.is_complete());
//! ```

mod board;
mod solver;

pub use board::{Board, DigitSet, DigitSetIter, Position, ValidationResult};
pub use solver::{SolveError, Solver, SolverConfig};
