//! # Sliding Puzzle Solver Library
//!
//! This library provides an immutable board model for the n×n sliding puzzle
//! (the 8-puzzle, 15-puzzle and their larger siblings) and an A* solver that
//! finds a shortest solution or proves that none exists.
//!
//! It is used by three binaries:
//! - `solver`: reads a board from a file or stdin and prints a shortest solution.
//! - `heuristic_evaluator`: solves seeded random boards with every heuristic and
//!   compares how much work each one takes.
//! - `human_player`: lets a person play a scrambled board in the terminal, with hints.
//!
//! ## Modules
//! - `board`: the `Board` type with its heuristics, neighbors and twin.
//! - `solver`: the dual A* search (`Solver`, `SolverConfig`, `Outcome`).
//! - `heuristics`: the selectable priority functions.
//! - `error`: error types for board construction and parsing.
//! - `utils`: parsing the text input format and rendering solver output.

pub mod board;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

pub use board::Board;
pub use error::{BoardError, ParseError};
pub use heuristics::Heuristic;
pub use solver::{Outcome, SearchStats, Solver, SolverConfig};
