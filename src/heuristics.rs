use crate::board::Board;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Goal-distance estimates the solver can order its frontiers by.
///
/// Both are admissible, so the search stays optimal with either one. Manhattan
/// dominates Hamming and expands far fewer nodes; Hamming is kept for comparison
/// (see the `heuristic_evaluator` binary).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of tiles out of place. See [`Board::hamming`].
    Hamming,
    /// Sum of per-tile grid distances to the goal cell. See [`Board::manhattan`].
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Every available heuristic, weakest first.
    pub const ALL: [Heuristic; 2] = [Heuristic::Hamming, Heuristic::Manhattan];

    /// Estimated number of moves from `board` to the goal.
    pub fn evaluate(&self, board: &Board) -> usize {
        match self {
            Heuristic::Hamming => board.hamming(),
            Heuristic::Manhattan => board.manhattan(),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Hamming => "hamming",
            Heuristic::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic '{0}', expected 'hamming' or 'manhattan'")]
pub struct UnknownHeuristic(pub String);

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hamming" => Ok(Heuristic::Hamming),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}
