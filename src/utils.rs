use crate::board::Board;
use crate::error::ParseError;
use crate::solver::{Outcome, Solver};
use std::fmt::Write;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr log subscriber used by the binaries.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so stdout only ever
/// carries program output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parses a board from its text form.
///
/// The input is a sequence of whitespace-separated integers: the dimension `n`
/// first, then the `n * n` tiles in row-major order with `0` for the blank.
/// Line breaks carry no meaning, so the usual one-row-per-line layout and a
/// single line of numbers are equally accepted.
///
/// # Returns
/// * `Ok(Board)` if the input holds exactly one valid board.
/// * `Err(ParseError)` if the dimension is missing, a token is not a
///   non-negative integer, there are too few or too many tiles, or the tiles
///   do not form a valid board.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("3\n 0 1 3\n 4 2 5\n 7 8 6\n").unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.manhattan(), 4);
///
/// assert!(board_from_str("2\n 1 2\n 3\n").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, ParseError> {
    let mut tokens = s.split_whitespace();

    let dimension = match tokens.next() {
        Some(token) => parse_number(token)? as usize,
        None => return Err(ParseError::MissingDimension),
    };

    let expected = dimension * dimension;
    let tiles = tokens
        .by_ref()
        .take(expected)
        .map(parse_number)
        .collect::<Result<Vec<u32>, ParseError>>()?;
    if tiles.len() != expected {
        return Err(ParseError::MissingTiles {
            expected,
            found: tiles.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(ParseError::TrailingInput { found: trailing });
    }

    Ok(Board::from_tiles(dimension, tiles)?)
}

fn parse_number(token: &str) -> Result<u32, ParseError> {
    token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Renders a solver result in the classic output format: either
/// `No solution possible`, or `Minimum number of moves = N` followed by every
/// board of the solution.
///
/// An undetermined result (budget exhausted) is reported on its own line.
pub fn format_solution(solver: &Solver) -> String {
    let mut output = String::new();
    match (solver.outcome(), solver.solution()) {
        (Outcome::Solvable, Some(boards)) => {
            let _ = writeln!(output, "Minimum number of moves = {}", solver.moves());
            for board in boards {
                let _ = writeln!(output, "{}", board);
            }
        }
        (Outcome::Undetermined, _) => {
            let _ = writeln!(
                output,
                "Search budget exhausted after {} expansions; solvability undetermined",
                solver.stats().expanded
            );
        }
        _ => {
            let _ = writeln!(output, "No solution possible");
        }
    }
    output
}
