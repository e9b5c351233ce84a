use clap::Parser;
use sliding_puzzle_solver::heuristics::Heuristic;
use sliding_puzzle_solver::solver::{Outcome, Solver, SolverConfig};
use sliding_puzzle_solver::utils::{board_from_str, format_solution, init_tracing};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a shortest solution to an n×n sliding puzzle", long_about = None)]
struct Args {
    /// Priority function used to order the search
    #[clap(long, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Give up after expanding this many nodes
    #[clap(long)]
    max_expansions: Option<u64>,

    /// Path to the board file (dimension, then the tiles); reads stdin if omitted
    board_file: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(content)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let board = match read_input(args.board_file.as_ref())
        .and_then(|content| board_from_str(&content).map_err(|e| format!("Invalid board: {}", e)))
    {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let mut config = SolverConfig::default().with_heuristic(args.heuristic);
    config.max_expansions = args.max_expansions;

    let solver = Solver::with_config(&board, config);
    print!("{}", format_solution(&solver));

    if solver.outcome() == Outcome::Undetermined {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
