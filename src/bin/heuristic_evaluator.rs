use clap::Parser;
use sliding_puzzle_solver::board::Board;
use sliding_puzzle_solver::heuristics::Heuristic;
use sliding_puzzle_solver::solver::{Outcome, Solver, SolverConfig};
use sliding_puzzle_solver::utils::init_tracing;
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compares solver heuristics on seeded random boards", long_about = None)]
struct Args {
    /// Board dimension
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Random slides applied to the goal to build each board
    #[clap(short, long, default_value_t = 30)]
    steps: usize,

    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Per-solve expansion budget
    #[clap(long, default_value_t = 2_000_000)]
    max_expansions: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    if args.dimension == 0 {
        eprintln!("Dimension must be at least 1");
        std::process::exit(2);
    }

    let mut all_expansions: HashMap<Heuristic, Vec<u64>> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards ({}x{}, {} slides)...",
        args.boards, args.dimension, args.dimension, args.steps
    );

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx;
        let initial_board = Board::scrambled(args.dimension, args.steps, current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        for heuristic in Heuristic::ALL {
            let config = SolverConfig::default()
                .with_heuristic(heuristic)
                .with_max_expansions(args.max_expansions);
            let solver = Solver::with_config(&initial_board, config);
            let stats = solver.stats();

            match solver.outcome() {
                Outcome::Solvable => {
                    println!(
                        "  Heuristic: {:<10}, Moves: {:<4}, Expanded: {:<9}, Enqueued: {}",
                        heuristic,
                        solver.moves(),
                        stats.expanded,
                        stats.enqueued
                    );
                    all_expansions.entry(heuristic).or_default().push(stats.expanded);
                }
                Outcome::Undetermined => {
                    println!(
                        "  Heuristic: {:<10}, gave up after {} expansions",
                        heuristic, stats.expanded
                    );
                }
                Outcome::Unsolvable => {
                    // Scrambling from the goal always yields a solvable board.
                    eprintln!(
                        "Error: board {} (Seed: {}) reported unsolvable with {}:\n{}",
                        board_idx, current_seed, heuristic, initial_board
                    );
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("\n--- Average Expansions ---");

    for heuristic in Heuristic::ALL {
        match all_expansions.get(&heuristic) {
            Some(expansions) if !expansions.is_empty() => {
                let total: u64 = expansions.iter().sum();
                let average = total as f64 / expansions.len() as f64;
                println!(
                    "Heuristic {:<10}: Average Expansions = {:.2} over {} solved boards",
                    heuristic,
                    average,
                    expansions.len()
                );
            }
            _ => println!("Heuristic {}: No boards solved.", heuristic),
        }
    }
}
