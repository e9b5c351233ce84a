use clap::Parser;
use sliding_puzzle_solver::board::Board;
use sliding_puzzle_solver::solver::Solver;
use sliding_puzzle_solver::utils::init_tracing;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play a scrambled sliding puzzle in the terminal", long_about = None)]
struct Args {
    /// Board dimension
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Random slides applied to the goal
    #[clap(short, long, default_value_t = 20)]
    steps: usize,

    /// Seed for the scramble; a fixed seed replays the same puzzle
    #[clap(long, default_value_t = 514514)]
    seed: u64,
}

fn main() -> io::Result<()> {
    init_tracing();
    let args = Args::parse();
    if args.dimension < 2 {
        eprintln!("Dimension must be at least 2");
        std::process::exit(2);
    }

    let mut board = Board::scrambled(args.dimension, args.steps, args.seed);
    let mut moves_made = 0;
    println!("Welcome to the sliding puzzle!");

    loop {
        println!("---------------------");
        println!("Moves: {}", moves_made);
        print!("{}", board);

        if board.is_goal() {
            println!("---------------------");
            println!("Solved in {} moves!", moves_made);
            println!("---------------------");
            break;
        }

        print!("Enter a tile to slide, 'h' for a hint, or 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // stdin closed
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "h" => {
                let solver = Solver::new(&board);
                match solver.solution().and_then(|path| path.get(1)) {
                    Some(next) => {
                        let (row, col) = board.blank_position();
                        println!(
                            "Hint: slide {} ({} moves remaining)",
                            next.tile_at(row, col),
                            solver.moves()
                        );
                    }
                    None => println!("No hint available."),
                }
            }
            token => match token.parse::<u32>() {
                Ok(tile) => match board.slide(tile) {
                    Some(next) => {
                        board = next;
                        moves_made += 1;
                    }
                    None => println!("Tile {} is not next to the blank.", tile),
                },
                Err(_) => println!("Invalid input. Enter a tile number, 'h', or 'q'."),
            },
        }
    }

    Ok(())
}
