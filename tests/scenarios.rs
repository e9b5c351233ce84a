use sliding_puzzle_solver::utils::{board_from_str, format_solution};
use sliding_puzzle_solver::{Board, Outcome, Solver};

fn solve(input: &str) -> (Board, Solver) {
    let board = board_from_str(input).unwrap();
    let solver = Solver::new(&board);
    (board, solver)
}

#[test]
fn goal_2x2_needs_no_moves() {
    let (board, solver) = solve("2\n 1 2\n 3 0\n");
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 0);
    assert_eq!(solver.solution(), Some(&[board][..]));
}

#[test]
fn blank_top_left_2x2() {
    let (board, solver) = solve("2\n 0 1\n 3 2\n");
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 2);
    let path = solver.solution().unwrap();
    assert_eq!(path[0], board);
    assert_eq!(path[1], board_from_str("2\n 1 0\n 3 2\n").unwrap());
    assert_eq!(path[2], Board::goal(2));
}

#[test]
fn classic_3x3() {
    let (board, solver) = solve("3\n 8 1 3\n 4 0 2\n 7 6 5\n");
    assert_eq!(solver.outcome(), Outcome::Solvable);
    assert_eq!(solver.moves(), 14);
    let path = solver.solution().unwrap();
    assert_eq!(path.first(), Some(&board));
    assert_eq!(path.last(), Some(&board_from_str("3 1 2 3 4 5 6 7 8 0").unwrap()));

    let output = format_solution(&solver);
    assert!(output.starts_with("Minimum number of moves = 14\n3\n 8  1  3 \n"));
    assert!(output.ends_with("3\n 1  2  3 \n 4  5  6 \n 7  8  0 \n\n"));
}

#[test]
fn swapped_top_row_3x3_is_unsolvable() {
    let (_, solver) = solve("3\n 2 1 3\n 4 5 6\n 7 8 0\n");
    assert_eq!(solver.outcome(), Outcome::Unsolvable);
    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), -1);
    assert!(solver.solution().is_none());
    assert_eq!(format_solution(&solver), "No solution possible\n");
}

#[test]
fn single_cell_board() {
    let (_, solver) = solve("1\n0\n");
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), 0);
}

#[test]
fn solution_is_restartable() {
    let (_, solver) = solve("3\n 0 1 3\n 4 2 5\n 7 8 6\n");
    let first: Vec<Board> = solver.solution().unwrap().to_vec();
    let second: Vec<Board> = solver.solution().unwrap().iter().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(solver.moves(), 4);
}

#[test]
fn malformed_input_is_rejected() {
    for input in ["", "2\n1 2\n3", "2\n1 2\n3 3", "2\n1 2\n3 4", "2\n1 2\n3 0 5", "two"] {
        assert!(board_from_str(input).is_err(), "{input:?} should be rejected");
    }
}
