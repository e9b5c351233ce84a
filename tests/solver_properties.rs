use proptest::prelude::*;
use sliding_puzzle_solver::{Board, Heuristic, Solver, SolverConfig};
use std::collections::{HashSet, VecDeque};

// Breadth-first distance to the goal, or `None` if the goal is unreachable.
// Only used on boards whose reachable component is small or whose distance is short.
fn bfs_distance(start: &Board) -> Option<usize> {
    let goal = Board::goal(start.dimension());
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);
    while let Some((board, distance)) = queue.pop_front() {
        if board == goal {
            return Some(distance);
        }
        for next in board.neighbors() {
            if seen.insert(next.clone()) {
                queue.push_back((next, distance + 1));
            }
        }
    }
    None
}

fn permutation(dimension: usize) -> impl Strategy<Value = Board> {
    Just((0..(dimension * dimension) as u32).collect::<Vec<u32>>())
        .prop_shuffle()
        .prop_map(move |tiles| Board::from_tiles(dimension, tiles).unwrap())
}

fn scrambled(dimension: usize, max_steps: usize) -> impl Strategy<Value = Board> {
    (any::<u64>(), 0..=max_steps).prop_map(move |(seed, steps)| Board::scrambled(dimension, steps, seed))
}

fn assert_valid_solution(start: &Board, solver: &Solver) {
    let path = solver.solution().expect("solvable board has a solution");
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(&Board::goal(start.dimension())));
    assert_eq!(path.len() as i32 - 1, solver.moves());
    for pair in path.windows(2) {
        assert!(pair[0].neighbors().any(|next| next == pair[1]));
    }
}

proptest! {
    #[test]
    fn goal_checks_agree(board in permutation(3)) {
        prop_assert_eq!(board.is_goal(), board.hamming() == 0);
        prop_assert_eq!(board.is_goal(), board.manhattan() == 0);
        prop_assert!(board.hamming() <= board.manhattan());
    }

    #[test]
    fn equality_depends_only_on_tiles(board in permutation(4)) {
        let rebuilt = Board::from_tiles(4, board.tiles().to_vec()).unwrap();
        prop_assert_eq!(&board, &board);
        prop_assert_eq!(&board, &rebuilt);
        prop_assert_eq!(&rebuilt, &board);
        let twin = board.twin().unwrap();
        prop_assert_ne!(&twin, &board);
        prop_assert_eq!(twin.twin().unwrap(), board);
    }

    #[test]
    fn neighbors_are_one_slide_away(board in permutation(4)) {
        let (row, col) = board.blank_position();
        for next in board.neighbors() {
            let (next_row, next_col) = next.blank_position();
            prop_assert_eq!(row.abs_diff(next_row) + col.abs_diff(next_col), 1);
            prop_assert_eq!(next.tile_at(row, col), board.tile_at(next_row, next_col));
            prop_assert_eq!(next.manhattan().abs_diff(board.manhattan()), 1);
        }
    }

    #[test]
    fn exactly_one_of_board_and_twin_is_solvable_2x2(board in permutation(2)) {
        let twin = board.twin().unwrap();
        let original = Solver::new(&board);
        let swapped = Solver::new(&twin);
        prop_assert_ne!(original.is_solvable(), swapped.is_solvable());
    }

    #[test]
    fn optimal_on_2x2(board in permutation(2)) {
        let solver = Solver::new(&board);
        match bfs_distance(&board) {
            Some(distance) => {
                prop_assert_eq!(solver.moves(), distance as i32);
                assert_valid_solution(&board, &solver);
            }
            None => {
                prop_assert!(!solver.is_solvable());
                prop_assert_eq!(solver.moves(), -1);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn optimal_on_short_3x3(board in scrambled(3, 18)) {
        let solver = Solver::new(&board);
        let distance = bfs_distance(&board).expect("scrambled boards are solvable");
        prop_assert_eq!(solver.moves(), distance as i32);
        assert_valid_solution(&board, &solver);
    }

    #[test]
    fn hamming_is_also_optimal(board in scrambled(3, 12)) {
        let config = SolverConfig::default().with_heuristic(Heuristic::Hamming);
        let hamming = Solver::with_config(&board, config);
        let manhattan = Solver::new(&board);
        prop_assert_eq!(hamming.moves(), manhattan.moves());
    }

    #[test]
    fn twin_of_solvable_3x3_is_unsolvable(board in scrambled(3, 20)) {
        let twin = board.twin().unwrap();
        let solver = Solver::new(&twin);
        prop_assert!(!solver.is_solvable());
        prop_assert_eq!(solver.moves(), -1);
        prop_assert!(solver.solution().is_none());
    }

    // One-step-back pruning still lets the search revisit longer cycles, so larger
    // boards get slower, never wrong. Keep these walks short.
    #[test]
    fn solves_short_4x4(board in scrambled(4, 14)) {
        let solver = Solver::new(&board);
        prop_assert!(solver.is_solvable());
        assert_valid_solution(&board, &solver);
    }
}
