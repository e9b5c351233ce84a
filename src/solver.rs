//! A* solver for the sliding puzzle.
//!
//! The solver runs two best-first searches in lockstep: one from the initial
//! board and one from its twin (the same board with one pair of adjacent tiles
//! swapped). Exactly one of the two is solvable, so exactly one search can reach
//! the goal; whichever gets there first decides solvability without computing the
//! permutation parity directly.
use crate::board::Board;
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Knobs for a single solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Goal-distance estimate added to the move count to order the frontiers.
    pub heuristic: Heuristic,
    /// Stop with [`Outcome::Undetermined`] once this many nodes (summed over both
    /// searches) have been expanded. `None` runs to completion.
    pub max_expansions: Option<u64>,
}

impl SolverConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The search from the initial board reached the goal.
    Solvable,
    /// The search from the twin board reached the goal.
    Unsolvable,
    /// The expansion budget ran out before either search reached the goal.
    Undetermined,
}

/// Counters collected over both searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Lockstep rounds, each popping one node per frontier.
    pub rounds: u64,
    /// Nodes popped and expanded (goal nodes are popped but not expanded).
    pub expanded: u64,
    /// Nodes pushed, including the two roots.
    pub enqueued: u64,
}

struct SearchNode {
    board: Board,
    moves: u32,
    priority: usize,
    previous: Option<Rc<SearchNode>>,
}

impl SearchNode {
    // Boards from the root to this node, inclusive.
    fn path(&self) -> Vec<Board> {
        let mut boards = vec![self.board.clone()];
        let mut current = self.previous.as_deref();
        while let Some(node) = current {
            boards.push(node.board.clone());
            current = node.previous.as_deref();
        }
        boards.reverse();
        boards
    }
}

// Heap entry. `BinaryHeap` is a max-heap, so the comparison is reversed: the
// lowest priority pops first, and among equal priorities the earliest pushed.
struct FrontierEntry {
    priority: usize,
    sequence: u64,
    node: Rc<SearchNode>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Priority-ordered open set of one search.
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    heuristic: Heuristic,
    next_sequence: u64,
}

impl Frontier {
    fn seeded(root: Board, heuristic: Heuristic) -> Self {
        let mut frontier = Frontier {
            heap: BinaryHeap::new(),
            heuristic,
            next_sequence: 0,
        };
        frontier.push(root, 0, None);
        frontier
    }

    fn push(&mut self, board: Board, moves: u32, previous: Option<Rc<SearchNode>>) {
        let priority = moves as usize + self.heuristic.evaluate(&board);
        let node = Rc::new(SearchNode {
            board,
            moves,
            priority,
            previous,
        });
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            node,
        });
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Pushes every neighbor of `node` except the board it was reached from.
    /// Returns the number of nodes pushed.
    fn expand(&mut self, node: &Rc<SearchNode>) -> u64 {
        let mut pushed = 0;
        for next in node.board.neighbors() {
            if let Some(previous) = &node.previous {
                if next == previous.board {
                    continue;
                }
            }
            self.push(next, node.moves + 1, Some(Rc::clone(node)));
            pushed += 1;
        }
        pushed
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// The result of solving one board.
///
/// All the work happens in the constructor; the accessors only read the result.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::board::Board;
/// use sliding_puzzle_solver::solver::Solver;
///
/// let board = Board::from_grid(vec![vec![0, 1], vec![3, 2]]).unwrap();
/// let solver = Solver::new(&board);
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), 2);
/// assert_eq!(solver.solution().unwrap().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    outcome: Outcome,
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` with the Manhattan heuristic and no expansion budget.
    pub fn new(initial: &Board) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    /// Solves `initial` using the given configuration.
    pub fn with_config(initial: &Board, config: SolverConfig) -> Self {
        let heuristic = config.heuristic;
        let mut stats = SearchStats::default();

        let mut primary = Frontier::seeded(initial.clone(), heuristic);
        stats.enqueued += 1;
        // A 1x1 board has no twin; it is always the goal, so the primary search
        // finishes in the first round.
        let mut twin = initial.twin().map(|board| {
            stats.enqueued += 1;
            Frontier::seeded(board, heuristic)
        });

        debug!(
            dimension = initial.dimension(),
            %heuristic,
            estimate = heuristic.evaluate(initial),
            "starting search"
        );

        let solver = loop {
            stats.rounds += 1;

            let Some(node) = primary.pop() else {
                // Only reachable if the primary frontier runs dry, which needs a
                // board with no neighbors that is not the goal.
                break Self::finish(Outcome::Unsolvable, None, stats);
            };
            if node.board.is_goal() {
                break Self::finish(Outcome::Solvable, Some(node.path()), stats);
            }

            let twin_node = twin.as_mut().and_then(Frontier::pop);
            if let Some(twin_node) = &twin_node {
                if twin_node.board.is_goal() {
                    break Self::finish(Outcome::Unsolvable, None, stats);
                }
            }

            if let Some(limit) = config.max_expansions {
                if stats.expanded >= limit {
                    warn!(
                        expanded = stats.expanded,
                        limit, "expansion budget exhausted before reaching a goal"
                    );
                    break Self::finish(Outcome::Undetermined, None, stats);
                }
            }

            trace!(
                round = stats.rounds,
                priority = node.priority,
                moves = node.moves,
                twin_priority = ?twin_node.as_ref().map(|n| n.priority),
                open = primary.len(),
                "expanding"
            );

            stats.enqueued += primary.expand(&node);
            stats.expanded += 1;
            if let (Some(frontier), Some(twin_node)) = (twin.as_mut(), twin_node) {
                stats.enqueued += frontier.expand(&twin_node);
                stats.expanded += 1;
            }
        };

        debug!(
            outcome = ?solver.outcome,
            moves = solver.moves(),
            rounds = solver.stats.rounds,
            expanded = solver.stats.expanded,
            enqueued = solver.stats.enqueued,
            "search finished"
        );
        solver
    }

    fn finish(outcome: Outcome, solution: Option<Vec<Board>>, stats: SearchStats) -> Self {
        Solver {
            outcome,
            solution,
            stats,
        }
    }

    /// Is the initial board solvable?
    ///
    /// `false` both for unsolvable boards and when the budget ran out; use
    /// [`Solver::outcome`] to tell the two apart.
    pub fn is_solvable(&self) -> bool {
        self.outcome == Outcome::Solvable
    }

    /// Minimum number of moves to solve the initial board, or -1 if it was not solved.
    pub fn moves(&self) -> i32 {
        match &self.solution {
            Some(boards) => boards.len() as i32 - 1,
            None => -1,
        }
    }

    /// The boards of a shortest solution, from the initial board to the goal
    /// inclusive, or `None` if the board was not solved.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
