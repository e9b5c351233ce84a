//! Board representation for the n×n sliding puzzle.
//!
//! A `Board` is an immutable arrangement of the tiles `1..n*n` plus one blank
//! (stored as `0`) on an n×n grid. Every operation that "moves" a tile returns a
//! new `Board`; an existing board is never modified after construction.
//!
//! The tiles live in a flat row-major buffer and the dimension doubles as the
//! stride, so cell `(row, col)` is `tiles[row * dimension + col]`.
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// The value used for the blank cell.
pub const BLANK: u32 = 0;

// Row/column deltas of the cells orthogonally adjacent to the blank.
static OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// An immutable n×n sliding puzzle configuration.
///
/// Equality and hashing are structural: two boards are equal iff they have the
/// same dimension and the same tile in every cell.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::board::Board;
///
/// let board = Board::from_grid(vec![vec![1, 2], vec![0, 3]]).unwrap();
/// assert_eq!(board.dimension(), 2);
/// assert_eq!(board.hamming(), 1);
/// assert_eq!(board.manhattan(), 1);
/// assert!(!board.is_goal());
/// assert!(board.neighbors().any(|next| next.is_goal()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Box<[u32]>,
    // Index of the blank in `tiles`; derived from `tiles`, so it never breaks equality.
    blank: usize,
}

impl Board {
    /// Builds a board from a grid of rows.
    ///
    /// # Arguments
    /// * `grid`: the rows of the board, top to bottom. Must be square and hold each
    ///   value of `0..n*n` exactly once.
    ///
    /// # Returns
    /// * `Ok(Board)` for a valid grid.
    /// * `Err(BoardError)` if the grid is empty, not square, or not a permutation
    ///   of `0..n*n`.
    pub fn from_grid(grid: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let dimension = grid.len();
        if dimension == 0 {
            return Err(BoardError::Empty);
        }

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in grid.into_iter().enumerate() {
            if cells.len() != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    expected: dimension,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from a flat, row-major tile buffer.
    ///
    /// Same validation as [`Board::from_grid`], plus a check that the buffer holds
    /// exactly `dimension * dimension` tiles.
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::Empty);
        }

        let expected = dimension * dimension;
        if tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                found: tiles.len(),
            });
        }

        let max = (expected - 1) as u32;
        let mut seen = vec![false; expected];
        let mut blank = 0;
        for (index, &tile) in tiles.iter().enumerate() {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if seen[tile as usize] {
                return Err(BoardError::DuplicateTile { tile });
            }
            seen[tile as usize] = true;
            if tile == BLANK {
                blank = index;
            }
        }
        // n*n distinct values drawn from 0..n*n: the blank is guaranteed to be present.

        Ok(Board {
            dimension,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// Returns the goal board of the given dimension: tiles `1..n*n` in row-major
    /// order followed by the blank in the bottom-right corner.
    ///
    /// # Panics
    /// Panics if `dimension` is 0.
    pub fn goal(dimension: usize) -> Self {
        assert!(dimension > 0, "a board needs at least one cell");
        let len = dimension * dimension;
        let tiles: Vec<u32> = (0..len).map(|index| goal_tile(index, len)).collect();
        Board {
            dimension,
            tiles: tiles.into_boxed_slice(),
            blank: len - 1,
        }
    }

    /// Returns a solvable board reached from the goal by `steps` random slides.
    ///
    /// The walk never immediately undoes its previous slide. The same
    /// `(dimension, steps, seed)` always produces the same board, which makes this
    /// suitable for reproducible benchmarks and tests.
    ///
    /// # Panics
    /// Panics if `dimension` is 0.
    pub fn scrambled(dimension: usize, steps: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(dimension);
        let mut previous_blank = None;

        for _ in 0..steps {
            let candidates: Vec<usize> = board
                .cells_adjacent_to_blank()
                .filter(|&index| Some(index) != previous_blank)
                .collect();
            let Some(&target) = candidates.choose(&mut rng) else {
                break; // 1x1 board: nothing can move
            };
            previous_blank = Some(board.blank);
            board = board.with_swapped(board.blank, target);
        }

        board
    }

    /// Board dimension `n`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The tiles in row-major order, `0` marking the blank.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Returns the tile at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below `dimension()`.
    pub fn tile_at(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.dimension && col < self.dimension);
        self.tiles[row * self.dimension + col]
    }

    /// The (row, column) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Number of tiles out of place. The blank is never counted.
    pub fn hamming(&self) -> usize {
        let len = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != BLANK && tile != goal_tile(index, len))
            .count()
    }

    /// Sum of the row and column distances of every tile from its goal cell.
    ///
    /// Admissible and consistent: it never overestimates the remaining moves and
    /// changes by exactly one per slide.
    pub fn manhattan(&self) -> usize {
        let n = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let target = tile as usize - 1;
                (index / n).abs_diff(target / n) + (index % n).abs_diff(target % n)
            })
            .sum()
    }

    /// Is this the goal board?
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Returns the board with the first horizontally adjacent pair of non-blank
    /// tiles swapped, scanning rows top to bottom and columns left to right.
    ///
    /// Exactly one of a board and its twin is solvable. Returns `None` only for
    /// a 1×1 board, which has no such pair.
    pub fn twin(&self) -> Option<Board> {
        let n = self.dimension;
        (0..n)
            .flat_map(|row| (0..n.saturating_sub(1)).map(move |col| row * n + col))
            .find(|&index| self.tiles[index] != BLANK && self.tiles[index + 1] != BLANK)
            .map(|index| self.with_swapped(index, index + 1))
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// Yields between two and four boards for `n >= 2`, none for `n == 1`. The
    /// order is not part of the contract.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        self.cells_adjacent_to_blank()
            .map(move |index| self.with_swapped(self.blank, index))
    }

    /// Slides `tile` into the blank.
    ///
    /// # Returns
    /// * `Some(Board)` with the tile moved, if it is orthogonally adjacent to the blank.
    /// * `None` if the tile is the blank, does not exist, or is not adjacent.
    pub fn slide(&self, tile: u32) -> Option<Board> {
        if tile == BLANK {
            return None;
        }
        let position = self.tiles.iter().position(|&t| t == tile)?;
        self.cells_adjacent_to_blank()
            .find(|&index| index == position)
            .map(|index| self.with_swapped(self.blank, index))
    }

    fn cells_adjacent_to_blank(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.dimension;
        let (row, col) = self.blank_position();
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < n && c < n).then_some(r * n + c)
        })
    }

    // Copies the tiles and swaps two cells in the copy.
    fn with_swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Board {
            dimension: self.dimension,
            tiles,
            blank,
        }
    }
}

// Tile the goal board holds at `index` of a `len`-cell buffer.
fn goal_tile(index: usize, len: usize) -> u32 {
    if index + 1 == len {
        BLANK
    } else {
        (index + 1) as u32
    }
}

impl fmt::Display for Board {
    /// The dimension on the first line, then one line per row with each tile
    /// right-aligned in two columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension) {
            for tile in row {
                write!(f, "{:2} ", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
