use crate::puzzle::{BoardError, Move};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;
use strum::IntoEnumIterator;

pub type Tile = u8;

/// The tile value of the empty cell.
pub const BLANK: Tile = 0;

/// Largest number of cells a board may have, so that every tile fits a
/// [`Tile`].
pub const MAX_CELLS: usize = Tile::MAX as usize + 1;

/// Boards up to 4x4 keep their cells inline.
const INLINE_CELLS: usize = 16;

/// A sliding-tile board of `rows` x `cols` cells holding the distinct tiles
/// `0..rows * cols`, with [`BLANK`] as the empty cell. Boards are immutable
/// values: sliding a tile produces a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Tiles in row-major order
    cells: SmallVec<[Tile; INLINE_CELLS]>,
    /// Index of the blank in `cells`
    blank: usize,
}

impl Board {
    /// Build a board from its rows.
    pub fn new<R: AsRef<[Tile]>>(grid: &[R]) -> Result<Board, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, tiles) in grid.iter().enumerate() {
            let tiles = tiles.as_ref();
            if tiles.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: tiles.len(),
                });
            }
            cells.extend_from_slice(tiles);
        }
        Self::from_cells(rows, cols, &cells)
    }

    /// Build a board from its tiles in row-major order.
    pub fn from_cells(rows: usize, cols: usize, cells: &[Tile]) -> Result<Board, BoardError> {
        let num_cells = Self::check_dimensions(rows, cols)?;
        if cells.len() != num_cells {
            return Err(BoardError::RaggedRow {
                row: cells.len() / cols,
                expected: cols,
                found: cells.len() % cols,
            });
        }

        let blank = cells
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or(BoardError::MissingBlank)?;
        let mut seen = vec![false; num_cells];
        for &tile in cells {
            let index = usize::from(tile);
            if index >= num_cells {
                return Err(BoardError::TileOutOfRange {
                    tile: index,
                    cells: num_cells,
                });
            }
            if seen[index] {
                return Err(BoardError::DuplicateTile { tile: index });
            }
            seen[index] = true;
        }

        Ok(Board {
            rows,
            cols,
            cells: SmallVec::from_slice(cells),
            blank,
        })
    }

    /// Number of cells of a `rows` x `cols` board, if it may exist.
    fn check_dimensions(rows: usize, cols: usize) -> Result<usize, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::Empty);
        }
        rows.checked_mul(cols)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or(BoardError::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            })
    }

    /// The solved board: tiles in ascending order, blank in the last cell.
    pub fn goal(rows: usize, cols: usize) -> Result<Board, BoardError> {
        let num_cells = Self::check_dimensions(rows, cols)?;
        let mut cells: SmallVec<[Tile; INLINE_CELLS]> =
            (1..num_cells).map(|tile| tile as Tile).collect();
        cells.push(BLANK);
        Ok(Board {
            rows,
            cols,
            blank: num_cells - 1,
            cells,
        })
    }

    /// The solved board with the same dimensions as this one.
    pub fn solved(&self) -> Board {
        let mut cells: SmallVec<[Tile; INLINE_CELLS]> =
            (1..self.cells.len()).map(|tile| tile as Tile).collect();
        cells.push(BLANK);
        Board {
            rows: self.rows,
            cols: self.cols,
            blank: self.cells.len() - 1,
            cells,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.blank == self.cells.len() - 1
            && self.cells[..self.blank]
                .iter()
                .enumerate()
                .all(|(index, &tile)| usize::from(tile) == index + 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// (row, column) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    /// The board after moving the blank one cell in direction `mv`, or `None`
    /// if that would leave the board.
    pub fn slide(&self, mv: Move) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (dr, dc) = mv.offset();
        let row = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
        let target = row * self.cols + col;

        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Some(Board {
            rows: self.rows,
            cols: self.cols,
            cells,
            blank: target,
        })
    }

    /// Every board one move away, in [`Move`] order.
    pub fn neighbours(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::iter().filter_map(move |mv| self.slide(mv).map(|board| (mv, board)))
    }

    /// Number of pairs of tiles (blank excluded) that appear in the wrong
    /// order when reading the board row by row.
    pub fn inversions(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&tile| tile != BLANK)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }

    /// Whether the solved board can be reached at all. A horizontal move
    /// keeps the inversion count, a vertical one changes it by a number with
    /// the parity of `cols - 1` while moving the blank to another row, so
    /// boards split into two classes that never meet.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.rows == 1 || self.cols == 1 {
            // Tiles can never pass each other on a single line
            inversions == 0
        } else if self.cols % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row_from_bottom = self.rows - self.blank / self.cols;
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// Sum over all tiles of their row and column distance to their solved
    /// position.
    pub fn manhattan_distance(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let goal = usize::from(tile) - 1;
                let (row, col) = (index / self.cols, index % self.cols);
                let (goal_row, goal_col) = (goal / self.cols, goal % self.cols);
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            })
            .sum()
    }

    /// Number of tiles not in their solved position.
    pub fn misplaced_tiles(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != BLANK && usize::from(tile) != index + 1)
            .count()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = BoardError;

    fn try_from(grid: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Board::new(&grid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for (row, tiles) in self.cells.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line = tiles
                .iter()
                .map(|tile| format!("{:>width$}", tile, width = width))
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn construction() {
        let board = classic_board();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.blank_position(), (2, 2));
        assert_eq!(board.get(0, 1), Some(8));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.cells(), &[1, 8, 3, 6, 4, 7, 5, 2, 0]);
    }

    #[test]
    fn malformed_boards_are_rejected() {
        let empty: [[Tile; 0]; 0] = [];
        assert_eq!(Board::new(&empty), Err(BoardError::Empty));
        assert_eq!(
            Board::new(&[vec![1, 2, 3], vec![4, 0]]),
            Err(BoardError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Board::new(&[[1, 2], [3, 4]]),
            Err(BoardError::MissingBlank)
        );
        assert_eq!(
            Board::new(&[[1, 2], [4, 0]]),
            Err(BoardError::TileOutOfRange { tile: 4, cells: 4 })
        );
        assert_eq!(
            Board::new(&[[1, 1], [2, 0]]),
            Err(BoardError::DuplicateTile { tile: 1 })
        );
        assert!(matches!(
            Board::from_cells(17, 17, &[0; 289]),
            Err(BoardError::TooLarge { .. })
        ));
    }

    #[test]
    fn goal_board() {
        let goal = Board::goal(3, 3).unwrap();
        assert_eq!(goal.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(goal.is_solved());
        assert_eq!(goal, classic_board().solved());
        assert!(!classic_board().is_solved());
        assert_eq!(Board::goal(1, 1).unwrap().cells(), &[0]);
        assert!(Board::goal(16, 16).is_ok());
    }

    #[test]
    fn slide_swaps_the_blank() {
        let board = Board::new(&[[1, 2], [0, 3]]).unwrap();
        assert_eq!(board.slide(Move::Down), None);
        assert_eq!(board.slide(Move::Left), None);
        assert_eq!(
            board.slide(Move::Right),
            Some(Board::new(&[[1, 2], [3, 0]]).unwrap())
        );
        assert_eq!(
            board.slide(Move::Up),
            Some(Board::new(&[[0, 2], [1, 3]]).unwrap())
        );
        // The board it was slid from is untouched
        assert_eq!(board.cells(), &[1, 2, 0, 3]);
    }

    #[test]
    fn neighbours_are_reversible() {
        for board in [classic_board(), Board::goal(3, 4).unwrap(), Board::goal(1, 3).unwrap()] {
            let neighbours: Vec<(Move, Board)> = board.neighbours().collect();
            assert!(!neighbours.is_empty());
            for (mv, neighbour) in neighbours {
                assert_ne!(neighbour, board);
                assert_eq!(neighbour.slide(mv.opposite()).as_ref(), Some(&board));
            }
        }
    }

    #[test]
    fn corner_centre_and_edge_neighbours() {
        let centre = Board::new(&[[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        assert_eq!(centre.neighbours().count(), 4);
        let edge = Board::new(&[[1, 0, 3], [4, 2, 5], [6, 7, 8]]).unwrap();
        assert_eq!(edge.neighbours().count(), 3);
        assert_eq!(classic_board().neighbours().count(), 2);
    }

    #[test]
    fn inversions_and_solvability() {
        assert_eq!(classic_board().inversions(), 14);
        assert!(classic_board().is_solvable());
        assert!(Board::goal(4, 4).unwrap().is_solvable());

        let swapped = Board::new(&[[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        assert_eq!(swapped.inversions(), 1);
        assert!(!swapped.is_solvable());

        // Even width: the blank's row matters
        assert!(Board::new(&[[1, 2], [0, 3]]).unwrap().is_solvable());
        assert!(Board::new(&[[0, 2], [1, 3]]).unwrap().is_solvable());
        assert!(!Board::new(&[[2, 1], [3, 0]]).unwrap().is_solvable());

        // Single line
        assert!(Board::new(&[[0, 1, 2]]).unwrap().is_solvable());
        assert!(!Board::new(&[[2, 1, 0]]).unwrap().is_solvable());
    }

    #[test]
    fn heuristics() {
        let board = Board::new(&[[1, 2], [0, 3]]).unwrap();
        assert_eq!(board.manhattan_distance(), 1);
        assert_eq!(board.misplaced_tiles(), 1);

        let goal = Board::goal(3, 3).unwrap();
        assert_eq!(goal.manhattan_distance(), 0);
        assert_eq!(goal.misplaced_tiles(), 0);

        let board = classic_board();
        assert!(board.misplaced_tiles() <= board.manhattan_distance());
    }

    #[test]
    fn display() {
        assert_eq!(classic_board().to_string(), "1 8 3\n6 4 7\n5 2 0");
        let wide = Board::goal(4, 4).unwrap().to_string();
        assert_eq!(wide.lines().next(), Some(" 1  2  3  4"));
        assert_eq!(wide.lines().last(), Some("13 14 15  0"));
    }
}
