use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board needs at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a {rows}x{cols} board has more than {max} cells")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("tile {tile} is out of range, a board with {cells} cells holds 0..{cells}")]
    TileOutOfRange { tile: usize, cells: usize },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: usize },
    #[error("the board has no blank (0) cell")]
    MissingBlank,
}
