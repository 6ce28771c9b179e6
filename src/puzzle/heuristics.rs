use crate::puzzle::Board;
use crate::search::{Heuristic, HeuristicValue, SearchError, ZeroHeuristic};
use serde::{Deserialize, Serialize};

/// Estimates of the number of moves left, all admissible and consistent
/// since every move displaces exactly one tile by one cell.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleHeuristic {
    /// Sum of the Manhattan distances of the tiles to their solved cells
    #[default]
    Manhattan,
    /// Number of tiles not on their solved cell
    MisplacedTiles,
    /// Always zero
    Zero,
}

impl Heuristic<Board> for PuzzleHeuristic {
    fn evaluate(&self, board: &Board) -> Result<HeuristicValue, SearchError> {
        let estimate = match self {
            PuzzleHeuristic::Manhattan => board.manhattan_distance(),
            PuzzleHeuristic::MisplacedTiles => board.misplaced_tiles(),
            PuzzleHeuristic::Zero => return ZeroHeuristic.evaluate(board),
        };
        Ok(HeuristicValue::from(estimate as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn misplaced_never_exceeds_manhattan() {
        let board = classic_board();
        let manhattan = PuzzleHeuristic::Manhattan.evaluate(&board).unwrap();
        let misplaced = PuzzleHeuristic::MisplacedTiles.evaluate(&board).unwrap();
        assert!(misplaced <= manhattan);
        assert_eq!(
            PuzzleHeuristic::Zero.evaluate(&board),
            Ok(HeuristicValue::from(0.))
        );
    }

    #[test]
    fn solved_board_scores_zero() {
        let goal = Board::goal(3, 3).unwrap();
        for heuristic in [
            PuzzleHeuristic::Manhattan,
            PuzzleHeuristic::MisplacedTiles,
            PuzzleHeuristic::Zero,
        ] {
            assert_eq!(heuristic.evaluate(&goal), Ok(HeuristicValue::from(0.)));
        }
    }
}
