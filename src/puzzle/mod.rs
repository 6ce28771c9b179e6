//! The sliding-tile puzzle as an implicit state space: boards are generated
//! on demand by sliding the blank, never enumerated up front.

mod board;
mod error;
mod heuristics;
mod moves;
mod puzzle_problem;
mod render;

pub use board::{Board, Tile, BLANK, MAX_CELLS};
pub use error::BoardError;
pub use heuristics::PuzzleHeuristic;
pub use moves::Move;
pub use puzzle_problem::{solve, solve_with, PuzzleProblem};
pub use render::{render_trace, LevelTrace};
