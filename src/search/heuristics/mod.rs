mod heuristic;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
