use crate::search::{Heuristic, HeuristicValue, SearchError};

/// The blind heuristic. Admissible and consistent for every problem, with it
/// A* degenerates into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic
    }
}

impl<T> Heuristic<T> for ZeroHeuristic {
    fn evaluate(&self, _state: &T) -> Result<HeuristicValue, SearchError> {
        Ok((0.).into())
    }
}
