use crate::search::SearchError;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Costs and heuristic estimates share one totally ordered float type so
/// that `g + h` can be used directly as a frontier priority.
pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<T>: Debug {
    /// Estimate the remaining cost from `state` to the goal.
    fn evaluate(&self, state: &T) -> Result<HeuristicValue, SearchError>;
}
