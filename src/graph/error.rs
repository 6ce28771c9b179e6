use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edge {from} -> {to} has negative cost {cost}")]
    NegativeCost { from: String, to: String, cost: f64 },
    #[error("edge {from} -> {to} has non-finite cost {cost}")]
    NonFiniteCost { from: String, to: String, cost: f64 },
    #[error("heuristic value {value} for node {node} is not a finite, non-negative number")]
    InvalidHeuristic { node: String, value: f64 },
}
