//! Explicit, weighted, directed graphs over arbitrary node labels, and the
//! search problem that walks them.

mod error;
mod graph;
mod graph_problem;
mod heuristics;

pub use error::GraphError;
pub use graph::Graph;
pub use graph_problem::GraphProblem;
pub use heuristics::Heuristics;
