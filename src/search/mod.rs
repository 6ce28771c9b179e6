mod error;
mod frontier;
pub mod heuristics;
mod path;
mod policy;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod verbosity;

pub use error::SearchError;
pub use frontier::{Frontier, FrontierKind};
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use path::Path;
pub use policy::{Policy, PriorityKey};
pub use problem::{FnProblem, GoalTest, SearchProblem, Successor};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use verbosity::Verbosity;
