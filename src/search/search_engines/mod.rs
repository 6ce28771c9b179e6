mod best_first;
mod random_restart;
mod search_engine;

pub use best_first::BestFirstSearch;
pub use random_restart::{RandomRestartHillClimbing, DEFAULT_SEED};
pub use search_engine::{SearchEngine, SearchEngineName, SearchOutcome, SearchResult};
