use thiserror::Error;

/// Errors that abort a search before it can reach a verdict. An unreachable
/// goal is not an error, it is reported through
/// [`crate::search::search_engines::SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An informed strategy needed a heuristic value for a state that the
    /// heuristic table does not cover.
    #[error("no heuristic value for state {state}")]
    MissingHeuristic { state: String },
    /// An informed strategy was run against a problem without any heuristic.
    #[error("informed strategies require a heuristic, but none was provided")]
    HeuristicRequired,
}
