use crate::search::{
    search_engines::{BestFirstSearch, RandomRestartHillClimbing},
    Path, Policy, SearchError, SearchProblem, SearchStatistics,
};
use clap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<S> {
    /// The search was successful
    Success(Path<S>),
    /// The frontier ran empty, no goal is reachable from the start
    ProvablyUnsolvable,
    /// The search gave up, but the search engine is also incomplete
    IncompleteUnsolvable,
}

impl<S> SearchResult<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn path(&self) -> Option<&Path<S>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<S>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }
}

/// What every search engine hands back: the verdict plus the counters that
/// were collected on the way.
pub type SearchOutcome<S> = Result<(SearchResult<S>, SearchStatistics), SearchError>;

pub trait SearchEngine<P: SearchProblem> {
    fn search(&mut self, problem: &P, start: P::State) -> SearchOutcome<P::State>;
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    Deserialize,
    Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    /// Breadth-first search
    #[default]
    Bfs,
    /// Depth-first search
    Dfs,
    /// Uniform-cost search
    Ucs,
    /// Greedy best-first search
    Greedy,
    /// A* search
    #[clap(name = "astar")]
    #[serde(rename = "astar")]
    #[strum(serialize = "astar")]
    AStar,
    /// First-improvement hill climbing
    HillClimbing,
    /// Hill climbing that restarts from random states when it gets stuck
    RandomRestartHillClimbing,
}

impl SearchEngineName {
    /// The ordering policy of the strategy. Random-restart hill climbing runs
    /// plain hill climbing for every restart.
    pub fn policy(&self) -> Policy {
        match self {
            SearchEngineName::Bfs => Policy::breadth_first(),
            SearchEngineName::Dfs => Policy::depth_first(),
            SearchEngineName::Ucs => Policy::uniform_cost(),
            SearchEngineName::Greedy => Policy::greedy(),
            SearchEngineName::AStar => Policy::astar(),
            SearchEngineName::HillClimbing | SearchEngineName::RandomRestartHillClimbing => {
                Policy::hill_climbing()
            }
        }
    }

    pub fn is_informed(&self) -> bool {
        self.policy().uses_heuristic()
    }

    /// Run the strategy with its default settings.
    pub fn search<P: SearchProblem>(&self, problem: &P, start: P::State) -> SearchOutcome<P::State> {
        match self {
            SearchEngineName::RandomRestartHillClimbing => {
                RandomRestartHillClimbing::default().search(problem, start)
            }
            _ => BestFirstSearch::new(self.policy()).search(problem, start),
        }
    }
}
