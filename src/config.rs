//! Problem files. A problem file is TOML with an optional `[search]` table
//! and exactly one of a `[graph]` or a `[puzzle]` table:
//!
//! ```toml
//! [search]
//! engine = "astar"
//!
//! [graph]
//! start = "S"
//! goal = "G"
//! edges = [["S", "A", 1.0], ["A", "G", 2.5]]
//!
//! [graph.heuristics]
//! S = 3
//! A = 2
//! G = 0
//! ```

use crate::graph::{Graph, GraphError, Heuristics};
use crate::puzzle::{solve_with, Board, BoardError, PuzzleHeuristic, Tile};
use crate::search::{
    search_engines::{
        RandomRestartHillClimbing, SearchEngine, SearchEngineName, SearchOutcome, SearchResult,
        DEFAULT_SEED,
    },
    SearchError, SearchProblem, SearchStatistics,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse problem file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("node {node:?} does not appear in the graph")]
    UnknownNode { node: String },
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Which strategy to run and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchConfig {
    pub engine: SearchEngineName,
    /// Restart budget of random-restart hill climbing, one restart per
    /// candidate state if absent
    pub max_restarts: Option<usize>,
    /// Seed of the restart order
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::default(),
            max_restarts: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl SearchConfig {
    pub fn with_engine(self, engine: SearchEngineName) -> Self {
        Self { engine, ..self }
    }

    pub fn search<P: SearchProblem>(&self, problem: &P, start: P::State) -> SearchOutcome<P::State> {
        match self.engine {
            SearchEngineName::RandomRestartHillClimbing => {
                RandomRestartHillClimbing::new(self.max_restarts, self.seed).search(problem, start)
            }
            engine => engine.search(problem, start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GraphConfig {
    pub start: String,
    pub goal: String,
    /// `[from, to, cost]` triples
    pub edges: Vec<(String, String, f64)>,
    #[serde(default)]
    pub heuristics: Option<IndexMap<String, f64>>,
}

impl GraphConfig {
    pub fn graph(&self) -> Result<Graph<String>, ConfigError> {
        let graph = Graph::from_edges(self.edges.iter().cloned())?;
        for node in [&self.start, &self.goal] {
            if !graph.contains_node(node) {
                return Err(ConfigError::UnknownNode { node: node.clone() });
            }
        }
        Ok(graph)
    }

    pub fn heuristics(&self) -> Result<Option<Heuristics<String>>, ConfigError> {
        match &self.heuristics {
            Some(values) => Ok(Some(Heuristics::from_entries(
                values.iter().map(|(node, &value)| (node.clone(), value)),
            )?)),
            None => Ok(None),
        }
    }

    pub fn solve(
        &self,
        search: &SearchConfig,
    ) -> Result<(SearchResult<String>, SearchStatistics), ConfigError> {
        let graph = self.graph()?;
        let heuristics = self.heuristics()?;
        info!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            engine = %search.engine,
            "searching graph"
        );
        let problem = graph.problem(self.goal.clone(), heuristics.as_ref());
        Ok(search.search(&problem, self.start.clone())?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PuzzleConfig {
    /// Rows of tiles, 0 is the blank
    pub board: Vec<Vec<Tile>>,
    #[serde(default)]
    pub heuristic: PuzzleHeuristic,
}

impl PuzzleConfig {
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.board.as_slice())?)
    }

    pub fn solve(
        &self,
        search: &SearchConfig,
    ) -> Result<(SearchResult<Board>, SearchStatistics), ConfigError> {
        let board = self.board()?;
        info!(
            rows = board.rows(),
            cols = board.cols(),
            engine = %search.engine,
            "searching puzzle"
        );
        Ok(solve_with(&board, search.engine, self.heuristic)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemConfig {
    Graph(GraphConfig),
    Puzzle(PuzzleConfig),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SolverConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(flatten)]
    pub problem: ProblemConfig,
}

impl SolverConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
