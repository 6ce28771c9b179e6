use crate::graph::GraphError;
use crate::search::{Heuristic, HeuristicValue, SearchError};
use indexmap::IndexMap;
use std::{fmt::Debug, hash::Hash};

/// A table of estimated costs to the goal, one entry per node. Looking up a
/// node without an entry is an error, not an estimate of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Heuristics<L: Hash + Eq> {
    values: IndexMap<L, HeuristicValue>,
}

impl<L: Hash + Eq> Default for Heuristics<L> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<L> Heuristics<L>
where
    L: Hash + Eq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (L, f64)>) -> Result<Self, GraphError> {
        let mut heuristics = Self::new();
        for (node, value) in entries {
            heuristics.insert(node, value)?;
        }
        Ok(heuristics)
    }

    pub fn insert(&mut self, node: L, value: f64) -> Result<(), GraphError> {
        if !value.is_finite() || value < 0. {
            return Err(GraphError::InvalidHeuristic {
                node: format!("{:?}", node),
                value,
            });
        }
        self.values.insert(node, value.into());
        Ok(())
    }

    pub fn get(&self, node: &L) -> Option<HeuristicValue> {
        self.values.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<L> Heuristic<L> for Heuristics<L>
where
    L: Hash + Eq + Debug,
{
    fn evaluate(&self, state: &L) -> Result<HeuristicValue, SearchError> {
        self.get(state).ok_or_else(|| SearchError::MissingHeuristic {
            state: format!("{:?}", state),
        })
    }
}
