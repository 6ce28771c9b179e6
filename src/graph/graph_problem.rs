use crate::graph::{Graph, Heuristics};
use crate::search::{GoalTest, Heuristic, HeuristicValue, SearchError, SearchProblem, Successor};
use std::{fmt::Debug, hash::Hash};

/// Reaching `goal` in a [`Graph`]. Successors are the outgoing edges with
/// their weights, the goal is tested when a node is expanded.
#[derive(Debug, Clone)]
pub struct GraphProblem<'g, L: Hash + Eq> {
    graph: &'g Graph<L>,
    goal: L,
    heuristics: Option<&'g Heuristics<L>>,
}

impl<'g, L> GraphProblem<'g, L>
where
    L: Clone + Hash + Eq + Debug,
{
    pub fn new(graph: &'g Graph<L>, goal: L, heuristics: Option<&'g Heuristics<L>>) -> Self {
        Self {
            graph,
            goal,
            heuristics,
        }
    }

    pub fn goal(&self) -> &L {
        &self.goal
    }
}

impl<L> SearchProblem for GraphProblem<'_, L>
where
    L: Clone + Hash + Eq + Debug,
{
    type State = L;

    fn successors(&self, state: &L) -> Vec<Successor<L>> {
        self.graph
            .neighbours(state)
            .map(|(to, cost)| Successor::new(to.clone(), cost))
            .collect()
    }

    fn is_goal(&self, state: &L) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &L) -> Result<HeuristicValue, SearchError> {
        match self.heuristics {
            Some(heuristics) => heuristics.evaluate(state),
            None => Err(SearchError::HeuristicRequired),
        }
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnExpansion
    }

    fn restart_states(&self) -> Vec<L> {
        self.graph.nodes().cloned().collect()
    }
}
