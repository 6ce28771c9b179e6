use crate::graph::{GraphError, GraphProblem, Heuristics};
use crate::search::search_engines::{SearchEngineName, SearchOutcome};
use indexmap::{IndexMap, IndexSet};
use std::{fmt::Debug, hash::Hash};

/// A weighted directed graph stored as an adjacency map. Nodes and edges are
/// kept in insertion order, so successors are always generated in the order
/// they were added and every search over the graph is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<L: Hash + Eq> {
    adjacency: IndexMap<L, IndexMap<L, f64>>,
}

impl<L: Hash + Eq> Default for Graph<L> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<L> Graph<L>
where
    L: Clone + Hash + Eq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, cost)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (L, L, f64)>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// Add a node without outgoing edges. Does nothing if the node exists.
    pub fn add_node(&mut self, node: L) {
        self.adjacency.entry(node).or_default();
    }

    /// Add the edge `from -> to`, replacing its cost if it already exists.
    /// Both endpoints become nodes of the graph.
    pub fn add_edge(&mut self, from: L, to: L, cost: f64) -> Result<(), GraphError> {
        if !cost.is_finite() {
            return Err(GraphError::NonFiniteCost {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                cost,
            });
        }
        if cost < 0. {
            return Err(GraphError::NegativeCost {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                cost,
            });
        }
        self.add_node(from.clone());
        self.add_node(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.insert(to, cost);
        }
        Ok(())
    }

    pub fn contains_node(&self, node: &L) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes, in the order they were first mentioned.
    pub fn nodes(&self) -> impl Iterator<Item = &L> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `node` with their costs. Unknown nodes have none.
    pub fn neighbours<'a>(&'a self, node: &L) -> impl Iterator<Item = (&'a L, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, &cost)| (to, cost)))
    }

    pub fn edge_cost(&self, from: &L, to: &L) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Nodes reachable from `start`, `start` included.
    pub fn reachable_from(&self, start: &L) -> IndexSet<L> {
        let mut reached = IndexSet::new();
        reached.insert(start.clone());
        let mut next = 0;
        while let Some(node) = reached.get_index(next).cloned() {
            for (to, _) in self.neighbours(&node) {
                reached.insert(to.clone());
            }
            next += 1;
        }
        reached
    }

    /// The search problem of getting from any node to `goal`. Informed
    /// strategies need `heuristics`.
    pub fn problem<'g>(
        &'g self,
        goal: L,
        heuristics: Option<&'g Heuristics<L>>,
    ) -> GraphProblem<'g, L> {
        GraphProblem::new(self, goal, heuristics)
    }

    /// Search for a path from `start` to `goal` with the given strategy.
    pub fn search(
        &self,
        engine: SearchEngineName,
        start: L,
        goal: L,
        heuristics: Option<&Heuristics<L>>,
    ) -> SearchOutcome<L> {
        engine.search(&self.problem(goal, heuristics), start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_create_both_endpoints() {
        let graph = Graph::from_edges([("S", "A", 1.), ("A", "G", 2.)]).unwrap();
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![&"S", &"A", &"G"]);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.contains_node(&"G"));
        assert_eq!(graph.neighbours(&"G").count(), 0);
    }

    #[test]
    fn neighbours_keep_insertion_order() {
        let graph = Graph::from_edges([("S", "B", 4.), ("S", "A", 1.), ("S", "C", 2.)]).unwrap();
        let neighbours: Vec<(&&str, f64)> = graph.neighbours(&"S").collect();
        assert_eq!(neighbours, vec![(&"B", 4.), (&"A", 1.), (&"C", 2.)]);
        assert_eq!(graph.edge_cost(&"S", &"C"), Some(2.));
        assert_eq!(graph.edge_cost(&"C", &"S"), None);
    }

    #[test]
    fn unknown_nodes_have_no_neighbours() {
        let graph: Graph<&str> = Graph::new();
        assert_eq!(graph.neighbours(&"X").count(), 0);
    }

    #[test]
    fn rejects_bad_costs() {
        let mut graph = Graph::new();
        assert_eq!(
            graph.add_edge("S", "A", -1.),
            Err(GraphError::NegativeCost {
                from: "\"S\"".to_string(),
                to: "\"A\"".to_string(),
                cost: -1.
            })
        );
        assert!(matches!(
            graph.add_edge("S", "A", f64::INFINITY),
            Err(GraphError::NonFiniteCost { .. })
        ));
        assert!(matches!(
            graph.add_edge("S", "A", f64::NAN),
            Err(GraphError::NonFiniteCost { .. })
        ));
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn reachability() {
        let graph = Graph::from_edges([(1, 2, 1.), (2, 3, 1.), (4, 1, 1.)]).unwrap();
        let reached: Vec<i32> = graph.reachable_from(&1).into_iter().collect();
        assert_eq!(reached, vec![1, 2, 3]);
    }
}
