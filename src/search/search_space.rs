use crate::search::{HeuristicValue, NodeId, Path, SearchNode};
use segvec::{Linear, SegVec};
use std::{collections::HashSet, fmt, hash::Hash};

/// A [`SearchSpace`] owns everything one search generates: the append-only
/// pool of [`SearchNode`]s with their states, and the closed set of states
/// that may not be put on the frontier again. The state is abstract; we only
/// require it to be hashable so that identical configurations are detected
/// regardless of how they were reached.
pub struct SearchSpace<S: Hash + Eq> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<S, Linear>,
    closed: HashSet<S>,
}

impl<S: Hash + Eq> fmt::Debug for SearchSpace<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("root_node_id", &self.root_node_id)
            .field("num_nodes", &self.nodes.len())
            .field("num_closed", &self.closed.len())
            .finish()
    }
}

impl<S: Hash + Eq + Clone> SearchSpace<S> {
    pub fn new(initial_state: S, initial_h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();

        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_root(root_node_id, initial_h));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            closed: HashSet::new(),
        }
    }

    /// Add a node for `state`, generated from the node `parent_id`.
    pub fn insert_node(
        &mut self,
        state: S,
        parent_id: NodeId,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let parent = *self.get_node(parent_id);
        self.nodes
            .push(SearchNode::new_with_parent(node_id, &parent, g, h));
        self.states.push(state);
        node_id
    }

    /// Mark `state` as closed. Returns `false` if it already was.
    pub fn close(&mut self, state: &S) -> bool {
        if self.closed.contains(state) {
            return false;
        }
        self.closed.insert(state.clone())
    }

    pub fn is_closed(&self, state: &S) -> bool {
        self.closed.contains(state)
    }

    /// Walk the parent chain from `goal_id` back to the root and return the
    /// states in start-to-goal order.
    pub fn extract_path(&self, goal_id: NodeId) -> Path<S> {
        let goal_node = self.get_node(goal_id);
        let mut states = Vec::with_capacity(goal_node.get_depth() + 1);
        let mut node = goal_node;
        states.push(self.get_state(goal_id).clone());
        while !node.is_root() {
            node = self.get_node(node.get_parent_id());
            states.push(self.get_state(node.get_node_id()).clone());
        }
        states.reverse();
        Path::new(states, goal_node.get_g())
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.index()).expect("Invalid node id")
    }

    /// Number of nodes generated so far, duplicates included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_closed(&self) -> usize {
        self.closed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_path_walks_parents() {
        let mut space = SearchSpace::new("S", HeuristicValue::from(0.));
        let root = space.get_root_node().get_node_id();
        let a = space.insert_node("A", root, HeuristicValue::from(1.), HeuristicValue::from(0.));
        let _b = space.insert_node("B", root, HeuristicValue::from(4.), HeuristicValue::from(0.));
        let g = space.insert_node("G", a, HeuristicValue::from(3.), HeuristicValue::from(0.));

        let path = space.extract_path(g);
        assert_eq!(path.states(), &["S", "A", "G"]);
        assert_eq!(path.cost(), HeuristicValue::from(3.));
        assert_eq!(space.num_nodes(), 4);
    }

    #[test]
    fn root_path_is_just_the_start() {
        let space = SearchSpace::new(42, HeuristicValue::from(0.));
        let path = space.extract_path(space.get_root_node().get_node_id());
        assert_eq!(path.states(), &[42]);
        assert_eq!(path.num_steps(), 0);
    }

    #[test]
    fn states_close_once() {
        let mut space = SearchSpace::new(0, HeuristicValue::from(0.));
        assert!(space.close(&0));
        assert!(!space.close(&0));
        assert!(space.is_closed(&0));
        assert!(!space.is_closed(&1));
        assert_eq!(space.num_closed(), 1);
    }
}
