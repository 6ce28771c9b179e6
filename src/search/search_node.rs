use crate::search::HeuristicValue;

/// Index of a [`SearchNode`] inside its [`crate::search::SearchSpace`]. Ids
/// are handed out in creation order, so comparing two ids tells which node was
/// generated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a node of the expansion tree. It records how the node
/// was reached (its parent) and the values the strategies order the frontier
/// by. The state itself lives next to the node in the search space. Nodes are
/// never modified once created; reaching the same state again creates a new
/// node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    /// Unique identifier of the node within one search
    node_id: NodeId,
    /// Node this one was generated from, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Accumulated cost from the start state
    g: HeuristicValue,
    /// Heuristic estimate of the remaining cost, zero for strategies that do
    /// not consult a heuristic
    h: HeuristicValue,
    /// Number of transitions from the root
    depth: usize,
}

impl SearchNode {
    /// Create the root node of the expansion tree.
    pub fn new_root(node_id: NodeId, h: HeuristicValue) -> Self {
        Self {
            node_id,
            parent_id: NO_NODE,
            g: (0.).into(),
            h,
            depth: 0,
        }
    }

    /// Create a child of `parent`, reached with accumulated cost `g`.
    pub fn new_with_parent(
        node_id: NodeId,
        parent: &SearchNode,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            parent_id: parent.node_id,
            g,
            h,
            depth: parent.depth + 1,
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_tracks_parent_and_depth() {
        let root = SearchNode::new_root(NodeId::new(0), (4.).into());
        let child = SearchNode::new_with_parent(NodeId::new(1), &root, (2.5).into(), (1.).into());

        assert!(root.is_root());
        assert!(!child.is_root());
        assert_eq!(child.get_parent_id(), root.get_node_id());
        assert_eq!(child.get_depth(), 1);
        assert_eq!(child.get_f(), HeuristicValue::from(3.5));
        assert_eq!(root.get_f(), HeuristicValue::from(4.));
    }
}
