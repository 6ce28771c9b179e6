//! The frontier holds the nodes that have been generated but not expanded
//! yet. Each strategy differs only in the order in which nodes leave it.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// First in, first out (breadth-first)
    Fifo,
    /// Last in, first out (depth-first)
    Lifo,
    /// Smallest priority key first (uniform-cost, greedy, A*)
    MinPriority,
    /// Holds at most one node, the most recently accepted one. Used by hill
    /// climbing, which never keeps alternatives to backtrack to.
    FirstImprovement,
}

/// Nodes with equal keys leave a [`FrontierKind::MinPriority`] frontier in
/// the order they were generated: the node id, which grows monotonically
/// within a search, is the secondary key. This makes every strategy
/// deterministic for a given problem.
#[derive(Debug)]
pub enum Frontier {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    MinPriority(PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>),
    FirstImprovement(Option<NodeId>),
}

impl Frontier {
    pub fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::Fifo => Frontier::Fifo(VecDeque::new()),
            FrontierKind::Lifo => Frontier::Lifo(Vec::new()),
            FrontierKind::MinPriority => Frontier::MinPriority(PriorityQueue::new()),
            FrontierKind::FirstImprovement => Frontier::FirstImprovement(None),
        }
    }

    pub fn kind(&self) -> FrontierKind {
        match self {
            Frontier::Fifo(_) => FrontierKind::Fifo,
            Frontier::Lifo(_) => FrontierKind::Lifo,
            Frontier::MinPriority(_) => FrontierKind::MinPriority,
            Frontier::FirstImprovement(_) => FrontierKind::FirstImprovement,
        }
    }

    /// Add a node. `key` is ignored by the disciplines that do not order by
    /// priority.
    pub fn push(&mut self, node_id: NodeId, key: HeuristicValue) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node_id),
            Frontier::Lifo(stack) => stack.push(node_id),
            Frontier::MinPriority(queue) => {
                queue.push(node_id, Reverse((key, node_id)));
            }
            Frontier::FirstImprovement(slot) => *slot = Some(node_id),
        }
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::MinPriority(queue) => queue.pop().map(|(node_id, _)| node_id),
            Frontier::FirstImprovement(slot) => slot.take(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::MinPriority(queue) => queue.len(),
            Frontier::FirstImprovement(slot) => usize::from(slot.is_some()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
