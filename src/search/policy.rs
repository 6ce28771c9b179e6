//! A [`Policy`] is everything that distinguishes one strategy from another
//! when they run on the shared best-first engine: the frontier discipline, the
//! key nodes are ordered by, and whether step costs are honoured.

use crate::search::{FrontierKind, HeuristicValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityKey {
    /// Arrival order only, the frontier discipline decides
    None,
    /// Accumulated cost g
    Cost,
    /// Heuristic estimate h
    Heuristic,
    /// g + h
    CostPlusHeuristic,
}

impl PriorityKey {
    pub fn key(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        match self {
            PriorityKey::None => (0.).into(),
            PriorityKey::Cost => g,
            PriorityKey::Heuristic => h,
            PriorityKey::CostPlusHeuristic => g + h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub frontier: FrontierKind,
    pub priority: PriorityKey,
    /// Replace every step cost by 1, so the reported cost is the number of
    /// transitions.
    pub unit_costs: bool,
}

impl Policy {
    pub fn breadth_first() -> Self {
        Self {
            frontier: FrontierKind::Fifo,
            priority: PriorityKey::None,
            unit_costs: true,
        }
    }

    pub fn depth_first() -> Self {
        Self {
            frontier: FrontierKind::Lifo,
            priority: PriorityKey::None,
            unit_costs: true,
        }
    }

    pub fn uniform_cost() -> Self {
        Self {
            frontier: FrontierKind::MinPriority,
            priority: PriorityKey::Cost,
            unit_costs: false,
        }
    }

    pub fn greedy() -> Self {
        Self {
            frontier: FrontierKind::MinPriority,
            priority: PriorityKey::Heuristic,
            unit_costs: false,
        }
    }

    pub fn astar() -> Self {
        Self {
            frontier: FrontierKind::MinPriority,
            priority: PriorityKey::CostPlusHeuristic,
            unit_costs: false,
        }
    }

    pub fn hill_climbing() -> Self {
        Self {
            frontier: FrontierKind::FirstImprovement,
            priority: PriorityKey::Heuristic,
            unit_costs: false,
        }
    }

    /// Whether the heuristic has to be evaluated for generated states.
    pub fn uses_heuristic(&self) -> bool {
        matches!(
            self.priority,
            PriorityKey::Heuristic | PriorityKey::CostPlusHeuristic
        ) || self.frontier == FrontierKind::FirstImprovement
    }

    /// Whether an empty frontier proves that the goal is unreachable. Only
    /// hill climbing discards alternatives, so only it can give up early.
    pub fn is_exhaustive(&self) -> bool {
        self.frontier != FrontierKind::FirstImprovement
    }
}
