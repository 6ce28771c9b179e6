//! The shared best-first engine. Breadth-first, depth-first, uniform-cost,
//! greedy best-first, A* and hill climbing are all this loop with a different
//! [`Policy`]:
//!
//! 1. seed the frontier with the start state
//! 2. pop a node; skip it if its state is already closed, otherwise close it
//!    and return if it is a goal
//! 3. generate the successors that are not closed and push them
//!
//! With [`GoalTest::OnGeneration`] states are closed and goal-tested in step
//! 3 instead, when they are generated.

use crate::search::{
    search_engines::{SearchEngine, SearchOutcome, SearchResult},
    Frontier, FrontierKind, GoalTest, HeuristicValue, NodeId, Policy, SearchError,
    SearchProblem, SearchSpace, SearchStatistics, Successor,
};
use tracing::{info, trace};

#[derive(Debug, Clone, Copy)]
pub struct BestFirstSearch {
    policy: Policy,
}

impl BestFirstSearch {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    fn evaluate<P: SearchProblem>(
        &self,
        problem: &P,
        state: &P::State,
        statistics: &mut SearchStatistics,
    ) -> Result<HeuristicValue, SearchError> {
        if !self.policy.uses_heuristic() {
            return Ok((0.).into());
        }
        statistics.increment_evaluated_nodes();
        problem.heuristic(state)
    }

    fn step_cost(&self, cost: HeuristicValue) -> HeuristicValue {
        if self.policy.unit_costs {
            (1.).into()
        } else {
            cost
        }
    }

    fn log_search_space<S: std::hash::Hash + Eq + Clone>(search_space: &SearchSpace<S>) {
        info!(
            search_space_nodes = search_space.num_nodes(),
            closed_states = search_space.num_closed()
        );
    }

    fn success<S: std::hash::Hash + Eq + Clone>(
        search_space: &SearchSpace<S>,
        goal_id: NodeId,
        mut statistics: SearchStatistics,
    ) -> (SearchResult<S>, SearchStatistics) {
        let path = search_space.extract_path(goal_id);
        info!(path_length = path.num_steps(), path_cost = path.cost().into_inner());
        Self::log_search_space(search_space);
        statistics.finalise_search();
        (SearchResult::Success(path), statistics)
    }
}

impl<P: SearchProblem> SearchEngine<P> for BestFirstSearch {
    fn search(&mut self, problem: &P, start: P::State) -> SearchOutcome<P::State> {
        info!(policy = ?self.policy, "starting search");
        let mut statistics = SearchStatistics::new();
        let goal_test = problem.goal_test();
        let first_improvement = self.policy.frontier == FrontierKind::FirstImprovement;

        let root_h = self.evaluate(problem, &start, &mut statistics)?;
        let mut search_space = SearchSpace::new(start, root_h);
        let root_id = search_space.get_root_node().get_node_id();

        if goal_test == GoalTest::OnGeneration {
            let start = search_space.get_state(root_id).clone();
            search_space.close(&start);
            if problem.is_goal(&start) {
                return Ok(Self::success(&search_space, root_id, statistics));
            }
        }

        let mut frontier = Frontier::new(self.policy.frontier);
        frontier.push(root_id, self.policy.priority.key((0.).into(), root_h));
        statistics.increment_generated_nodes(1);

        while let Some(node_id) = frontier.pop() {
            let node = *search_space.get_node(node_id);
            let state = search_space.get_state(node_id).clone();

            if goal_test == GoalTest::OnExpansion {
                if !search_space.close(&state) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                if problem.is_goal(&state) {
                    return Ok(Self::success(&search_space, node_id, statistics));
                }
            }

            trace!(
                ?state,
                g = node.get_g().into_inner(),
                h = node.get_h().into_inner(),
                f = node.get_f().into_inner()
            );
            statistics.increment_expanded_nodes();
            statistics.register_heuristic_value(node.get_h());

            let mut children = Vec::new();
            for Successor {
                state: child,
                cost,
            } in problem.successors(&state)
            {
                if search_space.is_closed(&child) {
                    continue;
                }
                let h = self.evaluate(problem, &child, &mut statistics)?;
                // Hill climbing only moves to a strictly better state
                if first_improvement && h >= node.get_h() {
                    continue;
                }
                let g = node.get_g() + self.step_cost(cost);

                if goal_test == GoalTest::OnGeneration {
                    search_space.close(&child);
                    let is_goal = problem.is_goal(&child);
                    let child_id = search_space.insert_node(child, node_id, g, h);
                    if is_goal {
                        statistics.increment_generated_nodes(1);
                        return Ok(Self::success(&search_space, child_id, statistics));
                    }
                    children.push((child_id, self.policy.priority.key(g, h)));
                } else {
                    let child_id = search_space.insert_node(child, node_id, g, h);
                    children.push((child_id, self.policy.priority.key(g, h)));
                }

                if first_improvement {
                    break;
                }
            }

            // Pushing in reverse makes the first successor the next one
            // expanded, which is the order a recursive depth-first search
            // would visit them in.
            if frontier.kind() == FrontierKind::Lifo {
                children.reverse();
            }
            statistics.increment_generated_nodes(children.len());
            for (child_id, key) in children {
                frontier.push(child_id, key);
            }
            statistics.register_frontier_size(frontier.len());
        }

        info!("frontier exhausted without reaching a goal");
        Self::log_search_space(&search_space);
        statistics.finalise_search();
        let result = if self.policy.is_exhaustive() {
            SearchResult::ProvablyUnsolvable
        } else {
            SearchResult::IncompleteUnsolvable
        };
        Ok((result, statistics))
    }
}
