//! Random-restart hill climbing: climb from the start, and whenever the climb
//! gets stuck climb again from another state, picked at random among the
//! problem's restart states. Goal states are never restart candidates, a
//! climb has to reach the goal.

use crate::search::{
    search_engines::{BestFirstSearch, SearchEngine, SearchOutcome, SearchResult},
    Policy, SearchProblem,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info};

pub const DEFAULT_SEED: u64 = 0x5eed;

#[derive(Debug, Clone)]
pub struct RandomRestartHillClimbing {
    /// Upper bound on the number of restarts. `None` allows one restart per
    /// restart state, so the search always terminates.
    max_restarts: Option<usize>,
    seed: u64,
}

impl Default for RandomRestartHillClimbing {
    fn default() -> Self {
        Self::new(None, DEFAULT_SEED)
    }
}

impl RandomRestartHillClimbing {
    pub fn new(max_restarts: Option<usize>, seed: u64) -> Self {
        Self { max_restarts, seed }
    }
}

impl<P: SearchProblem> SearchEngine<P> for RandomRestartHillClimbing {
    fn search(&mut self, problem: &P, start: P::State) -> SearchOutcome<P::State> {
        let mut climber = BestFirstSearch::new(Policy::hill_climbing());
        let (result, mut statistics) = climber.search(problem, start.clone())?;
        if result.is_success() {
            return Ok((result, statistics));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut candidates = problem.restart_states();
        candidates.retain(|state| *state != start && !problem.is_goal(state));
        candidates.shuffle(&mut rng);
        let budget = self
            .max_restarts
            .unwrap_or(candidates.len())
            .min(candidates.len());

        for (restart, candidate) in candidates.into_iter().take(budget).enumerate() {
            debug!(restart, ?candidate, "restarting hill climbing");
            statistics.increment_restarts();
            let (result, restart_statistics) = climber.search(problem, candidate)?;
            statistics.absorb(&restart_statistics);
            if result.is_success() {
                return Ok((result, statistics));
            }
        }

        info!(restarts = statistics.restarts(), "restart budget exhausted");
        Ok((SearchResult::IncompleteUnsolvable, statistics))
    }
}
