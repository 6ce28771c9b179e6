use crate::search::{HeuristicValue, SearchError};
use std::{fmt, hash::Hash, marker::PhantomData};

/// When the goal test is applied to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalTest {
    /// Test states when they are popped from the frontier, and close them at
    /// the same time. Required for uniform-cost and A* to be optimal.
    #[default]
    OnExpansion,
    /// Test states as soon as they are generated, and close them right away
    /// so that no state enters the frontier twice. Breadth-first search
    /// terminates one level earlier this way while still returning a path
    /// with the fewest transitions.
    OnGeneration,
}

/// A state reachable in one transition, with the cost of that transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S> {
    pub state: S,
    pub cost: HeuristicValue,
}

impl<S> Successor<S> {
    pub fn new(state: S, cost: impl Into<HeuristicValue>) -> Self {
        Self {
            state,
            cost: cost.into(),
        }
    }
}

/// The interface between a state space and the search engines.
///
/// `successors` must be a pure function of the state: the engines rely on it
/// returning the same successors in the same order every time, both for
/// termination and for deterministic results.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + fmt::Debug;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated cost from `state` to the nearest goal. Only called by
    /// informed strategies.
    fn heuristic(&self, _state: &Self::State) -> Result<HeuristicValue, SearchError> {
        Ok((0.).into())
    }

    fn goal_test(&self) -> GoalTest {
        GoalTest::OnExpansion
    }

    /// States random-restart hill climbing may restart from. Problems whose
    /// state space cannot be enumerated return nothing, in which case only
    /// the given start is tried.
    fn restart_states(&self) -> Vec<Self::State> {
        Vec::new()
    }
}

type HeuristicFn<'a, S> = Box<dyn Fn(&S) -> HeuristicValue + 'a>;

/// A [`SearchProblem`] assembled from closures, for callers that do not want
/// to define a type of their own.
pub struct FnProblem<'a, S, E, G> {
    expand: E,
    goal: G,
    heuristic: Option<HeuristicFn<'a, S>>,
    goal_test: GoalTest,
    restart_states: Vec<S>,
    _state: PhantomData<fn(&S)>,
}

impl<'a, S, E, G> FnProblem<'a, S, E, G>
where
    E: Fn(&S) -> Vec<Successor<S>>,
    G: Fn(&S) -> bool,
{
    pub fn new(expand: E, goal: G) -> Self {
        Self {
            expand,
            goal,
            heuristic: None,
            goal_test: GoalTest::default(),
            restart_states: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Without a heuristic, informed strategies fail with
    /// [`SearchError::HeuristicRequired`].
    pub fn with_heuristic(mut self, heuristic: impl Fn(&S) -> HeuristicValue + 'a) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    pub fn with_goal_test(mut self, goal_test: GoalTest) -> Self {
        self.goal_test = goal_test;
        self
    }

    pub fn with_restart_states(mut self, states: Vec<S>) -> Self {
        self.restart_states = states;
        self
    }
}

impl<S, E, G> fmt::Debug for FnProblem<'_, S, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem")
            .field("heuristic", &self.heuristic.is_some())
            .field("goal_test", &self.goal_test)
            .field("restart_states", &self.restart_states.len())
            .finish_non_exhaustive()
    }
}

impl<S, E, G> SearchProblem for FnProblem<'_, S, E, G>
where
    S: Clone + Eq + Hash + fmt::Debug,
    E: Fn(&S) -> Vec<Successor<S>>,
    G: Fn(&S) -> bool,
{
    type State = S;

    fn successors(&self, state: &S) -> Vec<Successor<S>> {
        (self.expand)(state)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal)(state)
    }

    fn heuristic(&self, state: &S) -> Result<HeuristicValue, SearchError> {
        match &self.heuristic {
            Some(heuristic) => Ok(heuristic(state)),
            None => Err(SearchError::HeuristicRequired),
        }
    }

    fn goal_test(&self) -> GoalTest {
        self.goal_test
    }

    fn restart_states(&self) -> Vec<S> {
        self.restart_states.clone()
    }
}
