//! A path is the ordered sequence of states a search moved through, from the
//! start state to a goal state, together with its accumulated cost. This
//! module provides the [`Path`] struct, which is what a successful search
//! returns.

use crate::search::HeuristicValue;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S> {
    states: Vec<S>,
    cost: HeuristicValue,
}

impl<S> Path<S> {
    pub fn new(states: Vec<S>, cost: HeuristicValue) -> Self {
        debug_assert!(!states.is_empty(), "A path contains at least the start");
        Self { states, cost }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn cost(&self) -> HeuristicValue {
        self.cost
    }

    pub fn start(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }

    /// Number of transitions on the path, one less than the number of states.
    pub fn num_steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// The states paired with their zero-based level, i.e. the number of
    /// transitions needed to reach them from the start.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &S)> {
        self.states.iter().enumerate()
    }
}

impl<S> Deref for Path<S> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl<S> IntoIterator for Path<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_start_at_zero() {
        let path = Path::new(vec!["S", "A", "G"], HeuristicValue::from(4.));
        let levels: Vec<(usize, &&str)> = path.levels().collect();

        assert_eq!(levels, vec![(0, &"S"), (1, &"A"), (2, &"G")]);
        assert_eq!(path.num_steps(), 2);
        assert_eq!(path.start(), Some(&"S"));
        assert_eq!(path.goal(), Some(&"G"));
    }

    #[test]
    fn single_state_path_has_no_steps() {
        let path = Path::new(vec![7], HeuristicValue::from(0.));
        assert_eq!(path.num_steps(), 0);
        assert_eq!(path.len(), 1);
    }
}
