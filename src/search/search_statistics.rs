use crate::search::HeuristicValue;
use std::{cmp, time::Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes put on the frontier
    generated_nodes: i64,
    /// Number of heuristic evaluations
    evaluated_nodes: i64,
    /// Number of frontier entries dropped because their state was already
    /// closed when they were popped
    pruned_nodes: i64,
    /// Number of hill climbing restarts
    restarts: i64,
    /// Largest frontier seen
    peak_frontier_size: usize,
    /// Best heuristic value expanded so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            evaluated_nodes: 0,
            pruned_nodes: 0,
            restarts: 0,
            peak_frontier_size: 0,
            best_heuristic_value: HeuristicValue::from(f64::INFINITY),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value.into_inner());
        }
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_restarts(&mut self) {
        self.restarts += 1;
    }

    /// Fold the counters of another search (e.g. one hill climbing restart)
    /// into these.
    pub fn absorb(&mut self, other: &SearchStatistics) {
        self.expanded_nodes += other.expanded_nodes;
        self.generated_nodes += other.generated_nodes;
        self.evaluated_nodes += other.evaluated_nodes;
        self.pruned_nodes += other.pruned_nodes;
        self.restarts += other.restarts;
        self.peak_frontier_size = self.peak_frontier_size.max(other.peak_frontier_size);
        self.best_heuristic_value = cmp::min(self.best_heuristic_value, other.best_heuristic_value);
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> i64 {
        self.evaluated_nodes
    }

    pub fn pruned_nodes(&self) -> i64 {
        self.pruned_nodes
    }

    pub fn restarts(&self) -> i64 {
        self.restarts
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            evaluated_nodes = self.evaluated_nodes,
            pruned_nodes = self.pruned_nodes,
            restarts = self.restarts,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
