//! Configuration for graph algorithms.

use serde::{Deserialize, Serialize};

/// Strategy used by `DirectedGraph::has_cycle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleDetection {
    /// White/grey/black depth-first search, O(V + E).
    #[default]
    ThreeColor,
    /// For every edge `v -> w`, search from `w` and look for `v`.
    /// O(E * (V + E)); only sensible for small graphs.
    PairwiseReach,
}

/// Directed graph configuration.
///
/// Deserializing a partial document fills the missing fields with defaults,
/// so callers may keep it in whatever config file they already load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Cycle detection algorithm.
    pub cycle_detection: CycleDetection,
}

impl GraphConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cycle detection strategy.
    pub fn with_cycle_detection(mut self, strategy: CycleDetection) -> Self {
        self.cycle_detection = strategy;
        self
    }
}
