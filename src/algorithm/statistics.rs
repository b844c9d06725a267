//! Diagnostic counters gathered during a search

use serde::Serialize;

use crate::algorithm::pruning::PruneRule;

/// Counts of visited cells, completed grids, and branches cut per rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatistics {
    /// Cells visited by the traversal
    pub nodes: u64,
    /// Complete grids reached
    pub terminals: u64,
    /// Branches cut by each pruning rule, indexed by [`PruneRule::index`]
    pub pruned: [u64; PruneRule::COUNT],
    /// Branches cut because their guaranteed cardinality exceeded the ceiling
    pub ceiling_cuts: u64,
}

impl SearchStatistics {
    /// Zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one branch cut by `rule`
    pub fn record_prune(&mut self, rule: PruneRule) {
        if let Some(count) = self.pruned.get_mut(rule.index()) {
            *count += 1;
        }
    }

    /// Branches cut by `rule` so far
    pub fn pruned_by(&self, rule: PruneRule) -> u64 {
        self.pruned.get(rule.index()).copied().unwrap_or(0)
    }

    /// Branches cut by all rules together
    pub fn total_pruned(&self) -> u64 {
        self.pruned.iter().sum()
    }

    /// `(rule, count)` pairs in counter order
    pub fn per_rule(&self) -> impl Iterator<Item = (PruneRule, u64)> + '_ {
        PruneRule::ALL
            .into_iter()
            .map(|rule| (rule, self.pruned_by(rule)))
    }
}
