//! Text and JSON rendering of a finished search

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::algorithm::executor::{SearchConfig, SearchOutcome};
use crate::algorithm::pruning::PruneRule;
use crate::algorithm::statistics::SearchStatistics;
use crate::io::error::Result;
use crate::spatial::HeightGrid;

/// Summary of a search run, ready for display or encoding
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Grid order searched
    pub order: usize,
    /// Best cardinality found, or the lower bound when nothing beat it
    pub best_card: usize,
    /// Best grid as rows of glyphs, absent when nothing beat the lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<String>>,
    /// Cardinalities recorded during the search, in order
    pub improvements: Vec<usize>,
    /// Pruning rules that were enabled
    pub rules: Vec<PruneRule>,
    /// Whether heights were introduced in increasing order only
    pub height_symmetry: bool,
    /// Lower bound the search had to beat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<usize>,
    /// Largest cardinality the search was allowed to record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<usize>,
    /// Diagnostic counters, when collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SearchStatistics>,
    /// Wall-clock search time in milliseconds
    pub elapsed_ms: u64,
}

impl SearchReport {
    /// Build a report from a finished search
    pub fn new(outcome: SearchOutcome, config: &SearchConfig, elapsed: Duration) -> Self {
        Self {
            order: outcome.order,
            best_card: outcome.best_card,
            grid: outcome.best_grid.as_ref().map(HeightGrid::render_rows),
            improvements: outcome.improvements,
            rules: config.rules.enabled().collect(),
            height_symmetry: config.height_symmetry,
            lower_bound: config.lower_bound,
            ceiling: config.ceiling,
            statistics: outcome.statistics,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn write_statistics(f: &mut fmt::Formatter<'_>, statistics: &SearchStatistics) -> fmt::Result {
        for (rule, count) in statistics.per_rule() {
            writeln!(f, "Number of configurations stopped by {rule}: {count}")?;
        }
        writeln!(
            f,
            "Number of configurations stopped by any rule: {}",
            statistics.total_pruned()
        )?;
        writeln!(f, "Number of configurations stopped by ceiling: {}", statistics.ceiling_cuts)?;
        writeln!(f, "Complete grids reached: {}", statistics.terminals)?;
        writeln!(f, "Cells visited: {}", statistics.nodes)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.grid {
            Some(rows) => {
                for row in rows {
                    writeln!(f, "{row}")?;
                }
                writeln!(f, "result: {}", self.best_card)?;
            }
            None => {
                writeln!(
                    f,
                    "no {0}x{0} placement beats {1} markers",
                    self.order, self.best_card
                )?;
            }
        }

        if let Some(ceiling) = self.ceiling {
            writeln!(f, "ceiling: {ceiling} markers")?;
        }

        if let Some(statistics) = &self.statistics {
            Self::write_statistics(f, statistics)?;
        }

        write!(f, "elapsed: {} ms", self.elapsed_ms)
    }
}
