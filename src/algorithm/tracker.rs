//! Best placement found so far

use crate::spatial::HeightGrid;

/// Highest cardinality reached by a complete grid, with a copy of that grid
///
/// Only strict improvements are recorded, so among equally good grids the
/// first one reached in traversal order is kept.
#[derive(Debug, Clone)]
pub struct BestTracker {
    best_card: usize,
    best_grid: HeightGrid,
    found: bool,
    improvements: Vec<usize>,
}

impl BestTracker {
    /// Start with `lower_bound` as the cardinality to beat
    pub fn new(order: usize, lower_bound: usize) -> Self {
        Self {
            best_card: lower_bound,
            best_grid: HeightGrid::new(order),
            found: false,
            improvements: Vec::with_capacity(order * order + 1),
        }
    }

    /// Cardinality to beat
    pub const fn best_card(&self) -> usize {
        self.best_card
    }

    /// Whether a complete grid with `card` markers would be recorded
    pub const fn improves(&self, card: usize) -> bool {
        card > self.best_card
    }

    /// Record `grid` holding `card` markers as the new best
    ///
    /// Callers must only pass strict improvements.
    pub fn update_best(&mut self, grid: &HeightGrid, card: usize) {
        debug_assert!(self.improves(card), "{card} does not beat {}", self.best_card);
        self.best_grid.copy_from(grid);
        self.best_card = card;
        self.found = true;
        self.improvements.push(card);
    }

    /// Consume the tracker, keeping the best grid and the improvement history
    pub fn into_parts(self) -> (usize, Option<HeightGrid>, Vec<usize>) {
        let grid = self.found.then_some(self.best_grid);
        (self.best_card, grid, self.improvements)
    }
}
