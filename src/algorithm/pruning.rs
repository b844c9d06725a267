//! Branch pruning rules evaluated while walking the grid
//!
//! Every rule only discards branches that are either symmetric to one already
//! explored or provably unable to beat the best cardinality, so any subset of
//! rules reaches the same optimum as the unpruned search.

// Coordinates outside the grid are invariant violations; an indexing panic is the intended failure
#![allow(clippy::indexing_slicing)]

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::algorithm::bitset::AxisMask;
use crate::algorithm::constraints::{AxisPair, ConstraintStore, SLOTS};

/// Independently switchable pruning inequality
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PruneRule {
    /// Row marker counts never increase from the top row downwards
    RowOrder,
    /// Rows with equal counts keep their column sets ordered
    TieBreak,
    /// Columns keep their row sets ordered left to right
    ColumnOrder,
    /// Optimistic fill of the remaining cells must beat the best cardinality
    Bound,
    /// A finished row may trail the fullest row by at most one marker
    FeasibilityGap,
}

impl PruneRule {
    /// Number of rules
    pub const COUNT: usize = 5;

    /// Every rule, in counter order
    pub const ALL: [Self; Self::COUNT] = [
        Self::RowOrder,
        Self::TieBreak,
        Self::ColumnOrder,
        Self::Bound,
        Self::FeasibilityGap,
    ];

    /// Position of this rule in counter arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable rule name
    pub const fn name(self) -> &'static str {
        match self {
            Self::RowOrder => "row order",
            Self::TieBreak => "tie break",
            Self::ColumnOrder => "column order",
            Self::Bound => "bound",
            Self::FeasibilityGap => "feasibility gap",
        }
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for PruneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of enabled pruning rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PruningRules(u8);

impl Default for PruningRules {
    fn default() -> Self {
        Self::all()
    }
}

impl PruningRules {
    /// Every rule enabled
    pub const fn all() -> Self {
        Self((1 << PruneRule::COUNT) - 1)
    }

    /// No rule enabled, giving a plain exhaustive search
    pub const fn none() -> Self {
        Self(0)
    }

    /// This set with `rule` enabled
    #[must_use]
    pub const fn with(self, rule: PruneRule) -> Self {
        Self(self.0 | rule.bit())
    }

    /// This set with `rule` disabled
    #[must_use]
    pub const fn without(self, rule: PruneRule) -> Self {
        Self(self.0 & !rule.bit())
    }

    /// Test whether `rule` is enabled
    pub const fn is_enabled(self, rule: PruneRule) -> bool {
        self.0 & rule.bit() != 0
    }

    /// Enabled rules in counter order
    pub fn enabled(self) -> impl Iterator<Item = PruneRule> {
        PruneRule::ALL
            .into_iter()
            .filter(move |&rule| self.is_enabled(rule))
    }
}

impl FromIterator<PruneRule> for PruningRules {
    fn from_iter<I: IntoIterator<Item = PruneRule>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Markers placed per row, with an unbounded sentinel above the top row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowCounts {
    counts: [usize; SLOTS],
    order: usize,
}

impl RowCounts {
    /// Zero counts for an `order`-row grid
    pub const fn new(order: usize) -> Self {
        let mut counts = [0; SLOTS];
        counts[order] = usize::MAX;
        Self { counts, order }
    }

    /// Markers in row `x`; row `order` reads as unbounded
    pub const fn get(&self, x: usize) -> usize {
        self.counts[x]
    }

    /// Record one more marker in row `x`
    pub const fn increment(&mut self, x: usize) {
        debug_assert!(x < self.order);
        self.counts[x] += 1;
    }

    /// Remove one marker from row `x`
    pub const fn decrement(&mut self, x: usize) {
        debug_assert!(x < self.order && self.counts[x] > 0);
        self.counts[x] -= 1;
    }

    /// Largest count among rows `x..order`, the rows already visited
    pub fn max_from(&self, x: usize) -> usize {
        self.counts[x..self.order].iter().copied().max().unwrap_or(0)
    }
}

/// Column order: placing in (`x`, `y`) would rank column `y` above column `y + 1`
///
/// Column masks compare as integers, so rows already finished decide the
/// ordering before the current row does.
pub fn column_order_violated(store: &ConstraintStore, x: usize, y: usize) -> bool {
    let current = store.read_projection(AxisPair::ColumnRow, y) | AxisMask::single(x);
    current > store.read_projection(AxisPair::ColumnRow, y + 1)
}

/// Row order: one more marker in row `x` would exceed the row above
pub const fn row_order_violated(rows: &RowCounts, x: usize) -> bool {
    rows.get(x) + 1 > rows.get(x + 1)
}

/// Tie break: row `x` matches the count of row `x + 1` but ranks its columns above it
pub fn tie_break_violated(store: &ConstraintStore, rows: &RowCounts, x: usize) -> bool {
    rows.get(x) == rows.get(x + 1)
        && store.read_projection(AxisPair::RowColumn, x)
            > store.read_projection(AxisPair::RowColumn, x + 1)
}

/// Most markers a branch could still hold, positioned just after cell (`x`, `y`)
///
/// The `y` cells left in row `x` and every cell of the rows below are counted
/// as fillable. With row order enforced, a row can hold no more than the row
/// above it, which caps the estimate by the top row or the previous row.
pub const fn optimistic_total(
    order: usize,
    rows: &RowCounts,
    card: usize,
    x: usize,
    y: usize,
    row_order: bool,
) -> usize {
    let top_row = x + 1 == order;
    match (top_row, row_order) {
        (true, true) => order * (card + y),
        (true, false) => card + y + order * x,
        (false, true) => card + rows.counts[x + 1] * x + y,
        (false, false) => card + order * x + y,
    }
}

/// Bound: nothing reachable from here can exceed `best_card`
pub const fn bound_exhausted(optimistic: usize, best_card: usize) -> bool {
    optimistic <= best_card
}

/// Feasibility gap: finished row `x` trails the fullest visited row by two or more
pub fn feasibility_gap_violated(rows: &RowCounts, x: usize) -> bool {
    rows.get(x) + 1 < rows.max_from(x)
}

/// Fewest markers a completed grid must hold, judged at the end of row `x`
///
/// With the feasibility gap enforced every remaining row keeps at least one
/// less than the fullest row; otherwise only the markers already placed count.
pub fn guaranteed_total(rows: &RowCounts, card: usize, x: usize, gap_enforced: bool) -> usize {
    if gap_enforced {
        card + rows.max_from(x).saturating_sub(1) * x
    } else {
        card
    }
}
