//! Depth-first search driver and its configuration
//!
//! Pillars are visited from the last row to the first, and within a row from
//! the last column to the first. Each pillar first tries every admissible
//! height, then is left empty. Pruning rules are consulted on the way from one
//! pillar to the next; reaching past row 0 completes a grid.

use crate::{
    algorithm::constraints::ConstraintStore,
    algorithm::pruning::{self, PruneRule, PruningRules, RowCounts},
    algorithm::statistics::SearchStatistics,
    algorithm::tracker::BestTracker,
    io::configuration::{DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_ORDER, MAX_ORDER},
    io::error::{Result, invalid_parameter},
    io::progress::SnapshotChannel,
    spatial::HeightGrid,
};

/// Parameters of one search run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side length of the grid, also the number of available heights
    pub order: usize,
    /// Enabled pruning rules
    pub rules: PruningRules,
    /// Introduce heights in increasing order only, since heights are interchangeable
    pub height_symmetry: bool,
    /// Only record grids holding strictly more markers than this
    pub lower_bound: Option<usize>,
    /// Cut branches certain to exceed this many markers
    pub ceiling: Option<usize>,
    /// Gather per-rule diagnostic counters
    pub collect_statistics: bool,
    /// Visited cells between two progress snapshots
    pub checkpoint_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

impl SearchConfig {
    /// Fully optimised search for an `order`×`order` grid
    pub const fn new(order: usize) -> Self {
        Self {
            order,
            rules: PruningRules::all(),
            height_symmetry: true,
            lower_bound: None,
            ceiling: None,
            collect_statistics: false,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }

    /// Unpruned search without height symmetry-breaking
    pub const fn exhaustive(order: usize) -> Self {
        Self {
            rules: PruningRules::none(),
            height_symmetry: false,
            ..Self::new(order)
        }
    }

    /// Check that the parameters describe a runnable search
    ///
    /// # Errors
    ///
    /// Returns an error if the order is outside `1..=MAX_ORDER`, the checkpoint
    /// interval is zero, or the lower bound leaves nothing to find
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ORDER).contains(&self.order) {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &format!("must be between 1 and {MAX_ORDER}"),
            ));
        }

        if self.checkpoint_interval == 0 {
            return Err(invalid_parameter(
                "checkpoint_interval",
                &self.checkpoint_interval,
                &"must be positive",
            ));
        }

        let capacity = self.order * self.order;
        if let Some(lower) = self.lower_bound {
            if lower >= capacity {
                return Err(invalid_parameter(
                    "lower_bound",
                    &lower,
                    &format!("a {0}x{0} grid holds at most {capacity} markers", self.order),
                ));
            }
            if let Some(ceiling) = self.ceiling.filter(|&ceiling| ceiling <= lower) {
                return Err(invalid_parameter(
                    "ceiling",
                    &ceiling,
                    &format!("must exceed the lower bound {lower}"),
                ));
            }
        }

        Ok(())
    }
}

/// Result of a completed search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Grid order searched
    pub order: usize,
    /// Best cardinality, or the lower bound if nothing beat it
    pub best_card: usize,
    /// Grid achieving `best_card`, if any grid was recorded
    pub best_grid: Option<HeightGrid>,
    /// Every recorded cardinality, in the order found
    pub improvements: Vec<usize>,
    /// Diagnostic counters, when collection was enabled
    pub statistics: Option<SearchStatistics>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Placed,
    Empty,
}

/// Search context: constraint state, live grid, and best-solution bookkeeping
///
/// All mutation follows strict LIFO order: whatever a pillar changes is
/// undone before control returns to the previous pillar.
pub struct RookSearch {
    config: SearchConfig,
    order: usize,
    store: ConstraintStore,
    grid: HeightGrid,
    rows: RowCounts,
    card: usize,
    height_limit: usize,
    tracker: BestTracker,
    statistics: SearchStatistics,
    nodes: u64,
    publisher: Option<SnapshotChannel>,
}

impl RookSearch {
    /// Prepare a search in its initial state
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`SearchConfig::validate`]
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let order = config.order;

        Ok(Self {
            config,
            order,
            store: ConstraintStore::new(order),
            grid: HeightGrid::new(order),
            rows: RowCounts::new(order),
            card: 0,
            height_limit: 1,
            tracker: BestTracker::new(order, config.lower_bound.unwrap_or(0)),
            statistics: SearchStatistics::new(),
            nodes: 0,
            publisher: None,
        })
    }

    /// Publish progress snapshots to `channel` at every checkpoint and announce each new best
    #[must_use]
    pub fn with_progress(mut self, channel: SnapshotChannel) -> Self {
        self.publisher = Some(channel);
        self
    }

    /// Configuration this search runs with
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Explore the whole grid and report the best placement
    pub fn run(mut self) -> SearchOutcome {
        let last = self.order - 1;
        self.visit(last, last);
        debug_assert_eq!(self.card, 0);
        self.into_outcome()
    }

    /// Whether the counters and constraint state agree with the live grid
    pub fn is_consistent(&self) -> bool {
        self.card == self.grid.occupied()
            && self.store.projected_markers() == self.card
            && (0..self.order).all(|x| self.rows.get(x) == self.grid.occupied_in_row(x))
            && self.store.within_bounds()
    }

    fn visit(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.order && y < self.order);
        self.nodes += 1;
        self.checkpoint();

        if self.store.cell_forbidden(x, y) {
            self.advance(x, y, Slot::Empty);
            return;
        }

        if self.enabled(PruneRule::ColumnOrder) && pruning::column_order_violated(&self.store, x, y)
        {
            self.count_prune(PruneRule::ColumnOrder);
            self.advance(x, y, Slot::Empty);
            return;
        }

        if self.enabled(PruneRule::RowOrder) && pruning::row_order_violated(&self.rows, x) {
            self.count_prune(PruneRule::RowOrder);
            // No later pillar of this row can take a marker either
            self.advance(x, 0, Slot::Empty);
            return;
        }

        let limit = if self.config.height_symmetry {
            self.height_limit
        } else {
            self.order
        };
        let candidates = self.store.admissible_heights(x, y, limit);

        self.rows.increment(x);
        self.card += 1;
        for z in candidates.iter() {
            if !self.store.height_admits(x, y, z) {
                continue;
            }

            let saved = self.store.apply_placement(x, y, z);
            self.grid.place(x, y, (z + 1) as u8);

            // Using the newest height makes the next unused one available
            let introduces_height = self.config.height_symmetry
                && z + 1 == self.height_limit
                && self.height_limit < self.order;
            if introduces_height {
                self.height_limit += 1;
            }
            self.advance(x, y, Slot::Placed);
            if introduces_height {
                self.height_limit -= 1;
            }

            self.grid.clear(x, y);
            self.store.undo_placement(x, y, z, saved);
        }
        self.card -= 1;
        self.rows.decrement(x);

        self.advance(x, y, Slot::Empty);
    }

    fn advance(&mut self, x: usize, y: usize, slot: Slot) {
        let top_row = x + 1 == self.order;
        let first_column = y + 1 == self.order;

        match slot {
            Slot::Empty => {
                if self.enabled(PruneRule::Bound) && (top_row || !first_column) {
                    let optimistic = pruning::optimistic_total(
                        self.order,
                        &self.rows,
                        self.card,
                        x,
                        y,
                        self.enabled(PruneRule::RowOrder),
                    );
                    if pruning::bound_exhausted(optimistic, self.tracker.best_card()) {
                        self.count_prune(PruneRule::Bound);
                        return;
                    }
                }
            }
            Slot::Placed => {
                if self.enabled(PruneRule::TieBreak)
                    && !top_row
                    && !first_column
                    && pruning::tie_break_violated(&self.store, &self.rows, x)
                {
                    self.count_prune(PruneRule::TieBreak);
                    return;
                }
            }
        }

        self.next_cell(x, y);
    }

    fn next_cell(&mut self, x: usize, y: usize) {
        if y > 0 {
            self.visit(x, y - 1);
            return;
        }

        if self.enabled(PruneRule::FeasibilityGap) && pruning::feasibility_gap_violated(&self.rows, x)
        {
            self.count_prune(PruneRule::FeasibilityGap);
            return;
        }

        if let Some(ceiling) = self.config.ceiling {
            let guaranteed = pruning::guaranteed_total(
                &self.rows,
                self.card,
                x,
                self.enabled(PruneRule::FeasibilityGap),
            );
            if guaranteed > ceiling {
                if self.config.collect_statistics {
                    self.statistics.ceiling_cuts += 1;
                }
                return;
            }
        }

        if x == 0 {
            self.complete();
        } else {
            self.visit(x - 1, self.order - 1);
        }
    }

    fn complete(&mut self) {
        debug_assert!(self.is_consistent(), "search state out of sync with grid");
        if self.config.collect_statistics {
            self.statistics.terminals += 1;
        }
        if self.tracker.improves(self.card) {
            self.tracker.update_best(&self.grid, self.card);
            self.announce_best();
        }
    }

    fn checkpoint(&self) {
        if self.nodes.is_multiple_of(self.config.checkpoint_interval) {
            self.publish();
        }
    }

    fn publish(&self) {
        if let Some(channel) = &self.publisher {
            channel.publish(&self.grid, self.card, self.tracker.best_card(), self.nodes);
        }
    }

    fn announce_best(&self) {
        if let Some(channel) = &self.publisher {
            channel.announce_best(&self.grid, self.card);
            channel.publish(&self.grid, self.card, self.tracker.best_card(), self.nodes);
        }
    }

    const fn enabled(&self, rule: PruneRule) -> bool {
        self.config.rules.is_enabled(rule)
    }

    fn count_prune(&mut self, rule: PruneRule) {
        if self.config.collect_statistics {
            self.statistics.record_prune(rule);
        }
    }

    fn into_outcome(self) -> SearchOutcome {
        let mut statistics = self.statistics;
        statistics.nodes = self.nodes;
        let (best_card, best_grid, improvements) = self.tracker.into_parts();

        SearchOutcome {
            order: self.order,
            best_card,
            best_grid,
            improvements,
            statistics: self.config.collect_statistics.then_some(statistics),
        }
    }
}

/// Validate `config` and run a search to completion
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn search(config: SearchConfig) -> Result<SearchOutcome> {
    RookSearch::new(config).map(RookSearch::run)
}
