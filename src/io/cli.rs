//! Command-line interface for running a placement search

use crate::algorithm::executor::{RookSearch, SearchConfig};
use crate::algorithm::pruning::{PruneRule, PruningRules};
use crate::io::configuration::{
    DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_ORDER, DEFAULT_PROGRESS_INTERVAL_MS,
};
use crate::io::error::Result;
use crate::io::progress::{ProgressReporter, SnapshotChannel};
use crate::io::report::SearchReport;
use clap::Parser;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "rookstack")]
#[command(
    author,
    version,
    about = "Find a maximum placement of stacked rooks on a square grid"
)]
/// Command-line arguments for the placement search
// Each search optimisation is an independent switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grid side length, also the number of heights
    #[arg(short = 'n', long, default_value_t = DEFAULT_ORDER)]
    pub order: usize,

    /// Pruning rule to switch off (repeatable or comma separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub disable: Vec<PruneRule>,

    /// Switch off every pruning rule and height symmetry-breaking
    #[arg(short, long)]
    pub exhaustive: bool,

    /// Allow any height at every pillar instead of introducing heights in order
    #[arg(long)]
    pub no_height_symmetry: bool,

    /// Only report placements with more markers than this
    #[arg(short, long)]
    pub lower_bound: Option<usize>,

    /// Skip placements with more markers than this
    #[arg(short, long)]
    pub ceiling: Option<usize>,

    /// Collect and print per-rule pruning counters
    #[arg(short, long)]
    pub stats: bool,

    /// Print the report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Milliseconds between progress redraws
    #[arg(short, long, default_value_t = DEFAULT_PROGRESS_INTERVAL_MS)]
    pub interval_ms: u64,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pruning rules left enabled by the flags
    pub fn rules(&self) -> PruningRules {
        if self.exhaustive {
            return PruningRules::none();
        }
        self.disable
            .iter()
            .fold(PruningRules::all(), |rules, &rule| rules.without(rule))
    }

    /// Build and validate the search configuration described by the flags
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid
    pub fn search_config(&self) -> Result<SearchConfig> {
        let config = SearchConfig {
            order: self.order,
            rules: self.rules(),
            height_symmetry: !(self.exhaustive || self.no_height_symmetry),
            lower_bound: self.lower_bound,
            ceiling: self.ceiling,
            collect_statistics: self.stats,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Runs one search described by the CLI, with optional progress display
pub struct SearchRunner {
    cli: Cli,
}

impl SearchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Whether the report should be printed as JSON
    pub const fn wants_json(&self) -> bool {
        self.cli.json
    }

    /// Run the search to completion and summarise it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the progress
    /// reporter cannot be started or stopped
    pub fn run(&self) -> Result<SearchReport> {
        let config = self.cli.search_config()?;
        let start_time = Instant::now();
        let mut search = RookSearch::new(config)?;

        // Allow print for user feedback on the search being started
        #[allow(clippy::print_stderr)]
        if self.cli.should_show_progress() {
            let rules: Vec<_> = config.rules.enabled().map(PruneRule::name).collect();
            eprintln!(
                "Searching {0}x{0} grid, pruning: {1}",
                config.order,
                if rules.is_empty() { "none".to_string() } else { rules.join(", ") }
            );
        }

        let reporter = if self.cli.should_show_progress() {
            let (channel, messages) = SnapshotChannel::new(config.order);
            search = search.with_progress(channel.clone());
            Some(ProgressReporter::spawn(
                channel,
                messages,
                Duration::from_millis(self.cli.interval_ms.max(1)),
            )?)
        } else {
            None
        };

        let outcome = search.run();

        if let Some(reporter) = reporter {
            reporter.finish()?;
        }

        Ok(SearchReport::new(outcome, &config, start_time.elapsed()))
    }
}
