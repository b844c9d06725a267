//! CLI entry point for the stacked-rook placement search

use clap::Parser;
use rookstack::io::cli::{Cli, SearchRunner};

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> rookstack::Result<()> {
    let runner = SearchRunner::new(Cli::parse());
    let report = runner.run()?;
    if runner.wants_json() {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
