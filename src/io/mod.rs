/// Command-line parsing and search orchestration
pub mod cli;
/// Search limits and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Background progress display
pub mod progress;
/// Final report rendering
pub mod report;
