//! Exhaustive branch-and-bound search for maximum stacked-rook placements
//!
//! Markers with a height in `1..=N` are placed on the pillars of an N×N grid.
//! Six pairs of directional bitsets decide which placements remain legal, and a
//! depth-first search with symmetry-breaking and bounding finds a placement
//! holding as many markers as possible.

#![forbid(unsafe_code)]

/// Constraint state, propagation, pruning, and the search driver
pub mod algorithm;
/// Command-line interface, progress display, reporting, and error handling
pub mod io;
/// Height grid storage and rendering
pub mod spatial;

pub use algorithm::executor::{SearchConfig, SearchOutcome, search};
pub use io::error::{Result, SearchError};
