//! Spatial data structures for the placement grid

/// Height grid storage and text rendering
pub mod grid;

pub use grid::HeightGrid;
