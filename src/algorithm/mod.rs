/// Fixed-width axis masks
pub mod bitset;
/// Directional projection and forbidden arrays
pub mod constraints;
/// Depth-first search driver and configuration
pub mod executor;
/// Marker commit and retraction rules
pub mod propagation;
/// Symmetry-breaking and bounding rules
pub mod pruning;
/// Diagnostic counters
pub mod statistics;
/// Best placement bookkeeping
pub mod tracker;
