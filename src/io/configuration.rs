//! Search limits and runtime configuration defaults

// Masks are 32 bits wide; one bit stays free so height limits up to the order fit
/// Largest supported grid order
pub const MAX_ORDER: usize = 31;

/// Grid order used when none is given
pub const DEFAULT_ORDER: usize = 5;

// Progress reporting
/// Interval between progress redraws in milliseconds
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 1000;
/// Spinner animation tick in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
/// Visited cells between two published progress snapshots
pub const DEFAULT_CHECKPOINT_INTERVAL: u64 = 1 << 16;

// Rendering
/// Glyph for an empty pillar
pub const EMPTY_GLYPH: char = '*';
