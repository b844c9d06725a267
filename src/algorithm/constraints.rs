//! Directional projection and forbidden bitsets for the three placement axes

// Coordinates outside the grid are invariant violations; an indexing panic is the intended failure
#![allow(clippy::indexing_slicing)]

use crate::algorithm::bitset::AxisMask;
use crate::io::configuration::MAX_ORDER;

/// Storage slots per array: one per coordinate value plus a trailing sentinel
pub const SLOTS: usize = MAX_ORDER + 1;

/// Ordered pair of axes naming one directional array
///
/// The first axis is the pivot used as the array index, the second is the
/// axis whose values are recorded in the mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPair {
    /// Indexed by row, mask over columns
    RowColumn,
    /// Indexed by row, mask over heights
    RowHeight,
    /// Indexed by column, mask over rows
    ColumnRow,
    /// Indexed by column, mask over heights
    ColumnHeight,
    /// Indexed by height, mask over rows
    HeightRow,
    /// Indexed by height, mask over columns
    HeightColumn,
}

impl AxisPair {
    /// Every pair, in storage order
    pub const ALL: [Self; 6] = [
        Self::RowColumn,
        Self::RowHeight,
        Self::ColumnRow,
        Self::ColumnHeight,
        Self::HeightRow,
        Self::HeightColumn,
    ];

    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// The twelve directional arrays that define which placements remain legal
///
/// Projections record committed markers; forbidden masks record values a
/// future marker may not take. Everything lives inline, so cloning the store
/// is a plain copy and no operation allocates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintStore {
    pub(crate) order: usize,
    pub(crate) projections: [[AxisMask; SLOTS]; 6],
    pub(crate) forbidden: [[AxisMask; SLOTS]; 6],
}

impl ConstraintStore {
    /// Create an empty store for an `order`×`order` grid
    ///
    /// The column→row projection gets a full sentinel at index `order` so the
    /// column-order comparison against the next column never needs a boundary
    /// branch.
    ///
    /// # Panics
    ///
    /// Panics if `order` is zero or exceeds [`MAX_ORDER`]
    pub fn new(order: usize) -> Self {
        assert!(
            (1..=MAX_ORDER).contains(&order),
            "grid order {order} outside 1..={MAX_ORDER}"
        );
        let mut projections = [[AxisMask::EMPTY; SLOTS]; 6];
        projections[AxisPair::ColumnRow.slot()][order] = AxisMask::FULL;
        Self {
            order,
            projections,
            forbidden: [[AxisMask::EMPTY; SLOTS]; 6],
        }
    }

    /// Current forbidden mask for `pair` at pivot value `index`
    pub const fn read_forbidden(&self, pair: AxisPair, index: usize) -> AxisMask {
        debug_assert!(index < self.order);
        self.forbidden[pair.slot()][index]
    }

    /// Current projection mask for `pair` at pivot value `index`
    ///
    /// Index `order` is readable for [`AxisPair::ColumnRow`] and returns the sentinel.
    pub const fn read_projection(&self, pair: AxisPair, index: usize) -> AxisMask {
        debug_assert!(index <= self.order);
        self.projections[pair.slot()][index]
    }

    /// Whether the pillar at (`x`, `y`) is excluded outright
    pub const fn cell_forbidden(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.order && y < self.order);
        self.read_forbidden(AxisPair::RowColumn, x).contains(y)
            || self.read_forbidden(AxisPair::ColumnRow, y).contains(x)
    }

    /// Heights below `limit` allowed by both the row and the column of (`x`, `y`)
    ///
    /// Candidates must still pass [`Self::height_admits`], which consults the
    /// height-pivoted arrays.
    pub fn admissible_heights(&self, x: usize, y: usize, limit: usize) -> AxisMask {
        debug_assert!(x < self.order && y < self.order && limit <= self.order);
        let blocked = self.read_forbidden(AxisPair::RowHeight, x)
            | self.read_forbidden(AxisPair::ColumnHeight, y);
        AxisMask::below(limit).without(blocked)
    }

    /// Whether height `z` still accepts a marker in row `x` and column `y`
    pub const fn height_admits(&self, x: usize, y: usize, z: usize) -> bool {
        debug_assert!(x < self.order && y < self.order && z < self.order);
        !(self.read_forbidden(AxisPair::HeightRow, z).contains(x)
            || self.read_forbidden(AxisPair::HeightColumn, z).contains(y))
    }

    /// Number of markers recorded by the row→column projections
    pub fn projected_markers(&self) -> usize {
        self.projections[AxisPair::RowColumn.slot()][..self.order]
            .iter()
            .map(|mask| mask.count())
            .sum()
    }

    /// Check that no forbidden or projection bit lies outside the grid
    ///
    /// Sentinel slots are ignored.
    pub fn within_bounds(&self) -> bool {
        let valid = AxisMask::below(self.order);
        let in_range = |arrays: &[[AxisMask; SLOTS]; 6]| {
            arrays
                .iter()
                .all(|array| array[..self.order].iter().all(|mask| mask.without(valid).is_empty()))
        };
        in_range(&self.projections) && in_range(&self.forbidden)
    }
}
