//! Marker commit and retraction rules for the directional bitsets
//!
//! Committing a marker first records it in all six projections, then
//! overwrites six forbidden masks with their prior value joined with a peer
//! projection. The forbidden masks therefore accumulate through whichever
//! markers the peer projection holds at that moment: the outcome depends on
//! placement order, so the update sequence below is fixed.

// Coordinates outside the grid are invariant violations; an indexing panic is the intended failure
#![allow(clippy::indexing_slicing)]

use crate::algorithm::bitset::AxisMask;
use crate::algorithm::constraints::{AxisPair, ConstraintStore};

/// Forbidden masks overwritten by one placement, captured for exact restoration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a placement must be undone with the state it returned"]
pub struct SavedState {
    row_columns: AxisMask,
    column_rows: AxisMask,
    row_heights: AxisMask,
    height_rows: AxisMask,
    column_heights: AxisMask,
    height_columns: AxisMask,
}

impl ConstraintStore {
    /// Commit a marker at row `x`, column `y`, height index `z`
    ///
    /// Returns the overwritten forbidden masks; pass them unchanged to
    /// [`Self::undo_placement`] before touching any sibling placement.
    pub fn apply_placement(&mut self, x: usize, y: usize, z: usize) -> SavedState {
        debug_assert!(x < self.order && y < self.order && z < self.order);
        let (mask_x, mask_y, mask_z) = (AxisMask::single(x), AxisMask::single(y), AxisMask::single(z));

        let saved = SavedState {
            row_columns: self.forbidden[AxisPair::RowColumn.slot()][x],
            column_rows: self.forbidden[AxisPair::ColumnRow.slot()][y],
            row_heights: self.forbidden[AxisPair::RowHeight.slot()][x],
            height_rows: self.forbidden[AxisPair::HeightRow.slot()][z],
            column_heights: self.forbidden[AxisPair::ColumnHeight.slot()][y],
            height_columns: self.forbidden[AxisPair::HeightColumn.slot()][z],
        };

        let projections = &mut self.projections;
        projections[AxisPair::ColumnRow.slot()][y] |= mask_x;
        projections[AxisPair::RowColumn.slot()][x] |= mask_y;
        projections[AxisPair::RowHeight.slot()][x] |= mask_z;
        projections[AxisPair::ColumnHeight.slot()][y] |= mask_z;
        projections[AxisPair::HeightColumn.slot()][z] |= mask_y;
        projections[AxisPair::HeightRow.slot()][z] |= mask_x;

        let projected = &self.projections;
        let forbidden = &mut self.forbidden;
        forbidden[AxisPair::RowColumn.slot()][x] =
            saved.row_columns | projected[AxisPair::HeightColumn.slot()][z];
        forbidden[AxisPair::ColumnRow.slot()][y] =
            saved.column_rows | projected[AxisPair::HeightRow.slot()][z];
        forbidden[AxisPair::RowHeight.slot()][x] =
            saved.row_heights | projected[AxisPair::ColumnHeight.slot()][y];
        forbidden[AxisPair::HeightRow.slot()][z] =
            saved.height_rows | projected[AxisPair::ColumnRow.slot()][y];
        forbidden[AxisPair::ColumnHeight.slot()][y] =
            saved.column_heights | projected[AxisPair::RowHeight.slot()][x];
        forbidden[AxisPair::HeightColumn.slot()][z] =
            saved.height_columns | projected[AxisPair::RowColumn.slot()][x];

        saved
    }

    /// Retract the marker committed by the matching [`Self::apply_placement`]
    ///
    /// Forbidden masks are reassigned from `saved`; projections drop the
    /// marker's bits, which the placement must have been the one to set.
    pub const fn undo_placement(&mut self, x: usize, y: usize, z: usize, saved: SavedState) {
        debug_assert!(x < self.order && y < self.order && z < self.order);
        let (mask_x, mask_y, mask_z) = (AxisMask::single(x), AxisMask::single(y), AxisMask::single(z));

        let forbidden = &mut self.forbidden;
        forbidden[AxisPair::RowColumn.slot()][x] = saved.row_columns;
        forbidden[AxisPair::ColumnRow.slot()][y] = saved.column_rows;
        forbidden[AxisPair::RowHeight.slot()][x] = saved.row_heights;
        forbidden[AxisPair::HeightRow.slot()][z] = saved.height_rows;
        forbidden[AxisPair::ColumnHeight.slot()][y] = saved.column_heights;
        forbidden[AxisPair::HeightColumn.slot()][z] = saved.height_columns;

        let projections = &mut self.projections;
        debug_assert!(projections[AxisPair::RowColumn.slot()][x].contains(y));
        projections[AxisPair::HeightRow.slot()][z].toggle(mask_x);
        projections[AxisPair::HeightColumn.slot()][z].toggle(mask_y);
        projections[AxisPair::ColumnHeight.slot()][y].toggle(mask_z);
        projections[AxisPair::RowHeight.slot()][x].toggle(mask_z);
        projections[AxisPair::RowColumn.slot()][x].toggle(mask_y);
        projections[AxisPair::ColumnRow.slot()][y].toggle(mask_x);
    }
}
