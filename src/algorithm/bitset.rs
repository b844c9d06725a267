//! Fixed-width bitsets over one coordinate axis

use bitvec::prelude::*;
use std::ops::{BitOr, BitOrAssign};

/// Number of coordinate values a single mask can address
pub const MASK_WIDTH: usize = u32::BITS as usize;

/// Fixed-width bitset over the values of one coordinate axis
///
/// Bit `v` stands for coordinate value `v` (0-based). Masks are `Copy` and
/// compare as unsigned integers, so the highest coordinate value dominates the
/// ordering used by the symmetry-breaking rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisMask(u32);

impl AxisMask {
    /// Mask with no values present
    pub const EMPTY: Self = Self(0);

    /// Mask with every addressable value present, used as a "no constraint" sentinel
    pub const FULL: Self = Self(u32::MAX);

    /// Mask holding only `value`
    pub const fn single(value: usize) -> Self {
        debug_assert!(value < MASK_WIDTH);
        Self(1 << value)
    }

    /// Mask holding every value strictly below `limit`
    pub const fn below(limit: usize) -> Self {
        if limit >= MASK_WIDTH {
            Self::FULL
        } else {
            Self((1 << limit) - 1)
        }
    }

    /// Test value membership
    pub const fn contains(self, value: usize) -> bool {
        value < MASK_WIDTH && self.0 & (1 << value) != 0
    }

    /// Test if no values are present
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count values present
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Union of both masks
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Values of `self` not present in `other`
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Flip the bits of `other`, which must all be present for the inverse of an insert
    pub const fn toggle(&mut self, other: Self) {
        self.0 ^= other.0;
    }

    /// Values present, in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.view_bits::<Lsb0>().iter_ones()
    }

}

impl BitOr for AxisMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for AxisMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
