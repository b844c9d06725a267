//! Square grid of pillars, each empty or holding one marker height
//!
//! Heights are stored 1-based (`1..=order`) with 0 meaning an empty pillar,
//! matching the glyphs used when rendering.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::EMPTY_GLYPH;

/// Marker heights over an `order`×`order` grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightGrid {
    heights: Array2<u8>,
    order: usize,
}

impl HeightGrid {
    /// Create a grid with every pillar empty
    pub fn new(order: usize) -> Self {
        Self {
            heights: Array2::zeros((order, order)),
            order,
        }
    }

    /// Height at (`x`, `y`), or `None` for an empty pillar or a cell outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.heights.get([x, y]).copied().filter(|&height| height != 0)
    }

    /// Put a marker of `height` (1-based) at (`x`, `y`)
    pub fn place(&mut self, x: usize, y: usize, height: u8) {
        debug_assert!(height >= 1 && usize::from(height) <= self.order);
        debug_assert!(
            x < self.order && y < self.order,
            "pillar ({x}, {y}) outside {0}x{0} grid",
            self.order
        );
        if let Some(cell) = self.heights.get_mut([x, y]) {
            *cell = height;
        }
    }

    /// Empty the pillar at (`x`, `y`)
    pub fn clear(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.heights.get_mut([x, y]) {
            *cell = 0;
        }
    }

    /// Overwrite this grid with the contents of `other` without reallocating
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.order, other.order);
        self.heights.assign(&other.heights);
    }

    /// Number of occupied pillars
    pub fn occupied(&self) -> usize {
        self.heights.iter().filter(|&&height| height != 0).count()
    }

    /// Number of occupied pillars in row `x`
    pub fn occupied_in_row(&self, x: usize) -> usize {
        if x >= self.order {
            return 0;
        }
        self.heights.row(x).iter().filter(|&&height| height != 0).count()
    }

    /// One string per row, one glyph per pillar separated by spaces
    pub fn render_rows(&self) -> Vec<String> {
        self.heights
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|&height| glyph(height).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

/// Display glyph for a stored height: `*` when empty, digits up to 9, then letters
pub const fn glyph(height: u8) -> char {
    match height {
        0 => EMPTY_GLYPH,
        1..=9 => (b'0' + height) as char,
        _ => (b'A' + (height - 10)) as char,
    }
}

impl fmt::Display for HeightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
