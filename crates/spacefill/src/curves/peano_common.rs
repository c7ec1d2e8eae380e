//! Shared helpers for the 2D Peano curve at both index widths.
//!
//! Each recursion level consumes one base-9 digit of the index. The digit picks
//! a cell of a 3×3 block, visited column by column with the middle column
//! running backwards, and a reflection for the sub-curve already built inside
//! that cell.
use crate::spec::GridIndex;

/// Reflection applied to a sub-curve before it is placed in its block cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Leave the sub-curve as is.
    None,
    /// Mirror horizontally.
    X,
    /// Mirror vertically.
    Y,
    /// Mirror both ways.
    Both,
}

impl Flip {
    /// Reflection for base-9 digit `digit`.
    pub const fn for_digit(digit: u8) -> Self {
        match digit {
            1 | 7 => Self::X,
            3 | 5 => Self::Y,
            4 => Self::Both,
            _ => Self::None,
        }
    }

    /// Apply the reflection inside a sub-grid whose largest coordinate is `n`.
    #[inline]
    pub fn apply<I: GridIndex>(self, n: I, x: I, y: I) -> (I, I) {
        match self {
            Self::None => (x, y),
            Self::X => (n - x, y),
            Self::Y => (x, n - y),
            Self::Both => (n - x, n - y),
        }
    }
}

/// Cell `(column, row)` of the 3×3 block visited at base-9 digit `digit`.
#[inline]
pub const fn block_cell(digit: u8) -> (u8, u8) {
    let column = digit / 3;
    let row = digit % 3;
    if column == 1 {
        (column, 2 - row)
    } else {
        (column, row)
    }
}
