//! Grid validation shared by every curve.
//!
//! A [`GridSpec`] is the only way a curve learns its side length, so a curve
//! instance can never hold a size that failed validation.

use std::fmt;

use num_traits::PrimInt;

use crate::{
    error::{Error, Result},
    ops,
};

/// Sealing module so only the crate's index widths implement [`GridIndex`].
mod sealed {
    /// Marker implemented for `i32` and `u64`.
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for u64 {}
}

/// Integer type used for curve indices and coordinates.
///
/// Implemented for `i32` (the signed 32-bit domain) and `u64` (the unsigned
/// 64-bit domain). Arithmetic, overflow checks and conversions come from
/// [`PrimInt`].
pub trait GridIndex:
    PrimInt + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Power-of-three test for a positive value.
    fn is_power_of_three(self) -> bool;
}

impl GridIndex for i32 {
    fn is_power_of_three(self) -> bool {
        ops::is_power_of_three(f64::from(self))
    }
}

impl GridIndex for u64 {
    fn is_power_of_three(self) -> bool {
        ops::is_power_of_three_u64(self)
    }
}

/// Validated square grid: side length, cached `side * side`, and curve order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec<I> {
    /// Grid side length `N`.
    side: I,
    /// Number of cells, `N * N`.
    length: I,
    /// Recursion depth: `N == base^order`.
    order: u32,
}

impl<I: GridIndex> GridSpec<I> {
    /// Validate a Hilbert grid side. `max` is only used to describe the limit
    /// when `side * side` overflows.
    pub fn power_of_two(side: I, max: I) -> Result<Self> {
        if side <= I::zero() {
            return Err(Error::NotPositive);
        }
        if side.count_ones() != 1 {
            return Err(Error::NotPowerOfTwo);
        }
        Self::sized(side, max, 2)
    }

    /// Validate a Peano grid side. `max` is only used to describe the limit
    /// when `side * side` overflows.
    pub fn power_of_three(side: I, max: I) -> Result<Self> {
        if side <= I::zero() {
            return Err(Error::NotPositive);
        }
        if !side.is_power_of_three() {
            return Err(Error::NotPowerOfThree);
        }
        Self::sized(side, max, 3)
    }

    /// Compute `side * side` with overflow checking and derive the order.
    fn sized(side: I, max: I, base: u64) -> Result<Self> {
        let wide = side.to_u64().unwrap_or_default();
        let length = side.checked_mul(&side).ok_or(Error::TooLarge {
            side: wide,
            max: max.to_u64().unwrap_or_default(),
        })?;
        Ok(Self {
            side,
            length,
            order: wide.ilog(base),
        })
    }

    /// Grid side length `N`.
    pub fn side(&self) -> I {
        self.side
    }

    /// Number of cells, `N * N`.
    pub fn length(&self) -> I {
        self.length
    }

    /// Number of recursion levels.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Whether `t` is a valid curve index.
    pub fn contains_index(&self, t: I) -> bool {
        t >= I::zero() && t < self.length
    }

    /// Whether `(x, y)` lies on the grid.
    pub fn contains_point(&self, x: I, y: I) -> bool {
        x >= I::zero() && x < self.side && y >= I::zero() && y < self.side
    }
}
