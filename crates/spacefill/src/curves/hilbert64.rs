use crate::{
    curves::hilbert_common::{quadrant_rank, rotate},
    error::{self, Error},
    spacefilling::SpaceFilling,
    spec::GridSpec,
};

/// Hilbert curve on a power-of-two grid, indexed with `u64`.
///
/// Same curve as [`super::hilbert::Hilbert`], for grids too large for `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hilbert64 {
    /// Validated grid shape.
    spec: GridSpec<u64>,
}

impl Hilbert64 {
    /// Largest side whose cell count fits in a `u64` (`2^31`, `2^62` cells).
    ///
    /// `2^32` would need `2^64` indices, one more than `u64` holds.
    pub const MAX_SIDE: u64 = 1 << 31;

    /// Construct a Hilbert curve covering an `n`×`n` grid. `n` must be a
    /// non-zero power of two no larger than [`Self::MAX_SIDE`].
    pub fn new(n: u64) -> error::Result<Self> {
        Ok(Self {
            spec: GridSpec::power_of_two(n, Self::MAX_SIDE)?,
        })
    }

    /// The order of the curve (`n == 2^order`).
    pub fn order(&self) -> u32 {
        self.spec.order()
    }
}

impl SpaceFilling for Hilbert64 {
    type Index = u64;

    fn name(&self) -> &'static str {
        "Hilbert"
    }

    fn info(&self) -> &'static str {
        "Hilbert curve with 64-bit indices, for grids up to 2^31 on a side."
    }

    fn dimensions(&self) -> (u64, u64) {
        (self.spec.side(), self.spec.side())
    }

    fn length(&self) -> u64 {
        self.spec.length()
    }

    fn map(&self, t: u64) -> error::Result<(u64, u64)> {
        if !self.spec.contains_index(t) {
            return Err(Error::OutOfRange);
        }

        let (mut x, mut y) = (0, 0);
        let mut t = t;
        let mut i = 1;
        while i < self.spec.side() {
            let rx = t & 2 == 2;
            let ry = (t & 1 == 1) ^ rx;
            (x, y) = rotate(i, x, y, rx, ry);
            if rx {
                x += i;
            }
            if ry {
                y += i;
            }
            t /= 4;
            i *= 2;
        }
        Ok((x, y))
    }

    fn map_inverse(&self, x: u64, y: u64) -> error::Result<u64> {
        if !self.spec.contains_point(x, y) {
            return Err(Error::OutOfRange);
        }

        let (mut x, mut y) = (x, y);
        let mut t = 0;
        let mut i = self.spec.side() / 2;
        while i > 0 {
            let rx = x & i != 0;
            let ry = y & i != 0;
            // i <= 2^30, so i * i * 3 stays well inside u64.
            t += i * i * u64::from(quadrant_rank(rx, ry));
            // Only the bits below `i` matter to the remaining levels.
            (x, y) = rotate(i, x & (i - 1), y & (i - 1), rx, ry);
            i /= 2;
        }
        Ok(t)
    }
}
