use crate::{
    curves::peano_common::{Flip, block_cell},
    error::{self, Error},
    spacefilling::SpaceFilling,
    spec::GridSpec,
};

/// Peano curve on a power-of-three grid, indexed with `u64`.
///
/// Same curve as [`super::peano::Peano`], for grids too large for `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peano64 {
    /// Validated grid shape.
    spec: GridSpec<u64>,
}

impl Peano64 {
    /// Largest side whose cell count fits in a `u64` (`3^20`).
    pub const MAX_SIDE: u64 = 3_486_784_401;

    /// Construct a Peano curve covering an `n`×`n` grid. `n` must be a
    /// non-zero power of three no larger than [`Self::MAX_SIDE`].
    pub fn new(n: u64) -> error::Result<Self> {
        Ok(Self {
            spec: GridSpec::power_of_three(n, Self::MAX_SIDE)?,
        })
    }

    /// The order of the curve (`n == 3^order`).
    pub fn order(&self) -> u32 {
        self.spec.order()
    }
}

impl SpaceFilling for Peano64 {
    type Index = u64;

    fn name(&self) -> &'static str {
        "Peano"
    }

    fn info(&self) -> &'static str {
        "Peano curve with 64-bit indices, for grids up to 3^20 on a side.\n\
        Forward mapping only."
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
            let digit = (t % 9) as u8;
            let (column, row) = block_cell(digit);
            // The innermost level has nothing to reflect yet.
            if i > 1 {
                (x, y) = Flip::for_digit(digit).apply(i - 1, x, y);
            }
            x += u64::from(column) * i;
            y += u64::from(row) * i;
            t /= 9;
            i *= 3;
        }
        Ok((x, y))
    }

    fn map_inverse(&self, x: u64, y: u64) -> error::Result<u64> {
        if !self.spec.contains_point(x, y) {
            return Err(Error::OutOfRange);
        }
        Err(Error::Unimplemented(self.name()))
    }
}
