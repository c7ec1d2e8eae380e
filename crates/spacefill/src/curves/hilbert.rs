use crate::{
    curves::hilbert_common::{quadrant_rank, rotate},
    error::{self, Error},
    spacefilling::SpaceFilling,
    spec::GridSpec,
};

/// Hilbert curve on a power-of-two grid, indexed with `i32`.
///
/// Negative arguments are accepted by the signatures and rejected as out of
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hilbert {
    /// Validated grid shape.
    spec: GridSpec<i32>,
}

impl Hilbert {
    /// Largest side whose cell count fits in an `i32` (`2^15`, `2^30` cells).
    pub const MAX_SIDE: i32 = 1 << 15;

    /// Construct a Hilbert curve covering an `n`×`n` grid. `n` must be a
    /// positive power of two no larger than [`Self::MAX_SIDE`].
    pub fn new(n: i32) -> error::Result<Self> {
        Ok(Self {
            spec: GridSpec::power_of_two(n, Self::MAX_SIDE)?,
        })
    }

    /// The order of the curve (`n == 2^order`).
    pub fn order(&self) -> u32 {
        self.spec.order()
    }
}

impl SpaceFilling for Hilbert {
    type Index = i32;

    fn name(&self) -> &'static str {
        "Hilbert"
    }

    fn info(&self) -> &'static str {
        "Classic continuous space-filling curve with excellent locality.\n\
        Defined recursively via quadrant rotations/reflections on a\n\
        power-of-two grid."
    }

    fn dimensions(&self) -> (i32, i32) {
        (self.spec.side(), self.spec.side())
    }

    fn length(&self) -> i32 {
        self.spec.length()
    }

    fn map(&self, t: i32) -> error::Result<(i32, i32)> {
        if !self.spec.contains_index(t) {
            return Err(Error::OutOfRange);
        }

        let (mut x, mut y) = (0, 0);
        let mut t = t;
        let mut i = 1;
        while i < self.spec.side() {
            let rx = 1 & (t / 2);
            let ry = 1 & (t ^ rx);
            (x, y) = rotate(i, x, y, rx != 0, ry != 0);
            x += i * rx;
            y += i * ry;
            t /= 4;
            i *= 2;
        }
        Ok((x, y))
    }

    fn map_inverse(&self, x: i32, y: i32) -> error::Result<i32> {
        if !self.spec.contains_point(x, y) {
            return Err(Error::OutOfRange);
        }

        let (mut x, mut y) = (x, y);
        let mut t = 0;
        let mut i = self.spec.side() / 2;
        while i > 0 {
            let rx = x & i != 0;
            let ry = y & i != 0;
            t += i * i * i32::from(quadrant_rank(rx, ry));
            // Only the bits below `i` matter to the remaining levels.
            (x, y) = rotate(i, x & (i - 1), y & (i - 1), rx, ry);
            i /= 2;
        }
        debug_assert!(self.spec.contains_index(t));
        Ok(t)
    }
}
