use crate::{
    curves::peano_common::{Flip, block_cell},
    error::{self, Error},
    spacefilling::SpaceFilling,
    spec::GridSpec,
};

/// Peano curve on a power-of-three grid, indexed with `i32`.
///
/// Only the forward direction is available: [`SpaceFilling::map_inverse`]
/// validates its arguments and then reports [`Error::Unimplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peano {
    /// Validated grid shape.
    spec: GridSpec<i32>,
}

impl Peano {
    /// Largest side whose cell count fits in an `i32` (`3^9`).
    pub const MAX_SIDE: i32 = 19_683;

    /// Construct a Peano curve covering an `n`×`n` grid. `n` must be a
    /// positive power of three no larger than [`Self::MAX_SIDE`].
    pub fn new(n: i32) -> error::Result<Self> {
        Ok(Self {
            spec: GridSpec::power_of_three(n, Self::MAX_SIDE)?,
        })
    }

    /// The order of the curve (`n == 3^order`).
    pub fn order(&self) -> u32 {
        self.spec.order()
    }
}

impl SpaceFilling for Peano {
    type Index = i32;

    fn name(&self) -> &'static str {
        "Peano"
    }

    fn info(&self) -> &'static str {
        "The original space-filling curve (1890). Each 3x3 block is walked as\n\
        a serpentine, with sub-blocks mirrored so the path stays continuous.\n\
        Forward mapping only."
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
            let digit = (t % 9) as u8;
            let (column, row) = block_cell(digit);
            if i > 1 {
                (x, y) = Flip::for_digit(digit).apply(i - 1, x, y);
            }
            x += i32::from(column) * i;
            y += i32::from(row) * i;
            t /= 9;
            i *= 3;
        }
        Ok((x, y))
    }

    fn map_inverse(&self, x: i32, y: i32) -> error::Result<i32> {
        if !self.spec.contains_point(x, y) {
            return Err(Error::OutOfRange);
        }
        Err(Error::Unimplemented(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new() -> error::Result<()> {
        for n in [1, 3, 9, 27] {
            let p = Peano::new(n)?;
            assert_eq!(p.dimensions(), (n, n));
            assert_eq!(p.length(), n * n);
        }
        assert_eq!(Peano::new(27)?.order(), 3);

        assert_eq!(Peano::new(0), Err(Error::NotPositive));
        assert_eq!(Peano::new(-9), Err(Error::NotPositive));
        for n in [2, 4, 5, 8] {
            assert_eq!(Peano::new(n), Err(Error::NotPowerOfThree), "n = {n}");
        }
        Ok(())
    }

    #[test]
    fn size_limit() {
        assert!(Peano::new(Peano::MAX_SIDE).is_ok());
        assert_eq!(
            Peano::new(Peano::MAX_SIDE * 3),
            Err(Error::TooLarge {
                side: 59_049,
                max: 19_683,
            })
        );
    }

    #[test]
    fn map() -> error::Result<()> {
        let p = Peano::new(9)?;
        let expected = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (2, 3),
        ];
        for (t, point) in (0..).zip(expected) {
            assert_eq!(p.map(t)?, point, "map({t})");
        }
        assert_eq!(p.map(80)?, (8, 8));
        Ok(())
    }

    #[test]
    fn range_errors() -> error::Result<()> {
        let p = Peano::new(9)?;
        assert_eq!(p.map(-1), Err(Error::OutOfRange));
        assert_eq!(p.map(81), Err(Error::OutOfRange));
        assert_eq!(p.map_inverse(-1, 0), Err(Error::OutOfRange));
        assert_eq!(p.map_inverse(0, 9), Err(Error::OutOfRange));
        Ok(())
    }

    #[test]
    fn inverse_is_unimplemented() -> error::Result<()> {
        let p = Peano::new(9)?;
        assert_eq!(p.map_inverse(0, 0), Err(Error::Unimplemented("Peano")));
        // The instance stays usable afterwards.
        assert_eq!(p.map(3)?, (1, 2));
        Ok(())
    }

    #[test]
    fn covers_grid() -> error::Result<()> {
        let p = Peano::new(27)?;
        let mut seen = HashSet::new();
        for t in 0..p.length() {
            let (x, y) = p.map(t)?;
            assert!((0..27).contains(&x) && (0..27).contains(&y));
            assert!(seen.insert((x, y)), "({x}, {y}) visited twice");
        }
        assert_eq!(seen.len(), 729);
        Ok(())
    }
}
