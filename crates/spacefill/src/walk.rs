//! Iteration over every step of a curve.

use std::ops::Range;

use num_traits::{one, zero};

use crate::SpaceFilling;

/// Iterator over `(t, (x, y))` for consecutive steps of a curve.
///
/// Created by [`walk`] or [`walk_range`].
#[derive(Debug)]
pub struct Walk<'a, C: SpaceFilling + ?Sized> {
    /// Curve being walked.
    curve: &'a C,
    /// Next index to map.
    next: C::Index,
    /// Exclusive end index.
    end: C::Index,
}

impl<C: SpaceFilling + ?Sized> Iterator for Walk<'_, C> {
    type Item = (C::Index, (C::Index, C::Index));

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let t = self.next;
        // `next..end` is clamped to `[0, length)` on construction.
        let point = self.curve.map(t);
        debug_assert!(point.is_ok(), "walk reached unmappable step {t}");
        let point = point.ok()?;
        self.next = t + one();
        Some((t, point))
    }
}

/// Walk the whole curve, from step `0` to `N*N - 1`.
pub fn walk<C: SpaceFilling + ?Sized>(curve: &C) -> Walk<'_, C> {
    Walk {
        curve,
        next: zero(),
        end: curve.length(),
    }
}

/// Walk the steps in `range`, clamped to the curve's length.
pub fn walk_range<C: SpaceFilling + ?Sized>(curve: &C, range: Range<C::Index>) -> Walk<'_, C> {
    Walk {
        curve,
        next: range.start.max(zero()),
        end: range.end.min(curve.length()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        curves::{hilbert::Hilbert, peano64::Peano64},
        error,
    };

    #[test]
    fn walks_every_step() -> error::Result<()> {
        let h = Hilbert::new(4)?;
        let steps: Vec<_> = walk(&h).collect();
        assert_eq!(steps.len(), 16);
        assert_eq!(steps[0], (0, (0, 0)));
        assert_eq!(steps[15], (15, (3, 0)));
        Ok(())
    }

    #[test]
    fn range_is_clamped() -> error::Result<()> {
        let p = Peano64::new(3)?;
        let steps: Vec<_> = walk_range(&p, 6..100).collect();
        assert_eq!(steps, [(6, (2, 0)), (7, (2, 1)), (8, (2, 2))]);

        let h = Hilbert::new(4)?;
        assert_eq!(walk_range(&h, -5..2).count(), 2);
        assert_eq!(walk_range(&h, 9..3).count(), 0);
        Ok(())
    }

    #[test]
    fn yields_every_step_of_each_range() -> error::Result<()> {
        let h = Hilbert::new(8)?;
        for (start, end) in [(0, 64), (-3, 70), (63, 64), (10, 20)] {
            let steps: Vec<_> = walk_range(&h, start..end).map(|(t, _)| t).collect();
            let expected: Vec<_> = (start.max(0)..end.min(64)).collect();
            assert_eq!(steps, expected, "{start}..{end}");
        }
        Ok(())
    }

    #[test]
    fn walks_trait_objects() -> error::Result<()> {
        let curve = crate::curve_from_name("peano", 9)?;
        assert_eq!(walk(curve.as_ref()).count(), 81);
        Ok(())
    }
}
