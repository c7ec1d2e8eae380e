//! Shared helpers for the 2D Hilbert curve at both index widths.
use crate::{ops::b2i, spec::GridIndex};

/// Rotate/flip the accumulated point so a sub-curve of side `n` lines up with
/// the entry and exit corners of quadrant `(rx, ry)`.
///
/// `map` and `map_inverse` must both go through this function; any change to
/// it yields a different curve on which the two no longer invert each other.
/// Both coordinates must already lie inside the sub-grid, `0 <= x, y < n`.
#[inline]
pub fn rotate<I: GridIndex>(n: I, x: I, y: I, rx: bool, ry: bool) -> (I, I) {
    debug_assert!(
        x >= I::zero() && x < n && y >= I::zero() && y < n,
        "({x}, {y}) outside sub-grid of side {n}"
    );
    if ry {
        return (x, y);
    }
    if rx {
        (n - I::one() - y, n - I::one() - x)
    } else {
        (y, x)
    }
}

/// Position of quadrant `(rx, ry)` in the curve's visiting order (0..4).
#[inline]
pub const fn quadrant_rank(rx: bool, ry: bool) -> u8 {
    (3 * b2i(rx)) ^ b2i(ry)
}
