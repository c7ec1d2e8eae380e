use std::fmt;

use crate::{error, spec::GridIndex};

/// Common interface for all 2D space-filling curves in this crate.
///
/// A curve is built once for a fixed side length `N` and then maps between
/// indices in `[0, N*N)` and cells in `[0, N) × [0, N)`. Implementations are
/// immutable, so a single instance can be shared freely between threads.
pub trait SpaceFilling: fmt::Debug + Send + Sync {
    /// Integer type for both indices and coordinates.
    type Index: GridIndex;

    /// Display name of the curve.
    fn name(&self) -> &'static str;

    /// Short description of the curve.
    fn info(&self) -> &'static str;

    /// Width and height of the grid. Always `(N, N)`.
    fn dimensions(&self) -> (Self::Index, Self::Index);

    /// Number of cells on the curve, `N * N`.
    fn length(&self) -> Self::Index;

    /// The cell visited at step `t`.
    ///
    /// Fails with [`error::Error::OutOfRange`] unless `0 <= t < N*N`.
    fn map(&self, t: Self::Index) -> error::Result<(Self::Index, Self::Index)>;

    /// The step at which cell `(x, y)` is visited.
    ///
    /// Fails with [`error::Error::OutOfRange`] unless both coordinates lie in
    /// `[0, N)`.
    fn map_inverse(&self, x: Self::Index, y: Self::Index) -> error::Result<Self::Index>;
}
