//! Index/coordinate mapping for 2D space‑filling curves on square grids.
//!
//! Every curve maps a step `t` in `[0, N*N)` to the grid cell `(x, y)` it
//! visits, and (where supported) back again. All curves implement the
//! [`SpaceFilling`] trait and come in two index widths: `i32` for everyday
//! grids and `u64` for very large ones.
//!
//! # Supported Curves
//!
//! - Hilbert (`N` a power of two), both directions
//! - Peano (`N` a power of three), forward only
//!
//! ```
//! use spacefill::{SpaceFilling, curves::hilbert::Hilbert};
//!
//! let curve = Hilbert::new(16)?;
//! assert_eq!(curve.map(96)?, (4, 12));
//! assert_eq!(curve.map_inverse(4, 12)?, 96);
//! # Ok::<(), spacefill::error::Error>(())
//! ```

/// Implementations of specific space‑filling curves.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Small numeric helpers shared by curve implementations.
pub mod ops;
/// The `SpaceFilling` trait.
mod spacefilling;
/// Grid specification helpers shared across curves.
pub mod spec;
/// Iteration over the steps of a curve.
pub mod walk;

pub use crate::{
    spacefilling::SpaceFilling,
    walk::{walk, walk_range},
};

/// Central registry of curve metadata and constructors.
pub mod registry;

/// Construct a 32-bit curve by name for a `size`×`size` grid.
///
/// Returns an error if the size is invalid for the curve or the name is
/// unknown.
pub fn curve_from_name(
    name: &str,
    size: i32,
) -> error::Result<Box<dyn SpaceFilling<Index = i32> + 'static>> {
    registry::construct(name, size)
}

/// Construct a 64-bit curve by name for a `size`×`size` grid.
pub fn curve64_from_name(
    name: &str,
    size: u64,
) -> error::Result<Box<dyn SpaceFilling<Index = u64> + 'static>> {
    registry::construct64(name, size)
}
