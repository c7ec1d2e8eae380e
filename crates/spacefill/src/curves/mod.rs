/// Hilbert curve over `i32` indices.
pub mod hilbert;
/// Hilbert curve over `u64` indices.
pub mod hilbert64;
/// Quadrant rotation shared by both Hilbert widths.
mod hilbert_common;
/// Peano curve over `i32` indices.
pub mod peano;
/// Peano curve over `u64` indices.
pub mod peano64;
/// Block layout and reflection table shared by both Peano widths.
mod peano_common;
