//! Error type shared by every curve and the registry.

use std::result;

use thiserror::Error;

/// Failures reported by curve construction and mapping.
///
/// Construction errors mean no curve was built. Mapping errors leave the curve
/// untouched and usable for later calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid side was zero or negative.
    #[error("N must be greater than zero")]
    NotPositive,
    /// A Hilbert grid side was not a power of two.
    #[error("N must be a power of two")]
    NotPowerOfTwo,
    /// A Peano grid side was not a power of three.
    #[error("N must be a power of three")]
    NotPowerOfThree,
    /// `N * N` does not fit the curve's index type.
    #[error("N = {side} is too large for this index width (largest supported N is {max})")]
    TooLarge {
        /// Requested grid side.
        side: u64,
        /// Largest grid side the index type can address.
        max: u64,
    },
    /// An index or coordinate lies outside the curve's domain.
    #[error("value is out of range")]
    OutOfRange,
    /// The curve does not provide this mapping direction.
    #[error("inverse mapping is not implemented for the {0} curve")]
    Unimplemented(&'static str),
    /// The registry has no curve with this name.
    #[error("unknown curve '{0}'")]
    UnknownCurve(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = result::Result<T, Error>;
