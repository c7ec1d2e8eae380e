use crate::{
    SpaceFilling,
    curves::{hilbert::Hilbert, hilbert64::Hilbert64, peano::Peano, peano64::Peano64},
    error::{Error, Result},
    spec::GridSpec,
};

/// Metadata describing a curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveEntry {
    /// Lookup key accepted by [`construct`] and [`construct64`].
    pub key: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// Constraints on the grid side, for help text.
    pub constraints: &'static str,
    /// Whether `map_inverse` is available.
    pub invertible: bool,
}

/// Every curve family known to the registry.
pub const REGISTRY: &[CurveEntry] = &[
    CurveEntry {
        key: "hilbert",
        display: "Hilbert",
        constraints: "N a power of two; N <= 2^15 (32-bit) or 2^31 (64-bit)",
        invertible: true,
    },
    CurveEntry {
        key: "peano",
        display: "Peano",
        constraints: "N a power of three; N <= 3^9 (32-bit) or 3^20 (64-bit); forward mapping only",
        invertible: false,
    },
];

/// Lookup keys of all registered curves, in registry order.
pub const CURVE_NAMES: &[&str] = &["hilbert", "peano"];

/// Find the registry entry for `name`.
pub fn entry(name: &str) -> Option<&'static CurveEntry> {
    REGISTRY.iter().find(|e| e.key == name)
}

/// Check that `name` and `size` describe a constructible 32-bit curve, without
/// building it.
pub fn validate(name: &str, size: i32) -> Result<()> {
    match name {
        "hilbert" => GridSpec::power_of_two(size, Hilbert::MAX_SIDE).map(drop),
        "peano" => GridSpec::power_of_three(size, Peano::MAX_SIDE).map(drop),
        _ => Err(Error::UnknownCurve(name.to_string())),
    }
}

/// Check that `name` and `size` describe a constructible 64-bit curve, without
/// building it.
pub fn validate64(name: &str, size: u64) -> Result<()> {
    match name {
        "hilbert" => GridSpec::power_of_two(size, Hilbert64::MAX_SIDE).map(drop),
        "peano" => GridSpec::power_of_three(size, Peano64::MAX_SIDE).map(drop),
        _ => Err(Error::UnknownCurve(name.to_string())),
    }
}

/// Build a curve with 32-bit signed indices by name.
pub fn construct(name: &str, size: i32) -> Result<Box<dyn SpaceFilling<Index = i32>>> {
    let curve: Box<dyn SpaceFilling<Index = i32>> = match name {
        "hilbert" => Box::new(Hilbert::new(size)?),
        "peano" => Box::new(Peano::new(size)?),
        _ => return Err(Error::UnknownCurve(name.to_string())),
    };
    Ok(curve)
}

/// Build a curve with 64-bit unsigned indices by name.
pub fn construct64(name: &str, size: u64) -> Result<Box<dyn SpaceFilling<Index = u64>>> {
    let curve: Box<dyn SpaceFilling<Index = u64>> = match name {
        "hilbert" => Box::new(Hilbert64::new(size)?),
        "peano" => Box::new(Peano64::new(size)?),
        _ => return Err(Error::UnknownCurve(name.to_string())),
    };
    Ok(curve)
}
