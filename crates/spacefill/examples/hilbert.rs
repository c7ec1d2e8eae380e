//! Minimal Hilbert curve example: map an index to a point and back.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 2D Hilbert curve on an 8x8 grid (order 3)
    let curve = spacefill::curve_from_name("hilbert", 8)?;
    let (width, height) = curve.dimensions();
    println!("Hilbert {width}x{height}: {} cells", curve.length());

    let index = 10;
    let (x, y) = curve.map(index)?;
    println!("Point at index {index}: ({x}, {y})");

    let round_trip = curve.map_inverse(x, y)?;
    println!("Index for ({x}, {y}): {round_trip}");

    assert_eq!(round_trip, index);
    Ok(())
}
