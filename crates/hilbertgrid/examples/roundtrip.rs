//! Minimal example: map a curve index to a grid point and back.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Hilbert curve on an 8x8 grid (order 3).
    let curve = hilbertgrid::HilbertCurve::from_side(8)?;
    println!("Curve length: {} cells", curve.length());

    let index = 10;
    let point = curve.point(index)?;
    println!("Point at index {index}: {point}");

    let round_trip = curve.index(point)?;
    println!("Index for {point}: {round_trip}");

    assert_eq!(round_trip, index);

    Ok(())
}
