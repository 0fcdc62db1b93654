use nalgebra::Vector3;

use heliopos::ephemeris::{position, PositionOptions};
use heliopos::heliopos_errors::HelioposError;

fn print_position(label: &str, pos: Vector3<f64>) {
    println!(
        "{label:<45} x = {:+.8} AU, y = {:+.8} AU, z = {:+.8} AU",
        pos.x, pos.y, pos.z
    );
}

/// Compute a few heliocentric positions, mixing index and name designators,
/// calendar-year epochs, and the available frame and orbit-shape options.
fn main() -> Result<(), HelioposError> {
    let icrf = PositionOptions {
        icrf: true,
        ..Default::default()
    };
    let circular = PositionOptions {
        circular: true,
        ..Default::default()
    };
    let icrf_circular = PositionOptions {
        icrf: true,
        circular: true,
        ..Default::default()
    };

    print_position("Earth @ 2000.0 (ICRF)", position(2, 2000.0, icrf)?);
    print_position(
        "Jupiter @ 2017.101 (ecliptic, circular)",
        position("jupiter", 2017.101, circular)?,
    );
    print_position(
        "Earth @ 2100.5 (ICRF, circular)",
        position("earth", 2100.5, icrf_circular)?,
    );
    print_position(
        "Mercury @ 2000.7 (ecliptic)",
        position(0, 2000.7, PositionOptions::default())?,
    );

    Ok(())
}
