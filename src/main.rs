use std::time::{SystemTime, UNIX_EPOCH};

use projector::{GeoCoordinate, PlanarPoint, Projector, ProjectorError};

// Demo run mirroring a handheld map view: one forward and one inverse
// conversion around a fixed center, for manual verification.
fn main() -> Result<(), ProjectorError> {
    env_logger::init();

    println!("{}", now_millis());

    let center = GeoCoordinate::new(30.772389001386095, 120.68156035497184);
    let projector = Projector::with_density(600, 758, 14, center, 2.0)?;

    let target = GeoCoordinate::new(30.77347790731735, 120.68347644410971);
    println!("target pixel: {:?}", projector.geo_to_pixel(&target));

    let pixel = PlanarPoint::new(389.29622594825923, 319.9373898431659);
    println!("target coordinate: {:?}", projector.pixel_to_geo(&pixel));

    println!("{}", now_millis());
    Ok(())
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
