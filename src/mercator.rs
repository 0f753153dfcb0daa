use crate::types::{GeoCoordinate, PlanarPoint};

pub struct MercatorProjection;

// Constants
pub const EARTH_RADIUS: f64 = 6_378_137.0;
pub const EARTH_CIRCUMFERENCE: f64 = 2.0 * PI * EARTH_RADIUS;
pub const LATITUDE_MAX: f64 = 85.0511287798;
pub const LATITUDE_MIN: f64 = -LATITUDE_MAX;
pub const DEFAULT_TILE_SIZE: u32 = 256; // Standard tile size
const PI: f64 = std::f64::consts::PI;

impl MercatorProjection {
    /// Clamps a latitude to the Web Mercator valid range, keeping the
    /// projection away from the asymptote at the poles.
    pub fn clamp_latitude(latitude: f64) -> f64 {
        latitude.max(LATITUDE_MIN).min(LATITUDE_MAX)
    }

    /// Projects a geographic coordinate to EPSG:3857 Mercator meters.
    pub fn to_mercator_meters(coordinate: &GeoCoordinate) -> PlanarPoint {
        let latitude = Self::clamp_latitude(coordinate.latitude);
        let sin_latitude = latitude.to_radians().sin();

        PlanarPoint::new(
            EARTH_RADIUS * coordinate.longitude.to_radians(),
            EARTH_RADIUS * ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln() / 2.0,
        )
    }

    /// Inverts the Mercator projection back to degrees.
    pub fn from_mercator_meters(point: &PlanarPoint) -> GeoCoordinate {
        GeoCoordinate::new(
            (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees(),
            (point.x / EARTH_RADIUS).to_degrees(),
        )
    }

    /// Maps Mercator meters into world-pixel space for a full-world
    /// pixel span of `world_size`. The y sign flip and +0.5 offset move
    /// the origin from the equator/prime-meridian intersection to the
    /// top-left corner of the tile grid.
    pub fn meters_to_world_pixel(point: &PlanarPoint, world_size: f64) -> PlanarPoint {
        PlanarPoint::new(
            world_size * (point.x / EARTH_CIRCUMFERENCE + 0.5),
            world_size * (-point.y / EARTH_CIRCUMFERENCE + 0.5),
        )
    }

    /// Inverse of [`MercatorProjection::meters_to_world_pixel`].
    pub fn world_pixel_to_meters(point: &PlanarPoint, world_size: f64) -> PlanarPoint {
        PlanarPoint::new(
            (point.x / world_size - 0.5) * EARTH_CIRCUMFERENCE,
            -(point.y / world_size - 0.5) * EARTH_CIRCUMFERENCE,
        )
    }

    /// Pixel span of the full projected world at the given zoom level.
    /// Density multiplies the span exactly once, here.
    pub fn world_size(tile_size: u32, zoom: u8, density: f64) -> f64 {
        density * tile_size as f64 * f64::powi(2.0, zoom as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::approx_eq;

    #[test]
    fn test_equator_projects_to_world_center() {
        let meters = MercatorProjection::to_mercator_meters(&GeoCoordinate::new(0.0, 0.0));
        assert_eq!(meters, PlanarPoint::new(0.0, 0.0));

        let pixel = MercatorProjection::meters_to_world_pixel(&meters, 256.0);
        assert_eq!(pixel, PlanarPoint::new(128.0, 128.0));
    }

    #[test]
    fn test_antimeridian_meters() {
        let meters = MercatorProjection::to_mercator_meters(&GeoCoordinate::new(0.0, 180.0));
        assert!(approx_eq(meters.x, EARTH_CIRCUMFERENCE / 2.0, 1e-6));
    }

    #[test]
    fn test_latitude_clamped_before_projection() {
        let pole = MercatorProjection::to_mercator_meters(&GeoCoordinate::new(90.0, 10.0));
        let max = MercatorProjection::to_mercator_meters(&GeoCoordinate::new(LATITUDE_MAX, 10.0));
        assert_eq!(pole, max);
        assert!(pole.y.is_finite());
    }

    #[test]
    fn test_meters_round_trip() {
        let coordinate = GeoCoordinate::new(48.137154, 11.576124);
        let meters = MercatorProjection::to_mercator_meters(&coordinate);
        let back = MercatorProjection::from_mercator_meters(&meters);
        assert!(approx_eq(back.latitude, coordinate.latitude, 1e-9));
        assert!(approx_eq(back.longitude, coordinate.longitude, 1e-9));
    }

    #[test]
    fn test_world_size_density_and_zoom() {
        assert_eq!(MercatorProjection::world_size(256, 0, 1.0), 256.0);
        assert_eq!(MercatorProjection::world_size(256, 14, 2.0), 8_388_608.0);
        assert_eq!(MercatorProjection::world_size(512, 3, 1.0), 4096.0);
    }
}
