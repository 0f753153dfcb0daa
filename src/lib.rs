mod errors;
mod mercator;
mod projector;
mod rotation;
mod types;

// Create a single, consistent public API
pub use errors::ProjectorError;
pub use mercator::{
    MercatorProjection, DEFAULT_TILE_SIZE, EARTH_CIRCUMFERENCE, EARTH_RADIUS, LATITUDE_MAX,
};
pub use projector::Projector;
pub use rotation::rotate_about;
pub use types::{approx_eq, GeoCoordinate, PlanarPoint};
