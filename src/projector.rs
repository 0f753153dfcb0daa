use tracing::debug;

use crate::errors::ProjectorError;
use crate::mercator::{MercatorProjection, DEFAULT_TILE_SIZE};
use crate::rotation::rotate_about;
use crate::types::{GeoCoordinate, PlanarPoint};

/// Converts between geographic coordinates and viewport-relative pixel
/// coordinates for a fixed viewport over a Web Mercator tile grid.
///
/// All configuration is fixed at construction; the world pixel span and
/// the world-pixel position of the center coordinate are precomputed
/// and never change. Every operation is a pure function of its inputs
/// and this fixed state, so a `Projector` is safe to share across
/// threads without locking.
///
/// Known asymmetry, kept pending product clarification:
/// [`Projector::pixel_to_geo`] does NOT undo a heading rotation applied
/// by [`Projector::geo_to_pixel_with_heading`]. Use
/// [`Projector::pixel_to_geo_with_heading`] when the inverse of a
/// rotated projection is wanted.
#[derive(Debug, Clone)]
pub struct Projector {
    viewport_width: u32,
    viewport_height: u32,
    // Pixel span of the whole world at this zoom/density. At zoom 0 and
    // density 1 this is a single tile.
    all_tile_size: f64,
    center_pixel: PlanarPoint,
}

impl Projector {
    /// Creates a projector with density 1.0 and the standard 256 pixel
    /// tile size.
    pub fn new(
        viewport_width: u32,
        viewport_height: u32,
        zoom: u8,
        center: GeoCoordinate,
    ) -> Result<Self, ProjectorError> {
        Self::with_tile_size(
            viewport_width,
            viewport_height,
            zoom,
            center,
            1.0,
            DEFAULT_TILE_SIZE,
        )
    }

    /// Creates a projector with an explicit display density factor
    /// (device pixel ratio) and the standard 256 pixel tile size.
    pub fn with_density(
        viewport_width: u32,
        viewport_height: u32,
        zoom: u8,
        center: GeoCoordinate,
        density: f64,
    ) -> Result<Self, ProjectorError> {
        Self::with_tile_size(
            viewport_width,
            viewport_height,
            zoom,
            center,
            density,
            DEFAULT_TILE_SIZE,
        )
    }

    /// Creates a projector with explicit density and tile size. Some
    /// tile providers serve 512 pixel tiles.
    pub fn with_tile_size(
        viewport_width: u32,
        viewport_height: u32,
        zoom: u8,
        center: GeoCoordinate,
        density: f64,
        tile_size: u32,
    ) -> Result<Self, ProjectorError> {
        if viewport_width == 0 || viewport_height == 0 {
            return Err(ProjectorError::InvalidConfiguration(format!(
                "viewport dimensions must be at least 1x1, got {}x{}",
                viewport_width, viewport_height
            )));
        }
        if density <= 0.0 || !density.is_finite() {
            return Err(ProjectorError::InvalidConfiguration(format!(
                "density must be a positive finite number, got {}",
                density
            )));
        }
        if tile_size == 0 {
            return Err(ProjectorError::InvalidConfiguration(format!(
                "tile size must be at least 1, got {}",
                tile_size
            )));
        }

        let all_tile_size = MercatorProjection::world_size(tile_size, zoom, density);
        let center_pixel = Self::to_world_pixel(&center, all_tile_size);

        debug!(
            viewport_width,
            viewport_height,
            zoom,
            density,
            tile_size,
            all_tile_size,
            "created projector centered at ({}, {})",
            center.latitude,
            center.longitude
        );

        Ok(Self {
            viewport_width,
            viewport_height,
            all_tile_size,
            center_pixel,
        })
    }

    /// Converts a geographic coordinate to a viewport-relative pixel
    /// coordinate with integer-valued components.
    pub fn geo_to_pixel(&self, coordinate: &GeoCoordinate) -> PlanarPoint {
        self.to_viewport(coordinate).round()
    }

    /// Like [`Projector::geo_to_pixel`], but additionally rotates the
    /// result about the viewport center by `heading_degrees` before
    /// rounding. A heading of 0 gives exactly the unrotated result.
    pub fn geo_to_pixel_with_heading(
        &self,
        coordinate: &GeoCoordinate,
        heading_degrees: f64,
    ) -> PlanarPoint {
        let point = self.to_viewport(coordinate);
        if heading_degrees == 0.0 {
            return point.round();
        }
        rotate_about(&point, &self.viewport_center(), heading_degrees).round()
    }

    /// Converts a viewport-relative pixel coordinate back to a
    /// geographic coordinate.
    ///
    /// This never undoes a heading rotation, so it only inverts
    /// [`Projector::geo_to_pixel`] (heading 0). See
    /// [`Projector::pixel_to_geo_with_heading`] for the rotated inverse.
    pub fn pixel_to_geo(&self, point: &PlanarPoint) -> GeoCoordinate {
        let world_pixel = PlanarPoint::new(
            point.x - self.viewport_width as f64 / 2.0 + self.center_pixel.x,
            point.y - self.viewport_height as f64 / 2.0 + self.center_pixel.y,
        );
        let meters = MercatorProjection::world_pixel_to_meters(&world_pixel, self.all_tile_size);
        MercatorProjection::from_mercator_meters(&meters)
    }

    /// Inverse of [`Projector::geo_to_pixel_with_heading`]: un-rotates
    /// the pixel about the viewport center first, then inverts the
    /// projection.
    pub fn pixel_to_geo_with_heading(
        &self,
        point: &PlanarPoint,
        heading_degrees: f64,
    ) -> GeoCoordinate {
        let unrotated = if heading_degrees == 0.0 {
            *point
        } else {
            rotate_about(point, &self.viewport_center(), -heading_degrees)
        };
        self.pixel_to_geo(&unrotated)
    }

    fn to_world_pixel(coordinate: &GeoCoordinate, all_tile_size: f64) -> PlanarPoint {
        let meters = MercatorProjection::to_mercator_meters(coordinate);
        MercatorProjection::meters_to_world_pixel(&meters, all_tile_size)
    }

    fn to_viewport(&self, coordinate: &GeoCoordinate) -> PlanarPoint {
        let world_pixel = Self::to_world_pixel(coordinate, self.all_tile_size);
        PlanarPoint::new(
            world_pixel.x - self.center_pixel.x + self.viewport_width as f64 / 2.0,
            world_pixel.y - self.center_pixel.y + self.viewport_height as f64 / 2.0,
        )
    }

    fn viewport_center(&self) -> PlanarPoint {
        PlanarPoint::new(
            self.viewport_width as f64 / 2.0,
            self.viewport_height as f64 / 2.0,
        )
    }
}
