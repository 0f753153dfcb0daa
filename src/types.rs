/// A geographic coordinate in degrees.
///
/// Latitudes outside the Web Mercator range are accepted; projection
/// clamps them to ±85.0511287798° instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A planar point. Depending on the pipeline stage this holds Mercator
/// meters, world-pixel coordinates or viewport-relative pixels; the
/// caller's context determines the units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rounds both components to the nearest integer value, half away
    /// from zero.
    pub fn round(&self) -> PlanarPoint {
        PlanarPoint {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

// Approximate equality check for floating-point comparisons
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
