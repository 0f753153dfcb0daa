use crate::types::PlanarPoint;

/// Rotates `point` about `center` by `angle_degrees`.
///
/// Screen y grows downward, so a positive angle rotates clockwise on
/// screen. Pure function; the inverse rotation is the same call with
/// the negated angle.
pub fn rotate_about(point: &PlanarPoint, center: &PlanarPoint, angle_degrees: f64) -> PlanarPoint {
    let angle = angle_degrees.to_radians();
    let (sin, cos) = angle.sin_cos();

    let dx = point.x - center.x;
    let dy = point.y - center.y;

    PlanarPoint::new(
        dx * cos - dy * sin + center.x,
        dx * sin + dy * cos + center.y,
    )
}
