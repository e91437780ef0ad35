use crate::models::GeoPoint;

/// Earth radius in meters used for great-circle distance.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle surface distance between two points, in meters.
///
/// Haversine formula in its atan2 form, which stays numerically stable for
/// antipodal and near-identical points. Symmetric, never negative, and zero
/// (within floating-point tolerance) for equal points.
pub fn great_circle_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}
