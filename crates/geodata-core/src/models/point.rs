use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GeodataError, Result};

/// Unique identifier for a labeled point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(pub u64);

/// A validated geographic position in WGS84 degrees.
///
/// Longitude is bounded to [-180, 180] and latitude to [-90, 90]; both must
/// be finite. Construction is the only place coordinates are checked, so a
/// `GeoPoint` can be trusted downstream and the distance math never sees NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Create a point from longitude/latitude degrees.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeodataError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
                min: -180.0,
                max: 180.0,
            });
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeodataError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
                min: -90.0,
                max: 90.0,
            });
        }
        Ok(Self { longitude, latitude })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// A labeled point supplied by the data layer and rendered on the map panel.
///
/// Read-only to the measurement core; coordinates are validated at the API
/// boundary before a record is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub id: PointId,
    pub user_id: Option<Uuid>,
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let point = GeoPoint::new(9.1135, 24.5825).unwrap();
        assert_eq!(point.longitude(), 9.1135);
        assert_eq!(point.latitude(), 24.5825);
    }

    #[test]
    fn accepts_boundary_coordinates() {
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = GeoPoint::new(181.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GeodataError::InvalidCoordinate { axis: "longitude", .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = GeoPoint::new(0.0, -90.5).unwrap_err();
        assert!(matches!(
            err,
            GeodataError::InvalidCoordinate { axis: "latitude", .. }
        ));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, 0.0).is_err());
    }
}
