//! Geo math: great-circle distance and display units.

pub mod distance;
pub mod units;

pub use distance::{great_circle_distance, EARTH_RADIUS_METERS};
pub use units::DisplayUnit;
