use serde::Serialize;

use crate::geo::{great_circle_distance, DisplayUnit};
use crate::models::GeoPoint;

/// Progress of a measurement, derived from how many points were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No points recorded yet
    Empty,
    /// First endpoint recorded, waiting for the second
    OnePoint,
    /// Both endpoints recorded and the distance computed
    Complete,
}

/// A two-point measurement session.
///
/// Clicks accumulate up to two points. The first click records the start
/// point, the second records the end point and computes the great-circle
/// distance between them. Further clicks are ignored until [`reset`] is
/// called, so a finished measurement stays on screen until the user
/// explicitly starts over.
///
/// [`reset`]: MeasureSession::reset
#[derive(Debug, Clone, Default)]
pub struct MeasureSession {
    points: Vec<GeoPoint>,
    distance_meters: Option<f64>,
}

/// Point-in-time view of a session, suitable for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureSnapshot {
    /// Current session state
    pub state: SessionState,

    /// Recorded points in click order
    pub points: Vec<GeoPoint>,

    /// Computed distance, present only once the session is complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

impl MeasureSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, derived from the number of recorded points.
    pub fn state(&self) -> SessionState {
        match self.points.len() {
            0 => SessionState::Empty,
            1 => SessionState::OnePoint,
            _ => SessionState::Complete,
        }
    }

    /// Record a map click.
    ///
    /// The first two clicks append endpoints; the second also computes the
    /// distance. Clicks on a complete session are ignored.
    pub fn record_click(&mut self, point: GeoPoint) -> MeasureSnapshot {
        match self.points.len() {
            0 => {
                self.points.push(point);
            }
            1 => {
                let distance = great_circle_distance(&self.points[0], &point);
                self.points.push(point);
                self.distance_meters = Some(distance);
            }
            _ => {
                tracing::debug!("click ignored, measurement already complete");
            }
        }
        self.snapshot()
    }

    /// Discard all points and any computed distance.
    pub fn reset(&mut self) {
        self.points.clear();
        self.distance_meters = None;
    }

    /// Computed distance in meters, if the session is complete.
    pub fn distance_meters(&self) -> Option<f64> {
        self.distance_meters
    }

    /// Recorded points in click order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Format the current distance in the given unit.
    ///
    /// Incomplete sessions display as zero.
    pub fn current_distance_display(&self, unit: DisplayUnit) -> String {
        unit.format(self.distance_meters.unwrap_or(0.0))
    }

    /// Capture the current state, points, and distance.
    pub fn snapshot(&self) -> MeasureSnapshot {
        MeasureSnapshot {
            state: self.state(),
            points: self.points.clone(),
            distance_meters: self.distance_meters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat).unwrap()
    }

    #[test]
    fn new_session_is_empty() {
        let session = MeasureSession::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.points().is_empty());
        assert!(session.distance_meters().is_none());
    }

    #[test]
    fn first_click_records_start_point() {
        let mut session = MeasureSession::new();
        let snapshot = session.record_click(point(115.2625, -8.5069));

        assert_eq!(snapshot.state, SessionState::OnePoint);
        assert_eq!(snapshot.points.len(), 1);
        assert!(snapshot.distance_meters.is_none());
    }

    #[test]
    fn second_click_completes_and_computes_distance() {
        let mut session = MeasureSession::new();
        session.record_click(point(0.0, 0.0));
        let snapshot = session.record_click(point(0.0, 1.0));

        assert_eq!(snapshot.state, SessionState::Complete);
        assert_eq!(snapshot.points.len(), 2);
        let distance = snapshot.distance_meters.unwrap();
        assert!((distance - 111_195.0).abs() < 50.0);
    }

    #[test]
    fn third_click_is_ignored() {
        let mut session = MeasureSession::new();
        session.record_click(point(0.0, 0.0));
        session.record_click(point(0.0, 1.0));
        let before = session.distance_meters().unwrap();

        let snapshot = session.record_click(point(100.0, 50.0));

        assert_eq!(snapshot.state, SessionState::Complete);
        assert_eq!(snapshot.points.len(), 2);
        assert_eq!(session.distance_meters().unwrap(), before);
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut session = MeasureSession::new();
        session.record_click(point(0.0, 0.0));
        session.record_click(point(0.0, 1.0));

        session.reset();

        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.points().is_empty());
        assert!(session.distance_meters().is_none());
    }

    #[test]
    fn session_is_reusable_after_reset() {
        let mut session = MeasureSession::new();
        session.record_click(point(0.0, 0.0));
        session.record_click(point(0.0, 1.0));
        session.reset();

        let snapshot = session.record_click(point(10.0, 10.0));
        assert_eq!(snapshot.state, SessionState::OnePoint);
        assert_eq!(snapshot.points.len(), 1);
    }

    #[test]
    fn displays_one_degree_of_latitude_in_both_units() {
        let mut session = MeasureSession::new();
        session.record_click(point(0.0, 0.0));
        session.record_click(point(0.0, 1.0));

        assert_eq!(session.current_distance_display(DisplayUnit::Kilometers), "111.19");
        assert_eq!(session.current_distance_display(DisplayUnit::Miles), "69.09");
    }

    #[test]
    fn incomplete_session_displays_zero() {
        let mut session = MeasureSession::new();
        assert_eq!(session.current_distance_display(DisplayUnit::Kilometers), "0.00");

        session.record_click(point(0.0, 0.0));
        assert_eq!(session.current_distance_display(DisplayUnit::Miles), "0.00");
    }

    #[test]
    fn snapshot_serializes_without_distance_when_absent() {
        let mut session = MeasureSession::new();
        session.record_click(point(1.0, 2.0));

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["state"], "one_point");
        assert!(json.get("distance_meters").is_none());
    }

    #[test]
    fn snapshot_serializes_distance_when_complete() {
        let mut session = MeasureSession::new();
        session.record_click(point(0.0, 0.0));
        session.record_click(point(0.0, 1.0));

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["state"], "complete");
        assert!(json["distance_meters"].as_f64().unwrap() > 0.0);
    }
}
