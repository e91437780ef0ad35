use serde::{Deserialize, Serialize};

const METERS_PER_KILOMETER: f64 = 1000.0;
const MILES_PER_METER: f64 = 0.000621371;

/// Display unit for measured distances.
///
/// Toggling the unit only changes how a distance is formatted; the session
/// itself always carries meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DisplayUnit {
    /// Flip between the two units.
    pub fn toggle(self) -> Self {
        match self {
            DisplayUnit::Kilometers => DisplayUnit::Miles,
            DisplayUnit::Miles => DisplayUnit::Kilometers,
        }
    }

    /// Convert a distance in meters into this unit.
    pub fn convert(self, meters: f64) -> f64 {
        match self {
            DisplayUnit::Kilometers => meters / METERS_PER_KILOMETER,
            DisplayUnit::Miles => meters * MILES_PER_METER,
        }
    }

    /// Format a distance in meters for display, rounded to two decimals.
    pub fn format(self, meters: f64) -> String {
        format!("{:.2}", self.convert(meters))
    }

    /// Short label used on the wire and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            DisplayUnit::Kilometers => "km",
            DisplayUnit::Miles => "miles",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_kilometers() {
        assert_eq!(DisplayUnit::Kilometers.format(1000.0), "1.00");
        assert_eq!(DisplayUnit::Kilometers.format(111_194.93), "111.19");
    }

    #[test]
    fn formats_miles() {
        assert_eq!(DisplayUnit::Miles.format(1609.34), "1.00");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(DisplayUnit::Kilometers.format(0.0), "0.00");
        assert_eq!(DisplayUnit::Miles.format(0.0), "0.00");
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(DisplayUnit::Kilometers.toggle(), DisplayUnit::Miles);
        assert_eq!(DisplayUnit::Miles.toggle(), DisplayUnit::Kilometers);
        assert_eq!(DisplayUnit::Kilometers.toggle().toggle(), DisplayUnit::Kilometers);
    }

    #[test]
    fn converts_between_units() {
        assert!((DisplayUnit::Kilometers.convert(1500.0) - 1.5).abs() < 1e-9);
        assert!((DisplayUnit::Miles.convert(1000.0) - 0.621371).abs() < 1e-9);
    }

    #[test]
    fn labels() {
        assert_eq!(DisplayUnit::Kilometers.label(), "km");
        assert_eq!(DisplayUnit::Miles.label(), "miles");
    }
}
