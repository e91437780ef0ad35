//! Parsing helpers for user-supplied settings.

use crate::error::{GeodataError, Result};
use crate::geo::DisplayUnit;

/// Parse a display unit from its wire representation.
///
/// Accepts the short labels used by the UI as well as the full unit names.
/// Matching is case-insensitive.
pub fn parse_display_unit(value: &str) -> Result<DisplayUnit> {
    match value.to_lowercase().as_str() {
        "km" | "kilometers" => Ok(DisplayUnit::Kilometers),
        "mi" | "miles" => Ok(DisplayUnit::Miles),
        other => Err(GeodataError::InvalidField {
            field: "unit".to_string(),
            reason: format!("unknown display unit '{}', expected 'km' or 'miles'", other),
        }),
    }
}
