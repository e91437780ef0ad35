//! GeoJSON format reader implementation

use async_trait::async_trait;
use std::fs;
use std::path::Path;

use crate::error::{GeodataError, Result};
use crate::formats::{ExtractedPoint, FormatReader, FormatScan};

/// GeoJSON format reader.
///
/// Extracts `Point` and `MultiPoint` geometries; other geometry types are
/// skipped since the point store only holds point features.
pub struct GeoJsonReader;

#[async_trait]
impl FormatReader for GeoJsonReader {
    async fn read(&self, path: &Path) -> Result<FormatScan> {
        let content = fs::read_to_string(path).map_err(GeodataError::Io)?;

        let geojson: geojson::GeoJson =
            content.parse().map_err(|e| GeodataError::FormatValidation {
                format: "GeoJSON".to_string(),
                reason: format!("Failed to parse GeoJSON: {}", e),
            })?;

        let mut points = Vec::new();
        collect_points(&geojson, &mut points);

        Ok(FormatScan {
            format_name: self.format_name().to_string(),
            points,
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json", "geojson"]
    }

    fn format_name(&self) -> &str {
        "GeoJSON"
    }
}

fn collect_points(geojson: &geojson::GeoJson, out: &mut Vec<ExtractedPoint>) {
    match geojson {
        geojson::GeoJson::FeatureCollection(fc) => {
            for feature in &fc.features {
                collect_feature(feature, out);
            }
        }
        geojson::GeoJson::Feature(feature) => collect_feature(feature, out),
        geojson::GeoJson::Geometry(geometry) => collect_geometry(geometry, None, out),
    }
}

fn collect_feature(feature: &geojson::Feature, out: &mut Vec<ExtractedPoint>) {
    let label = feature_label(feature);
    if let Some(geometry) = &feature.geometry {
        collect_geometry(geometry, label, out);
    }
}

fn collect_geometry(
    geometry: &geojson::Geometry,
    label: Option<String>,
    out: &mut Vec<ExtractedPoint>,
) {
    match &geometry.value {
        geojson::Value::Point(coords) => {
            if let [lon, lat, ..] = coords.as_slice() {
                out.push(ExtractedPoint {
                    label,
                    lon: *lon,
                    lat: *lat,
                });
            }
        }
        geojson::Value::MultiPoint(coord_list) => {
            for coords in coord_list {
                if let [lon, lat, ..] = coords.as_slice() {
                    out.push(ExtractedPoint {
                        label: label.clone(),
                        lon: *lon,
                        lat: *lat,
                    });
                }
            }
        }
        _ => {}
    }
}

/// Pick a label from the feature properties, trying common key names.
fn feature_label(feature: &geojson::Feature) -> Option<String> {
    let properties = feature.properties.as_ref()?;
    for key in ["name", "label", "title"] {
        if let Some(value) = properties.get(key).and_then(|v| v.as_str()) {
            return Some(value.to_string());
        }
    }
    None
}
