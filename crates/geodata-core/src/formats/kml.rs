//! KML (Keyhole Markup Language) format reader implementation

use async_trait::async_trait;
use kml::Kml;
use std::fs;
use std::path::Path;

use crate::error::{GeodataError, Result};
use crate::formats::{ExtractedPoint, FormatReader, FormatScan};

/// KML format reader.
///
/// Walks the document tree, including nested folders, and extracts point
/// placemarks. Coordinates in KML are always WGS84.
pub struct KmlReader;

#[async_trait]
impl FormatReader for KmlReader {
    async fn read(&self, path: &Path) -> Result<FormatScan> {
        let content = fs::read_to_string(path).map_err(GeodataError::Io)?;

        let kml: Kml = content.parse().map_err(|e: kml::Error| GeodataError::FormatValidation {
            format: "KML".to_string(),
            reason: format!("Failed to parse KML: {}", e),
        })?;

        let mut points = Vec::new();
        collect_points(&kml, &mut points);

        Ok(FormatScan {
            format_name: self.format_name().to_string(),
            points,
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["kml"]
    }

    fn format_name(&self) -> &str {
        "KML"
    }
}

/// Recursively walk the KML tree collecting point placemarks.
fn collect_points(kml: &Kml, out: &mut Vec<ExtractedPoint>) {
    match kml {
        Kml::KmlDocument(doc) => {
            for element in &doc.elements {
                collect_points(element, out);
            }
        }
        Kml::Document { elements, .. } | Kml::Folder { elements, .. } => {
            for element in elements {
                collect_points(element, out);
            }
        }
        Kml::Placemark(placemark) => {
            if let Some(kml::types::Geometry::Point(point)) = &placemark.geometry {
                out.push(ExtractedPoint {
                    label: placemark.name.clone(),
                    lon: point.coord.x,
                    lat: point.coord.y,
                });
            }
        }
        Kml::Point(point) => {
            out.push(ExtractedPoint {
                label: None,
                lon: point.coord.x,
                lat: point.coord.y,
            });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_point_placemark() {
        let reader = KmlReader;

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("temple.kml");

        let kml_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Tanah Lot</name>
      <Point>
        <coordinates>115.0865,-8.6212,0</coordinates>
      </Point>
    </Placemark>
  </Document>
</kml>"#;

        fs::write(&file_path, kml_content).unwrap();

        let scan = reader.read(&file_path).await.unwrap();

        assert_eq!(scan.format_name, "KML");
        assert_eq!(scan.points.len(), 1);
        assert_eq!(scan.points[0].label.as_deref(), Some("Tanah Lot"));
        assert!((scan.points[0].lon - 115.0865).abs() < 1e-9);
        assert!((scan.points[0].lat - -8.6212).abs() < 1e-9);
    }

    #[tokio::test]
    async fn reads_placemarks_in_nested_folders() {
        let reader = KmlReader;

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("nested.kml");

        let kml_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Folder>
      <name>Parent</name>
      <Folder>
        <name>Child</name>
        <Placemark>
          <name>Nested Point</name>
          <Point>
            <coordinates>-122.326897,47.644548,0</coordinates>
          </Point>
        </Placemark>
      </Folder>
    </Folder>
  </Document>
</kml>"#;

        fs::write(&file_path, kml_content).unwrap();

        let scan = reader.read(&file_path).await.unwrap();
        assert_eq!(scan.points.len(), 1);
        assert_eq!(scan.points[0].label.as_deref(), Some("Nested Point"));
    }

    #[tokio::test]
    async fn skips_non_point_placemarks() {
        let reader = KmlReader;

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("route.kml");

        let kml_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>A Route</name>
      <LineString>
        <coordinates>
          -122.326897,47.644548,0
          -122.326898,47.644549,0
        </coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>"#;

        fs::write(&file_path, kml_content).unwrap();

        let scan = reader.read(&file_path).await.unwrap();
        assert!(scan.points.is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_xml() {
        let reader = KmlReader;

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("broken.kml");

        fs::write(&file_path, "not valid xml").unwrap();

        let result = reader.read(&file_path).await;
        assert!(matches!(result, Err(GeodataError::FormatValidation { .. })));
    }

    #[test]
    fn supports_only_kml_extension() {
        let reader = KmlReader;
        assert_eq!(reader.supported_extensions(), &["kml"]);
    }
}
