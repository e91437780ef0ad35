//! Format abstraction for uploaded geospatial files.
//!
//! Each supported file format implements the [`FormatReader`] trait, and the
//! [`FormatRegistry`] picks the right reader from the file extension.

use async_trait::async_trait;
use std::path::Path;

use crate::error::{GeodataError, Result};

pub mod geojson;
pub mod kml;

pub use geojson::GeoJsonReader;
pub use kml::KmlReader;

/// A point feature extracted from an uploaded file.
///
/// Coordinates are raw as found in the file; validation against the WGS84
/// range happens when the point is turned into a domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPoint {
    /// Feature label, if the file carried one
    pub label: Option<String>,

    /// Longitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,
}

/// Result of scanning an uploaded file for point features.
#[derive(Debug, Clone)]
pub struct FormatScan {
    /// Human-readable format name (e.g. "GeoJSON", "KML")
    pub format_name: String,

    /// Point features found in the file
    pub points: Vec<ExtractedPoint>,
}

/// Format reader trait that all format implementations must implement.
#[async_trait]
pub trait FormatReader: Send + Sync {
    /// Read the file at `path` and extract its point features.
    async fn read(&self, path: &Path) -> Result<FormatScan>;

    /// Supported file extensions, lowercase (e.g. ["kml"]).
    fn supported_extensions(&self) -> &[&str];

    /// Human-readable format name (e.g. "GeoJSON").
    fn format_name(&self) -> &str;
}

/// Central registry for format readers.
///
/// The registry maintains a collection of format readers and provides
/// format detection based on file extensions.
pub struct FormatRegistry {
    readers: Vec<Box<dyn FormatReader>>,
}

impl FormatRegistry {
    /// Create an empty registry with no readers.
    pub fn new() -> Self {
        Self { readers: Vec::new() }
    }

    /// Register a format reader.
    pub fn register(&mut self, reader: Box<dyn FormatReader>) {
        self.readers.push(reader);
    }

    /// Pick the reader for the file at `path` by its extension.
    ///
    /// Extension matching is case-insensitive. Files without an extension or
    /// with an extension no reader claims are rejected.
    pub fn detect_format(&self, path: &Path) -> Result<&dyn FormatReader> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| GeodataError::UnsupportedFormat {
                extension: "none".to_string(),
                supported: self.supported_formats(),
            })?;

        self.readers
            .iter()
            .find(|r| r.supported_extensions().contains(&extension.as_str()))
            .map(|r| r.as_ref())
            .ok_or_else(|| GeodataError::UnsupportedFormat {
                extension,
                supported: self.supported_formats(),
            })
    }

    /// All extensions claimed by registered readers.
    pub fn supported_formats(&self) -> Vec<String> {
        self.readers
            .iter()
            .flat_map(|r| r.supported_extensions())
            .map(|s| s.to_string())
            .collect()
    }

    /// All registered readers.
    pub fn readers(&self) -> &[Box<dyn FormatReader>] {
        &self.readers
    }
}

impl Default for FormatRegistry {
    /// Registry with every built-in reader registered.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GeoJsonReader));
        registry.register(Box::new(KmlReader));
        registry
    }
}
