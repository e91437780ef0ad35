use std::path::Path;

use chrono::Utc;
use geodata_core::formats::FormatRegistry;
use geodata_core::models::{FileId, GeoPoint, LabeledPoint, PointId, StoredFile};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Result of importing an uploaded file
pub struct UploadResult {
    pub file_id: FileId,
    pub points_imported: usize,
    pub points_skipped: usize,
}

/// Service for importing uploaded geospatial files
pub struct UploadService;

impl UploadService {
    /// Import a file from its uploaded bytes.
    ///
    /// The bytes are parsed once from a temp file and dropped afterwards;
    /// only the extracted points and the file metadata are retained.
    pub async fn store_upload(
        state: &AppState,
        filename: &str,
        user_id: Option<Uuid>,
        data: &[u8],
    ) -> Result<UploadResult, ApiError> {
        let temp_dir = tempfile::tempdir().map_err(|e| {
            ApiError::internal("Failed to create temp directory").with_details(e.to_string())
        })?;

        let temp_path = temp_dir.path().join(filename);
        std::fs::write(&temp_path, data).map_err(|e| {
            ApiError::internal("Failed to write temp file").with_details(e.to_string())
        })?;

        Self::import_from_path(state, &temp_path, filename, user_id, data.len()).await
    }

    async fn import_from_path(
        state: &AppState,
        path: &Path,
        filename: &str,
        user_id: Option<Uuid>,
        size_bytes: usize,
    ) -> Result<UploadResult, ApiError> {
        let registry = FormatRegistry::default();

        let reader = registry.detect_format(path).map_err(|e| {
            ApiError::bad_request("Unsupported file format").with_details(e.to_string())
        })?;

        let scan = reader.read(path).await.map_err(|e| {
            ApiError::bad_request("Failed to parse file").with_details(e.to_string())
        })?;

        let mut points = Vec::new();
        let mut skipped = 0;
        for extracted in &scan.points {
            match GeoPoint::new(extracted.lon, extracted.lat) {
                Ok(geo) => points.push(LabeledPoint {
                    id: PointId(0),
                    user_id,
                    label: extracted.label.clone().unwrap_or_default(),
                    lat: geo.latitude(),
                    lon: geo.longitude(),
                    created_at: Utc::now(),
                }),
                Err(e) => {
                    tracing::warn!(
                        lon = extracted.lon,
                        lat = extracted.lat,
                        error = %e,
                        "Skipping point with out-of-range coordinates"
                    );
                    skipped += 1;
                }
            }
        }

        let ids = state.point_store.store_points(&points).await.map_err(|e| {
            ApiError::internal("Failed to store points").with_details(e.to_string())
        })?;

        let file = StoredFile {
            id: FileId(0),
            user_id,
            file_name: filename.to_string(),
            file_type: scan.format_name.clone(),
            size_bytes,
            point_count: ids.len(),
            created_at: Utc::now(),
        };

        let file_id = state.file_store.store_file(&file).await.map_err(|e| {
            ApiError::internal("Failed to store file metadata").with_details(e.to_string())
        })?;

        tracing::info!(
            file_id = file_id.0,
            imported = ids.len(),
            skipped = skipped,
            "Imported uploaded file"
        );

        Ok(UploadResult {
            file_id,
            points_imported: ids.len(),
            points_skipped: skipped,
        })
    }
}
