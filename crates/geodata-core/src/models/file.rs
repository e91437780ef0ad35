use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u64);

/// Metadata for an uploaded geospatial file.
///
/// Raw bytes are not retained; the upload is parsed once and any extracted
/// point features live in the point store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    /// Unique identifier
    pub id: FileId,

    /// Owning user, if one was supplied with the upload
    pub user_id: Option<Uuid>,

    /// Original file name
    pub file_name: String,

    /// Detected format name (e.g. "GeoJSON", "KML")
    pub file_type: String,

    /// Upload size in bytes
    pub size_bytes: usize,

    /// Number of point features extracted from the file
    pub point_count: usize,

    /// When the file was uploaded
    pub created_at: DateTime<Utc>,
}
