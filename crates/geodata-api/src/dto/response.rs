use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use geodata_core::measure::SessionState;
use geodata_core::models::{LabeledPoint, StoredFile, User};

use crate::state::MeasureInstance;

/// User account response; the password is never echoed back
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Uploaded file metadata response
#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub file_name: String,
    pub file_type: String,
    pub size_bytes: usize,
    pub point_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<StoredFile> for FileResponse {
    fn from(file: StoredFile) -> Self {
        Self {
            id: file.id.0,
            user_id: file.user_id,
            file_name: file.file_name,
            file_type: file.file_type,
            size_bytes: file.size_bytes,
            point_count: file.point_count,
            created_at: file.created_at,
        }
    }
}

/// Labeled point response
#[derive(Debug, Serialize)]
pub struct PointResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub created_at: DateTime<Utc>,
}

impl From<LabeledPoint> for PointResponse {
    fn from(point: LabeledPoint) -> Self {
        Self {
            id: point.id.0,
            user_id: point.user_id,
            label: point.label,
            lat: point.lat,
            lon: point.lon,
            created_at: point.created_at,
        }
    }
}

/// Upload operation response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: u64,
    pub points_imported: usize,
    pub points_skipped: usize,
    pub message: String,
}

impl UploadResponse {
    pub fn success(file_id: u64, filename: &str, imported: usize, skipped: usize) -> Self {
        Self {
            success: true,
            file_id,
            points_imported: imported,
            points_skipped: skipped,
            message: format!("Successfully imported {} with {} points", filename, imported),
        }
    }
}

/// A measurement endpoint in map widget coordinates
#[derive(Debug, Serialize)]
pub struct PointPosition {
    pub lng: f64,
    pub lat: f64,
}

/// Full state of a measurement instance
#[derive(Debug, Serialize)]
pub struct MeasureResponse {
    pub id: String,
    pub state: SessionState,
    pub points: Vec<PointPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    pub unit: String,
    pub display: String,
}

impl MeasureResponse {
    pub fn from_instance(id: Uuid, instance: &MeasureInstance) -> Self {
        let snapshot = instance.session.snapshot();
        Self {
            id: id.to_string(),
            state: snapshot.state,
            points: snapshot
                .points
                .iter()
                .map(|p| PointPosition { lng: p.longitude(), lat: p.latitude() })
                .collect(),
            distance_meters: snapshot.distance_meters,
            unit: instance.unit.label().to_string(),
            display: instance.session.current_distance_display(instance.unit),
        }
    }
}

/// Delete operation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn success(entity: &str, id: &str) -> Self {
        Self {
            success: true,
            message: format!("Successfully deleted {} {}", entity, id),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "geodata-api" }
    }
}
