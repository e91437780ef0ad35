use serde::Deserialize;
use uuid::Uuid;

/// Body for creating a user account
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Body for creating a labeled point
#[derive(Debug, Deserialize)]
pub struct CreatePointRequest {
    pub user_id: Option<Uuid>,
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

/// Body for creating a measurement instance
#[derive(Debug, Default, Deserialize)]
pub struct CreateMeasureRequest {
    /// Initial display unit ("km" or "miles"); kilometers when omitted
    #[serde(default)]
    pub unit: Option<String>,
}

/// A map click forwarded to a measurement instance.
///
/// Field names follow the map widget's event payload.
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub lng: f64,
    pub lat: f64,
}
