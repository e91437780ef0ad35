use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use geodata_core::models::{GeoPoint, LabeledPoint, PointId};

use crate::dto::{CreatePointRequest, PointResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_point(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePointRequest>,
) -> Result<(StatusCode, Json<PointResponse>), ApiError> {
    tracing::info!(label = %request.label, lat = request.lat, lon = request.lon, "Creating point");

    // Validates the coordinate range; the stored lat/lon mirror the checked values
    let geo = GeoPoint::new(request.lon, request.lat)?;

    let point = LabeledPoint {
        id: PointId(0),
        user_id: request.user_id,
        label: request.label,
        lat: geo.latitude(),
        lon: geo.longitude(),
        created_at: Utc::now(),
    };

    let id = state.point_store.store_point(&point).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to store point");
        ApiError::internal("Failed to create point").with_details(e.to_string())
    })?;

    let stored = LabeledPoint { id, ..point };
    Ok((StatusCode::CREATED, Json(PointResponse::from(stored))))
}

pub async fn list_points(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PointResponse>>, ApiError> {
    tracing::info!("Listing points");

    let points = state.point_store.list_points().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list points");
        ApiError::internal("Failed to list points").with_details(e.to_string())
    })?;

    let responses: Vec<PointResponse> = points.into_iter().map(PointResponse::from).collect();
    Ok(Json(responses))
}
