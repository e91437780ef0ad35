use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use geodata_core::config::parse_display_unit;
use geodata_core::geo::DisplayUnit;
use geodata_core::models::GeoPoint;
use geodata_core::GeodataError;
use uuid::Uuid;

use crate::dto::{ClickRequest, CreateMeasureRequest, DeleteResponse, MeasureResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_measure(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateMeasureRequest>,
) -> Result<(StatusCode, Json<MeasureResponse>), ApiError> {
    let unit = match request.unit.as_deref() {
        Some(value) => parse_display_unit(value)?,
        None => DisplayUnit::default(),
    };

    let (id, instance) = state.measures.create(unit);

    tracing::info!(instance_id = %id, unit = instance.unit.label(), "Created measurement instance");

    Ok((StatusCode::CREATED, Json(MeasureResponse::from_instance(id, &instance))))
}

pub async fn get_measure(
    State(state): State<Arc<AppState>>,
    Path(instance_id): Path<Uuid>,
) -> Result<Json<MeasureResponse>, ApiError> {
    let instance = state
        .measures
        .get(instance_id)
        .ok_or_else(|| GeodataError::InstanceNotFound { id: instance_id.to_string() })?;

    Ok(Json(MeasureResponse::from_instance(instance_id, &instance)))
}

pub async fn record_click(
    State(state): State<Arc<AppState>>,
    Path(instance_id): Path<Uuid>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<MeasureResponse>, ApiError> {
    let point = GeoPoint::new(request.lng, request.lat)?;

    tracing::info!(
        instance_id = %instance_id,
        lng = request.lng,
        lat = request.lat,
        "Recording map click"
    );

    let response = state
        .measures
        .with_instance(instance_id, |instance| {
            instance.session.record_click(point);
            MeasureResponse::from_instance(instance_id, instance)
        })
        .ok_or_else(|| GeodataError::InstanceNotFound { id: instance_id.to_string() })?;

    Ok(Json(response))
}

pub async fn reset_measure(
    State(state): State<Arc<AppState>>,
    Path(instance_id): Path<Uuid>,
) -> Result<Json<MeasureResponse>, ApiError> {
    tracing::info!(instance_id = %instance_id, "Resetting measurement");

    let response = state
        .measures
        .with_instance(instance_id, |instance| {
            instance.session.reset();
            MeasureResponse::from_instance(instance_id, instance)
        })
        .ok_or_else(|| GeodataError::InstanceNotFound { id: instance_id.to_string() })?;

    Ok(Json(response))
}

pub async fn toggle_unit(
    State(state): State<Arc<AppState>>,
    Path(instance_id): Path<Uuid>,
) -> Result<Json<MeasureResponse>, ApiError> {
    let response = state
        .measures
        .with_instance(instance_id, |instance| {
            instance.unit = instance.unit.toggle();
            tracing::info!(instance_id = %instance_id, unit = instance.unit.label(), "Toggled display unit");
            MeasureResponse::from_instance(instance_id, instance)
        })
        .ok_or_else(|| GeodataError::InstanceNotFound { id: instance_id.to_string() })?;

    Ok(Json(response))
}

pub async fn delete_measure(
    State(state): State<Arc<AppState>>,
    Path(instance_id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    tracing::info!(instance_id = %instance_id, "Deleting measurement instance");

    if !state.measures.remove(instance_id) {
        return Err(GeodataError::InstanceNotFound { id: instance_id.to_string() }.into());
    }

    Ok(Json(DeleteResponse::success("measurement", &instance_id.to_string())))
}
