use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use geodata_core::models::User;
use geodata_core::GeodataError;
use uuid::Uuid;

use crate::dto::{CreateUserRequest, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!(username = %request.username, "Creating user");

    if request.username.is_empty() {
        return Err(ApiError::bad_request("Username must not be empty"));
    }

    let user = User::new(request.username, request.password, request.email);

    state.user_store.store_user(&user).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to store user");
        ApiError::internal("Failed to create user").with_details(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    tracing::info!("Listing users");

    let users = state.user_store.list_users().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list users");
        ApiError::internal("Failed to list users").with_details(e.to_string())
    })?;

    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!(user_id = %user_id, "Fetching user");

    let user = state
        .user_store
        .get_user(user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch user");
            ApiError::internal("Failed to fetch user").with_details(e.to_string())
        })?
        .ok_or_else(|| GeodataError::UserNotFound { id: user_id.to_string() })?;

    Ok(Json(UserResponse::from(user)))
}
