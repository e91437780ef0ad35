use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Users
        .route("/api/v1/users", get(handlers::list_users).post(handlers::create_user))
        .route("/api/v1/users/{user_id}", get(handlers::get_user))

        // Files
        .route("/api/v1/files/upload", post(handlers::upload_file))
        .route("/api/v1/files", get(handlers::list_files))
        .route("/api/v1/files/{file_id}", get(handlers::get_file))

        // Points
        .route("/api/v1/points", get(handlers::list_points).post(handlers::create_point))

        // Measurement tool
        .route("/api/v1/measure", post(handlers::create_measure))
        .route(
            "/api/v1/measure/{instance_id}",
            get(handlers::get_measure).delete(handlers::delete_measure),
        )
        .route("/api/v1/measure/{instance_id}/click", post(handlers::record_click))
        .route("/api/v1/measure/{instance_id}/reset", post(handlers::reset_measure))
        .route("/api/v1/measure/{instance_id}/unit/toggle", post(handlers::toggle_unit))

        .with_state(state)
}
