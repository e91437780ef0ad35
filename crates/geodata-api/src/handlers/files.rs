use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use geodata_core::models::FileId;
use geodata_core::GeodataError;
use uuid::Uuid;

use crate::dto::{FileResponse, UploadResponse};
use crate::error::ApiError;
use crate::services::UploadService;
use crate::state::AppState;

pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    tracing::info!("Processing upload request");

    let upload = extract_upload(&mut multipart).await?;

    tracing::info!(
        filename = %upload.filename,
        size = upload.data.len(),
        "Received file for import"
    );

    let result =
        UploadService::store_upload(&state, &upload.filename, upload.user_id, &upload.data).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse::success(
            result.file_id.0,
            &upload.filename,
            result.points_imported,
            result.points_skipped,
        )),
    ))
}

pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    tracing::info!("Listing files");

    let files = state.file_store.list_files().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list files");
        ApiError::internal("Failed to list files").with_details(e.to_string())
    })?;

    let responses: Vec<FileResponse> = files.into_iter().map(FileResponse::from).collect();
    Ok(Json(responses))
}

pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<u64>,
) -> Result<Json<FileResponse>, ApiError> {
    tracing::info!(file_id = file_id, "Fetching file metadata");

    let file = state
        .file_store
        .get_file(FileId(file_id))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch file");
            ApiError::internal("Failed to fetch file").with_details(e.to_string())
        })?
        .ok_or_else(|| GeodataError::FileNotFound { id: file_id })?;

    Ok(Json(FileResponse::from(file)))
}

struct UploadFields {
    filename: String,
    data: Vec<u8>,
    user_id: Option<Uuid>,
}

async fn extract_upload(multipart: &mut Multipart) -> Result<UploadFields, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut user_id: Option<Uuid> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::bad_request("Failed to parse multipart form").with_details(e.to_string())
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.geojson").to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::bad_request("Failed to read file data").with_details(e.to_string())
                })?;
                file = Some((filename, data.to_vec()));
            }
            "user_id" => {
                let text = field.text().await.map_err(|e| {
                    ApiError::bad_request("Failed to read user_id field")
                        .with_details(e.to_string())
                })?;
                let parsed = text
                    .parse()
                    .map_err(|_| ApiError::bad_request("Invalid user_id format"))?;
                user_id = Some(parsed);
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| {
        ApiError::bad_request("No file provided")
            .with_details("Expected a 'file' field in the multipart form")
    })?;

    Ok(UploadFields { filename, data, user_id })
}
