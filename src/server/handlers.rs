//! HTTP request handlers for API endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{
    ApiState,
    types::{
        DownloadFormat, DownloadQuery, ErrorResponse, GenerateRequest, GenerateResponse,
        HealthResponse, ModelMetadata,
    },
};
use crate::io::{IoError, StlOptions};
use crate::mesh::FaceMode;

/// Failures a handler reports to the caller as `{ "error": ... }`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Model not found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] IoError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Io(IoError::Unimplemented(_)) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(%status, "{self}");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generate a model for a prompt and register it for download
pub async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let mesh = state.provider.generate(&request.prompt);
    let mesh = state.store.insert(mesh).await;
    info!(id = %mesh.id, kind = %mesh.kind, prompt_len = request.prompt.len(), "generated model");

    Json(GenerateResponse {
        model: mesh.summary(),
        metadata: ModelMetadata {
            format: "STL".to_string(),
            size: 0,
            created_at: chrono::Utc::now(),
        },
    })
}

/// Encode a stored model as an STL attachment
pub async fn download(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    // Anything that is not a UUID cannot name a stored model.
    let Ok(uuid) = Uuid::parse_str(&id) else {
        warn!(%id, "download of malformed model id");
        return Err(ApiError::NotFound);
    };
    let Some(mesh) = state.store.get(&uuid).await else {
        warn!(%id, "download of unknown model");
        return Err(ApiError::NotFound);
    };

    let options = StlOptions {
        face_mode: if query.fan { FaceMode::Fan } else { FaceMode::FirstTriangle },
        normalize: query.normalize,
    };
    let name = mesh.kind.as_str();
    let body = match query.format {
        DownloadFormat::Ascii => crate::io::to_stl_ascii_with(&mesh, name, options)?.into_bytes(),
        DownloadFormat::Binary => encode_binary(&mesh, name, options)?,
    };
    info!(id = %mesh.id, format = ?query.format, bytes = body.len(), "serving model");

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=model-{}.stl", mesh.id),
            ),
            (header::CONTENT_LENGTH, body.len().to_string()),
        ],
        body,
    )
        .into_response())
}

#[cfg(feature = "stl-io")]
fn encode_binary(
    mesh: &crate::mesh::Mesh,
    name: &str,
    options: StlOptions,
) -> Result<Vec<u8>, ApiError> {
    Ok(crate::io::to_stl_binary_with(mesh, name, options)?)
}

#[cfg(not(feature = "stl-io"))]
fn encode_binary(
    _mesh: &crate::mesh::Mesh,
    _name: &str,
    _options: StlOptions,
) -> Result<Vec<u8>, ApiError> {
    Err(IoError::Unimplemented("binary STL requires the `stl-io` feature".to_string()).into())
}
