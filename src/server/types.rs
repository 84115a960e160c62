//! API request and response types

use crate::mesh::MeshSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text description of the wanted model
    #[serde(default)]
    pub prompt: String,
}

/// File metadata returned alongside a generated model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    /// Always `"STL"`
    pub format: String,
    /// Reported as `0`; the encoded length is only known at download time
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

/// Response of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub model: MeshSummary,
    pub metadata: ModelMetadata,
}

/// STL flavour served by `GET /download/{id}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Ascii,
    Binary,
}

/// Query string of `GET /download/{id}`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub format: DownloadFormat,
    /// Fan-triangulate every face instead of emitting its first triangle only
    #[serde(default)]
    pub fan: bool,
    /// Emit unit-length facet normals
    #[serde(default)]
    pub normalize: bool,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
