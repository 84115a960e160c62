//! HTTP client for the generate / download API.

use crate::server::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use reqwest::StatusCode;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// Talks to a running `futurecad` server.
#[derive(Debug, Clone)]
pub struct CadClient {
    base_url: String,
    http: reqwest::Client,
}

impl CadClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /generate`
    pub async fn generate_model(&self, prompt: &str) -> Result<GenerateResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/generate", self.base_url))
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /download/{id}`, returning the raw STL bytes
    pub async fn download_model(&self, id: &str) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .get(format!("{}/download/{id}", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    tracing::error!(%status, %message, "request rejected");
    Err(ClientError::Status { status, message })
}
