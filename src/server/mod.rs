//! REST API: `POST /generate` and `GET /download/{id}`

mod handlers;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::provider::{BoxProvider, MeshProvider};
use crate::store::ModelStore;

pub use handlers::{ApiError, download, generate, health_check};

/// API server state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    pub provider: Arc<dyn MeshProvider>,
    pub store: ModelStore,
}

impl ApiState {
    /// Box provider with an unbounded store
    pub fn new() -> Self {
        Self::with_parts(Arc::new(BoxProvider), ModelStore::new())
    }

    pub fn with_parts(provider: Arc<dyn MeshProvider>, store: ModelStore) -> Self {
        Self { provider, store }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let store = match config.store_capacity {
            Some(capacity) => ModelStore::with_capacity_limit(capacity),
            None => ModelStore::new(),
        };
        Self::with_parts(Arc::new(BoxProvider), store)
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the API router with all endpoints
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .route("/download/{id}", get(download))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve on an already bound listener
pub async fn serve(listener: TcpListener, state: ApiState) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Server running at http://{addr}");
    }
    axum::serve(listener, build_router(state)).await
}

/// Bind `addr` and serve
pub async fn start_server(addr: &str, state: ApiState) -> Result<(), std::io::Error> {
    tracing::info!("Starting API server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}
