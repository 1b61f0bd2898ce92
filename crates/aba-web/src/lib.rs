//! ABA Front Server
//!
//! Axum-based server for the upload-and-analyze form: serves the embedded
//! single-page form and forwards `/analyze` submissions to the configured
//! analysis backend.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use aba_core::analyze::AnalyzeClient;
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::index::index))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the front server.
pub async fn run_server(client: AnalyzeClient, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(client);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Front server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
