//! Analyze route handler.
//!
//! Relays the browser's multipart submission to the analysis backend and
//! passes the outcome back: upstream JSON on success, the upstream status
//! and body text on a backend error, 502 on transport failure.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use aba_core::AbaError;

use crate::state::AppState;

/// POST /analyze - Forward the uploaded spreadsheet and question.
pub async fn analyze(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut question: Option<String> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((name, bytes.to_vec())),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read upload: {}", e),
                        )
                            .into_response();
                    }
                }
            }
            Some("question") => {
                question = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some((file_name, bytes)) = file else {
        return (StatusCode::BAD_REQUEST, "No file uploaded".to_string()).into_response();
    };

    match state
        .client
        .analyze_bytes(&file_name, bytes, question.as_deref())
        .await
    {
        Ok(analysis) => Json(analysis).into_response(),
        Err(AbaError::Server { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, body).into_response()
        }
        Err(e @ AbaError::Busy) => (StatusCode::TOO_MANY_REQUESTS, e.to_string()).into_response(),
        Err(e) => {
            warn!(error = %e, "Analyze relay failed");
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}
