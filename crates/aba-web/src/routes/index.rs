//! Form page route handler.
//!
//! Serves the embedded upload-and-analyze form HTML.

use axum::response::{Html, IntoResponse};

const FORM_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the upload-and-analyze form.
pub async fn index() -> impl IntoResponse {
    Html(FORM_HTML)
}
