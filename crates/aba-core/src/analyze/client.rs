//! HTTP client for the analyze endpoint.
//!
//! Posts a spreadsheet plus a question as multipart/form-data to
//! `{base_url}/analyze` and decodes the four-field JSON response.

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::analyze::model::{effective_question, AnalysisResponse};
use crate::config::DEFAULT_BACKEND_URL;
use crate::error::{AbaError, AbaResult};

/// Analyze endpoint client.
///
/// Clones share the same single-flight guard: at most one analysis may be
/// in flight at a time, overlapping calls fail with [`AbaError::Busy`]
/// instead of queueing.
#[derive(Clone)]
pub struct AnalyzeClient {
    base_url: String,
    client: reqwest::Client,
    inflight: Arc<Semaphore>,
}

impl AnalyzeClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: &str) -> Self {
        // No client-side timeout: a single attempt runs until the backend
        // answers, and LLM analyses can take minutes.
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            inflight: Arc::new(Semaphore::new(1)),
        }
    }

    /// Create a client pointing at the default local backend.
    pub fn default_client() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a spreadsheet file and a question, returning the analysis.
    ///
    /// The file must exist; otherwise this fails before any network
    /// activity. A blank or absent question is replaced by
    /// [`model::DEFAULT_QUESTION`](crate::analyze::model::DEFAULT_QUESTION).
    pub async fn analyze(
        &self,
        file: &Path,
        question: Option<&str>,
    ) -> AbaResult<AnalysisResponse> {
        if !file.is_file() {
            return Err(AbaError::MissingFile(file.to_path_buf()));
        }

        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        self.analyze_bytes(&file_name, bytes, question).await
    }

    /// Submit raw spreadsheet bytes under the given file name.
    ///
    /// Used by the front server, which receives the bytes from the browser
    /// rather than from disk.
    pub async fn analyze_bytes(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        question: Option<&str>,
    ) -> AbaResult<AnalysisResponse> {
        let _permit = self.inflight.try_acquire().map_err(|_| AbaError::Busy)?;

        let question = effective_question(question);
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type_for(file_name))?;
        let form = Form::new().part("file", part).text("question", question);

        debug!(file = file_name, "Submitting spreadsheet for analysis");

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AbaError::Server { status, body });
        }

        let analysis: AnalysisResponse = response.json().await?;
        debug!("Analysis complete");

        Ok(analysis)
    }

    /// Check if the analysis backend is reachable.
    pub async fn health_check(&self) -> AbaResult<bool> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

/// Content type for an upload, inferred from the file extension.
fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => "text/csv",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("xls") => "application/vnd.ms-excel",
        _ => "application/octet-stream",
    }
}
