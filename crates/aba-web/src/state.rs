//! Application state.

use aba_core::analyze::AnalyzeClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: AnalyzeClient,
}

impl AppState {
    pub fn new(client: AnalyzeClient) -> Self {
        Self { client }
    }
}
