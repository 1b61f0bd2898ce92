//! Upload-and-analyze client for the AI Business Analyst backend.

pub mod client;
pub mod model;

pub use client::AnalyzeClient;
pub use model::AnalysisResponse;
