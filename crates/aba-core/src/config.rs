//! Backend endpoint configuration.
//!
//! Plain data, injected into the places that need it. Resolution order:
//! explicit override (CLI flag or `ABA_BACKEND_URL`, both handled by the
//! CLI) > `.aba/config.toml` in the project directory > compiled-in default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AbaError, AbaResult};

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Resolved client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis backend.
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.aba/config.toml` under the project
    /// directory, falling back to defaults when the file does not exist.
    pub fn load(project_dir: &Path) -> AbaResult<Self> {
        let path = project_dir.join(".aba/config.toml");
        if !path.is_file() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| AbaError::config(format!("{}: {}", path.display(), e)))
    }

    /// Apply an explicit backend URL override, if any.
    pub fn with_backend_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.backend_url = url;
        }
        self
    }
}
