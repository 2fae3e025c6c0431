//! Client configuration.
//!
//! The backend base URL is resolved from the `CASELINK_API_URL` environment
//! variable (a `.env` file is honored via dotenvy), falling back to the
//! local development server when unset.

use tracing::info;

/// Environment variable naming the backend base URL
pub const BASE_URL_ENV: &str = "CASELINK_API_URL";

/// Default base URL for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Build a config with an explicit base URL (trailing slashes trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from the environment, defaulting to
    /// [`DEFAULT_BASE_URL`] when the variable is unset.
    pub fn from_env() -> Self {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self::new(base_url);
        info!(base_url = %config.base_url, "api base url configured");
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
