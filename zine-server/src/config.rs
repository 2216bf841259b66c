use anyhow::{Context, Result};
use std::env;

/// Default base URL for the hosted backend.
pub const DEFAULT_BACKEND_URL: &str = "https://app.base44.com/api";

#[derive(Clone)]
pub struct Config {
    /// Application identifier used to address the backend.
    pub app_id: String,
    /// Bearer token for the backend and generation endpoints.
    pub api_key: String,
    /// Base URL of the backend-as-a-service.
    pub backend_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let app_id = env::var("ZINE_APP_ID")
            .context("ZINE_APP_ID environment variable is required")?;

        let api_key = env::var("ZINE_API_KEY")
            .context("ZINE_API_KEY environment variable is required")?;

        let backend_url = normalize_backend_url(env::var("ZINE_BACKEND_URL").ok());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        Ok(Config {
            app_id,
            api_key,
            backend_url,
            port,
        })
    }
}

/// Resolve the backend base URL from an optional override.
///
/// Missing, empty, or whitespace-only values fall back to the default.
/// A trailing slash is stripped so endpoint paths can be appended
/// uniformly.
pub fn normalize_backend_url(value: Option<String>) -> String {
    let url = match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    };
    url.trim_end_matches('/').to_string()
}
