//! Environment-driven configuration.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote marketplace API.
    pub api_url: String,
    /// Where the bearer credential is persisted between runs.
    pub token_file: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to local
    /// defaults. `.env` is loaded by the caller before this runs.
    pub fn from_env() -> Self {
        let api_url = std::env::var("TEENHUSTLE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let token_file = std::env::var("TEENHUSTLE_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".teenhustle-token.json"));

        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_file,
        }
    }
}
