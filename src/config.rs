use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translation.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    // Google Cloud
    pub project_id: String,
    pub translate_api_url: String,
    pub access_token: Option<String>,
    pub request_timeout_secs: u64,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let project_id = std::env::var("PROJECT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .context("PROJECT_ID environment variable must be set")?;

        let port = match std::env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            project_id,
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            access_token: std::env::var("GOOGLE_ACCESS_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            request_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),

            port,
        })
    }

    /// Resource scope every provider call is made against
    pub fn parent(&self) -> String {
        format!("projects/{}/locations/global", self.project_id)
    }
}
