//! External translation provider.
//!
//! The gateway talks to the provider through the [`TranslationProvider`]
//! trait so handlers can be exercised against stub providers. The production
//! implementation calls the Google Cloud Translation v3 REST API.

use crate::config::Config;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const MIME_TYPE_TEXT: &str = "text/plain";

/// A single batch-translate call, shaped like the v3 `translateText` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub contents: Vec<String>,
    pub source_language_code: String,
    pub target_language_code: String,
    /// Resource scope, e.g. `projects/<id>/locations/global`. Part of the URL, not the body.
    #[serde(skip)]
    pub parent: String,
    pub mime_type: String,
}

/// One translated text, in the same position as its input in `contents`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Failed to send request to translation API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse translation API response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate every entry of `request.contents`, returning results in order.
    async fn translate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<Vec<Translation>, ProviderError>;
}

/// Google Cloud Translation v3 over REST
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    client: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
}

impl GoogleTranslateProvider {
    pub fn new(
        api_url: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.translate_api_url.clone(),
            config.access_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to build translation API client")
    }

    fn endpoint(&self, parent: &str) -> String {
        format!("{}/v3/{}:translateText", self.api_url, parent)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<Vec<Translation>, ProviderError> {
        let url = self.endpoint(&request.parent);
        debug!(
            "Calling translation API: {} ({} -> {})",
            url, request.source_language_code, request.target_language_code
        );

        let mut builder = self.client.post(&url).json(request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(ProviderError::Api { status, body });
        }

        let body = response.text().await?;
        let parsed: TranslateTextResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(parsed.translations)
    }
}
