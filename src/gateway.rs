//! Translation gateway: resolves language keys and delegates to the provider.

use crate::error::GatewayError;
use crate::languages::LanguageRegistry;
use crate::provider::{ProviderRequest, TranslationProvider, MIME_TYPE_TEXT};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Successful translation, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    /// Display name, not the provider code
    pub source_language: String,
    pub target_language: String,
}

/// Built once at startup and shared by every request handler.
#[derive(Clone)]
pub struct TranslationGateway {
    registry: LanguageRegistry,
    provider: Arc<dyn TranslationProvider>,
    parent: String,
}

impl TranslationGateway {
    pub fn new(
        registry: LanguageRegistry,
        provider: Arc<dyn TranslationProvider>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            provider,
            parent: parent.into(),
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Translate `text` between two canonical (lowercase) language keys.
    ///
    /// Makes exactly one provider call; there is no retry. Unknown keys on
    /// either side fail with [`GatewayError::InvalidLanguage`] before the
    /// provider is contacted.
    pub async fn translate(
        &self,
        text: &str,
        source_key: &str,
        target_key: &str,
    ) -> Result<TranslationResult, GatewayError> {
        let (source, target) = match (
            self.registry.resolve(source_key),
            self.registry.resolve(target_key),
        ) {
            (Ok(source), Ok(target)) => (source, target),
            _ => return Err(GatewayError::InvalidLanguage),
        };

        let request = ProviderRequest {
            contents: vec![text.to_string()],
            source_language_code: source.provider_code.to_string(),
            target_language_code: target.provider_code.to_string(),
            parent: self.parent.clone(),
            mime_type: MIME_TYPE_TEXT.to_string(),
        };

        debug!(
            "Translating {} chars {} ({}) -> {} ({})",
            text.chars().count(),
            source.name,
            source.provider_code,
            target.name,
            target.provider_code
        );

        let translations = self
            .provider
            .translate_text(&request)
            .await
            .map_err(|e| GatewayError::TranslationProviderError(e.to_string()))?;

        let translated_text = translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                GatewayError::TranslationProviderError(
                    "Translation API returned no translations".to_string(),
                )
            })?;

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text,
            source_language: source.display_name.to_string(),
            target_language: target.display_name.to_string(),
        })
    }

    pub fn list_supported_languages(&self) -> BTreeMap<String, String> {
        self.registry.list_all()
    }
}
