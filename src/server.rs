//! HTTP surface: `POST /translate` and `GET /languages`.

use crate::error::GatewayError;
use crate::gateway::{TranslationGateway, TranslationResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<TranslationGateway>,
}

impl AppState {
    pub fn new(gateway: TranslationGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

/// Body of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateBody {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslateBody {
    /// Read the three fields out of a JSON object.
    ///
    /// Absent or `null` fields are reported before type errors, so a body
    /// missing any key always gets the missing-parameters message.
    pub fn from_json(value: Value) -> Result<Self, GatewayError> {
        let Value::Object(mut fields) = value else {
            return Err(GatewayError::invalid_body("expected a JSON object"));
        };

        let mut take = |key: &str| fields.remove(key).filter(|v| !v.is_null());
        let (text, source_lang, target_lang) =
            match (take("text"), take("source_lang"), take("target_lang")) {
                (Some(text), Some(source), Some(target)) => (text, source, target),
                _ => return Err(GatewayError::MissingParameters),
            };

        Ok(Self {
            text: string_field("text", text)?,
            source_lang: string_field("source_lang", source_lang)?,
            target_lang: string_field("target_lang", target_lang)?,
        })
    }
}

fn string_field(key: &str, value: Value) -> Result<String, GatewayError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(GatewayError::invalid_body(format!("`{}` must be a string", key))),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/translate", post(translate))
        .route("/languages", get(supported_languages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslationResult>, GatewayError> {
    let Json(value) = payload.map_err(|rejection| GatewayError::InvalidBody {
        status: rejection.status(),
        reason: rejection.body_text(),
    })?;
    let TranslateBody {
        text,
        source_lang,
        target_lang,
    } = TranslateBody::from_json(value)?;

    let source_lang = source_lang.to_lowercase();
    let target_lang = target_lang.to_lowercase();

    match state
        .gateway
        .translate(&text, &source_lang, &target_lang)
        .await
    {
        Ok(result) => {
            info!("Translated {} -> {}", source_lang, target_lang);
            Ok(Json(result))
        }
        Err(e @ GatewayError::TranslationProviderError(_)) => {
            warn!("Translation {} -> {} failed: {}", source_lang, target_lang, e);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

async fn supported_languages(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.gateway.list_supported_languages())
}
