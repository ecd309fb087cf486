use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failures surfaced to clients of the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Missing required parameters: text, source_lang, target_lang")]
    MissingParameters,

    /// Either side failed to resolve. Which side is deliberately not reported.
    #[error("Invalid language names")]
    InvalidLanguage,

    #[error("Translation error: {0}")]
    TranslationProviderError(String),

    /// Unusable body; `status` is 400 unless the body extractor reported
    /// something more specific (415, 413).
    #[error("Invalid request body: {reason}")]
    InvalidBody { status: StatusCode, reason: String },
}

impl GatewayError {
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        GatewayError::InvalidBody {
            status: StatusCode::BAD_REQUEST,
            reason: reason.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingParameters | GatewayError::InvalidLanguage => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::InvalidBody { status, .. } => *status,
            GatewayError::TranslationProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
