use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use specter_engine::EngineError;

/// Central error type for the gateway. Each variant carries its HTTP
/// status; bodies are JSON with a human-readable message.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Missing code_snippet or invalid JSON body")]
    InvalidBody,

    #[error("Bad Request: Empty code snippet.")]
    EmptySnippet,

    #[error("Bad Request: Failed length/sanitization validation.")]
    SanitizationFailed,

    #[error("Unauthorized")]
    AuthMissing,

    #[error("Forbidden: token has expired")]
    AuthExpired,

    #[error("Forbidden: invalid token signature")]
    AuthInvalidSignature,

    #[error("Forbidden: token rejected")]
    AuthRejected,

    #[error("Specter Engine failed to process analysis.")]
    Engine(#[from] EngineError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            GatewayError::InvalidBody
            | GatewayError::EmptySnippet
            | GatewayError::SanitizationFailed => StatusCode::BAD_REQUEST,
            GatewayError::AuthMissing => StatusCode::UNAUTHORIZED,
            GatewayError::AuthExpired
            | GatewayError::AuthInvalidSignature
            | GatewayError::AuthRejected => StatusCode::FORBIDDEN,
            GatewayError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // The sanitization gates report under "message", everything else under
    // "error", matching the wire contract of the service this replaces.
    fn body_key(&self) -> &'static str {
        match self {
            GatewayError::EmptySnippet | GatewayError::SanitizationFailed => "message",
            _ => "error",
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => GatewayError::UnsupportedMediaType,
            _ => GatewayError::InvalidBody,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = serde_json::Map::new();
        body.insert(self.body_key().to_string(), json!(self.to_string()));
        body.insert("status_code".to_string(), json!(status.as_u16()));

        (status, Json(serde_json::Value::Object(body))).into_response()
    }
}
