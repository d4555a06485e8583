//! The hybrid-scan endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::AuthenticatedClient;
use crate::error::GatewayError;
use crate::sanitize;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub code_snippet: String,

    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "javascript".to_string()
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub message: String,
    pub code_hash: String,
    pub severity: String,
    pub vulnerability: String,
    pub remediation: String,
}

/// `POST /hybrid-scan`.
///
/// Gates run in strict sequence: bearer auth (extractor), body validation,
/// sanitization, then the model analysis. The first failing gate
/// short-circuits with its status code.
pub async fn hybrid_scan(
    State(state): State<Arc<AppState>>,
    client: AuthenticatedClient,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanResponse>, GatewayError> {
    let Json(request) = payload?;

    let snippet = sanitize::normalize_snippet(&request.code_snippet);
    sanitize::check_snippet(&snippet)?;

    info!(
        subject = %client.subject,
        language = %request.language,
        "snippet accepted for analysis"
    );

    let report = state
        .engine
        .scan(&snippet, &request.language)
        .await
        .map_err(|e| {
            error!("Specter engine failure: {e}");
            GatewayError::from(e)
        })?;

    info!(
        code_hash = %report.code_hash,
        severity = %report.severity,
        "scan complete"
    );

    Ok(Json(ScanResponse {
        message: "Analysis accepted by Specter Gateway.".to_string(),
        code_hash: report.code_hash,
        severity: report.severity,
        vulnerability: report.vulnerability,
        remediation: report.remediation,
    }))
}
