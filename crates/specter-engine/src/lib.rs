//! LLM analysis engine for the Specter scan gateway.
//!
//! One blocking call per request: build the prompt, send it to the model,
//! parse the JSON finding, and translate it into a scan report through the
//! static severity table. No retries, no streaming.

mod client;
mod prompt;
mod reply;

pub use client::{GeminiClient, ModelClient};
pub use prompt::build_scan_prompt;
pub use reply::{parse_finding, ModelFinding};

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use specter_core::{severity_for, snippet_hash, ScanReport, VulnLabel};

/// Errors that can occur while producing a scan report.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model API error: {0}")]
    Api(String),

    #[error("model returned an empty reply")]
    EmptyReply,

    #[error("failed to parse model reply: {0}")]
    MalformedReply(String),
}

/// The analysis engine: a model client plus the severity translation.
#[derive(Clone)]
pub struct ScanEngine {
    client: Arc<dyn ModelClient>,
}

impl ScanEngine {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Analyze one snippet and translate the finding into a report.
    pub async fn scan(&self, code_snippet: &str, code_language: &str) -> Result<ScanReport, EngineError> {
        let prompt = build_scan_prompt(code_snippet, code_language);
        debug!(prompt_len = prompt.len(), language = code_language, "dispatching scan prompt");

        let raw_reply = self.client.generate(&prompt).await?;
        let finding = parse_finding(&raw_reply)?;

        let label = VulnLabel::from_label(&finding.vulnerability_type);
        if label == VulnLabel::LowRisk && finding.vulnerability_type != "LOW_RISK" {
            warn!(
                label = %finding.vulnerability_type,
                "model emitted an unknown vulnerability label, using fallback entry"
            );
        }
        let entry = severity_for(label);

        Ok(ScanReport {
            vulnerability: finding.description(),
            severity: format!("{:.1}", entry.score),
            remediation: entry.remediation.to_string(),
            code_hash: snippet_hash(code_snippet),
        })
    }
}
