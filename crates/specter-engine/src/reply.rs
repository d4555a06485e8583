//! Parsing of the model's free-form reply.

use serde::{Deserialize, Deserializer, Serialize};

use crate::EngineError;

/// Deserialize a string that may be null as an empty string.
fn null_to_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// The finding the model is expected to return. Every field is tolerant:
/// missing or null values deserialize to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelFinding {
    /// Label keyed into the severity table, e.g. "IDOR_HIGH".
    #[serde(default, deserialize_with = "null_to_empty_string")]
    pub vulnerability_type: String,

    /// Free-form vulnerability description.
    #[serde(default, deserialize_with = "null_to_empty_string")]
    pub vulnerability: String,

    /// Impact assessment.
    #[serde(default, deserialize_with = "null_to_empty_string")]
    pub impact: String,

    /// Exploitation difficulty.
    #[serde(default, deserialize_with = "null_to_empty_string")]
    pub difficulty: String,
}

impl ModelFinding {
    /// Description to surface to the caller, with the original's fallback
    /// when the model left it blank.
    pub fn description(&self) -> String {
        if self.vulnerability.trim().is_empty() {
            "Unknown logic flaw".to_string()
        } else {
            self.vulnerability.clone()
        }
    }
}

/// Extract JSON from a markdown ```json code block, if present.
fn extract_json_from_markdown(text: &str) -> Option<String> {
    let json_start = text.find("```json")?;
    let content_start = json_start + 7;
    let remaining = text[content_start..].trim_start();

    let json_end = remaining.find("```")?;
    let json_content = remaining[..json_end].trim();

    if json_content.is_empty() {
        return None;
    }

    Some(json_content.to_string())
}

/// Parse the raw model reply into a finding.
///
/// Models sometimes wrap the JSON in a markdown fence; the fence is
/// stripped before parsing.
pub fn parse_finding(raw: &str) -> Result<ModelFinding, EngineError> {
    if raw.trim().is_empty() {
        return Err(EngineError::EmptyReply);
    }

    let json_str = extract_json_from_markdown(raw).unwrap_or_else(|| raw.trim().to_string());

    serde_json::from_str(&json_str).map_err(|e| {
        EngineError::MalformedReply(format!(
            "{} - content: {}",
            e,
            json_str.chars().take(200).collect::<String>()
        ))
    })
}
