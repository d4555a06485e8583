//! Model client abstraction and the Gemini-backed implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::EngineError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A synchronous request/response boundary to the external generative
/// model. Injectable so tests can substitute fakes returning canned JSON.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt and return the model's text reply.
    async fn generate(&self, prompt: &str) -> Result<String, EngineError>;
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Debug, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    pub model: String,
    pub base_url: String,
    pub client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
            api_key,
        }
    }

    /// Override the API base URL, e.g. for a proxy.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, EngineError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let response_text = response.text().await?;
        tracing::debug!("Raw model API response: {}", response_text);

        // First, check for an API error body
        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&response_text) {
            return Err(EngineError::Api(format!(
                "{} ({})",
                error_response.error.message, error_response.error.status
            )));
        }

        // Then parse the successful response
        let parsed: GenerateResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!("Model response parse error: {} | raw: {}", e, response_text);
            EngineError::MalformedReply(format!("unexpected API response shape: {}", e))
        })?;

        let text: String = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            tracing::error!("Empty candidate content: {}", response_text);
            return Err(EngineError::EmptyReply);
        }

        Ok(text)
    }
}
