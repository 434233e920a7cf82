//! Gemini API client module
//!
//! Encapsulates the text-generation call that turns computed sales insights
//! into a natural-language summary. The request handler only sees the
//! [`TextGenerator`] trait, so tests can stand in a local double for the
//! network client.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::InsightsError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Text-generation capability consumed by the request handler.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt, returning the provider's reply verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, InsightsError>;
}

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model_name: String,
}

impl GeminiClient {
    /// Create a client with a request timeout and an optional model override.
    pub fn new(api_key: String, model_name: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, InsightsError> {
        #[cfg(feature = "debug-logs")]
        info!("Sending prompt to Gemini:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary from Gemini ({} prompt chars)",
            prompt.len()
        );

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "temperature": 0.3,
                "maxOutputTokens": 1024
            }
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| InsightsError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response body: {e}"));
            return Err(InsightsError::GeminiError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            InsightsError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        extract_candidate_text(&response_json)
            .ok_or_else(|| InsightsError::GeminiError("No text in response".to_string()))
    }
}

/// Pull the generated text out of a `generateContent` response.
///
/// Joins the text parts of the first candidate; Gemini occasionally splits a
/// reply across several parts.
fn extract_candidate_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let texts: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.join(""))
    }
}
