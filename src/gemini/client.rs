//! Google Gemini API client for prompt-driven image edits
//!
//! Thin wrapper around the `generateContent` endpoint: one request carrying
//! the original image and the instruction, asking for an image back.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use tracing::{debug, info, warn};

use super::types::GenerateContentResponse;
use crate::config::Config;
use crate::error::{ConfigError, EditError};
use crate::state::{EditJob, EditOutcome};

/// Error bodies are cut to this many characters before being shown
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self::with_http_client(config, client))
    }

    /// Build on top of an existing HTTP client
    pub fn with_http_client(config: &Config, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }

    pub fn build_request_body(image_base64: &str, mime_type: &str, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": {
                "parts": [
                    {
                        "inlineData": {
                            "data": image_base64,
                            "mimeType": mime_type
                        }
                    },
                    { "text": prompt }
                ]
            },
            "generationConfig": {
                "responseModalities": ["IMAGE"]
            }
        })
    }

    /// First inline image payload of the first candidate, if any
    pub fn extract_image_base64(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .find_map(|p| p.inline_data.as_ref())
                    .filter(|d| !d.data.is_empty())
            })
            .map(|d| d.data.clone())
    }

    /// Ask the service to apply `prompt` to the image
    ///
    /// # Returns
    /// * `Ok(Some(base64))` - the edited image
    /// * `Ok(None)` - the service answered without an image part
    /// * `Err(EditError)` - transport or service failure, never retried
    pub async fn edit_image(&self, image_base64: &str, mime_type: &str, prompt: &str) -> EditOutcome {
        let body = Self::build_request_body(image_base64, mime_type, prompt);

        info!(
            "Gemini image edit: model={} image={} bytes (b64) prompt={} chars",
            self.model,
            image_base64.len(),
            prompt.len()
        );

        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| EditError::Request(format!("invalid API key header: {}", e)))?;

        let response = self
            .client
            .post(self.url())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EditError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let truncated: String = error_body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!("Gemini returned HTTP {}", status);
            return Err(EditError::Status {
                status: status.as_u16(),
                body: truncated,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| EditError::Decode(e.to_string()))?;

        let image = Self::extract_image_base64(&parsed);
        debug!(
            "Gemini response: {} candidate(s), image={}",
            parsed.candidates.len(),
            image.is_some()
        );

        Ok(image)
    }

    /// Run a submission from the session and hand its token back with the outcome
    pub async fn execute(self, job: EditJob) -> (u64, EditOutcome) {
        let outcome = self
            .edit_image(&job.image_base64, &job.mime_type, &job.prompt)
            .await;
        (job.token, outcome)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
