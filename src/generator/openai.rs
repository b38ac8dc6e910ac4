use std::time::Duration;

use reqwest::{
    blocking::Client,
    StatusCode,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    json,
    Value,
};
use tracing::debug;

use super::{
    CompletionRequest,
    LanguageModel,
};
use crate::core::{
    http::http_client,
    FlashcardError,
};

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    /// Reads the API key from the environment variable named in `settings`.
    pub fn new(settings: &LlmSettings) -> Result<Self, FlashcardError> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FlashcardError::Backend(format!(
                    "environment variable '{}' is not set",
                    settings.api_key_env
                ))
            })?;

        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(settings: &LlmSettings, api_key: String) -> Result<Self, FlashcardError> {
        Ok(Self {
            client: http_client(Duration::from_secs(settings.timeout_secs))?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
        })
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": request.prompt }],
            "temperature": request.temperature,
            "stream": false,
        })
    }

    fn parse_completion(body: &Value) -> Result<String, FlashcardError> {
        let choice = body
            .get("choices")
            .and_then(|choices| choices.get(0))
            .ok_or_else(|| FlashcardError::Backend("no choices in response".to_string()))?;

        choice
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FlashcardError::Backend("no message content in choice".to_string()))
    }

    fn map_http_error(status: StatusCode, body: &str) -> FlashcardError {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error")?.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            401 => FlashcardError::Backend(format!("authentication failed: {detail}")),
            429 => FlashcardError::Backend(format!("rate limited: {detail}")),
            code if code >= 500 => FlashcardError::Backend(format!("server error ({status}): {detail}")),
            _ => FlashcardError::Backend(format!("HTTP {status}: {detail}")),
        }
    }
}

impl LanguageModel for OpenAiBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<String, FlashcardError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .map_err(|e| FlashcardError::Backend(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FlashcardError::Backend(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(Self::map_http_error(status, &body));
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| FlashcardError::Backend(format!("invalid JSON from backend: {e}")))?;

        Self::parse_completion(&json)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
