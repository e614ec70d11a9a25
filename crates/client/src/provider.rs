//! Provider clients: the `LlmClient` seam and its OpenAI and Gemini
//! implementations.
//!
//! HTTP uses `ureq` (sync) wrapped in `tokio::task::spawn_blocking` so
//! callers stay async without the runtime blocking on I/O. Non-success
//! statuses are mapped to [`GenerateError::Provider`] with the message
//! taken from the provider's error payload when one is present.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// A supported generation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Key under which this provider's credential is stored.
    pub fn credential_key(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai_api_key",
            ProviderKind::Gemini => "gemini_api_key",
        }
    }

    /// Environment variable that overrides the stored credential.
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4",
            ProviderKind::Gemini => "gemini-1.5-flash",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a generation conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for calling a generation API to get a text completion.
///
/// Implementations handle the specifics of one provider's wire format.
/// The pipeline handles prompt construction and fragment extraction.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send messages to the provider and get the raw text response.
    async fn complete(&self, messages: Vec<Message>, model: &str)
        -> Result<String, GenerateError>;

    /// Stable identifier used in diagnostics.
    fn provider_id(&self) -> &'static str;
}

/// Pull the human-readable message out of a provider error payload,
/// falling back to a generic status line. Both OpenAI and Gemini nest
/// it under `error.message`.
pub(crate) fn payload_error_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|b| b.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("request failed with HTTP status {}", status))
}

/// Build a ureq agent that reports non-2xx statuses as responses, so
/// the error payload stays readable.
pub(crate) fn http_agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

// ──────────────────────────────────────────────
// OpenAI
// ──────────────────────────────────────────────

/// Client for the OpenAI chat-completions API.
pub struct OpenAiClient {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        OpenAiClient {
            api_key,
            base_url: "https://api.openai.com".to_string(),
            temperature: 0.7,
        }
    }

    /// Override the base URL (testing against a local stub).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub(crate) fn ensure_credential(&self) -> Result<(), GenerateError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerateError::MissingCredential {
                provider: ProviderKind::OpenAi.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        messages: Vec<Message>,
        model: &str,
    ) -> Result<String, GenerateError> {
        self.ensure_credential()?;

        let body = serde_json::json!({
            "model": model,
            "messages": messages,
            "temperature": self.temperature,
        });

        let api_key = self.api_key.clone();
        let url = format!("{}/v1/chat/completions", self.base_url);

        let result = tokio::task::spawn_blocking(move || -> Result<String, GenerateError> {
            let agent = http_agent();
            let response = agent
                .post(&url)
                .header("Authorization", &format!("Bearer {}", api_key))
                .header("content-type", "application/json")
                .send_json(body)
                .map_err(|e| GenerateError::Network(e.to_string()))?;

            let status = response.status().as_u16();
            let json: serde_json::Value = response
                .into_body()
                .read_json()
                .map_err(|e| GenerateError::Parse(format!("invalid JSON response: {}", e)))?;

            if !(200..300).contains(&status) {
                return Err(GenerateError::Provider {
                    status,
                    message: payload_error_message(status, Some(&json)),
                });
            }

            json["choices"]
                .as_array()
                .and_then(|arr| arr.first())
                .and_then(|c| c["message"]["content"].as_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    GenerateError::Parse("response has no choices[0].message.content".to_string())
                })
        })
        .await
        .map_err(|e| GenerateError::Task(e.to_string()))?;

        result
    }

    fn provider_id(&self) -> &'static str {
        "openai"
    }
}

// ──────────────────────────────────────────────
// Gemini
// ──────────────────────────────────────────────

/// Client for the Gemini generateContent API.
///
/// Gemini has no separate system role on this endpoint; messages are
/// collapsed into a single text part in order.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        GeminiClient {
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.7,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn ensure_credential(&self) -> Result<(), GenerateError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerateError::MissingCredential {
                provider: ProviderKind::Gemini.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(
        &self,
        messages: Vec<Message>,
        model: &str,
    ) -> Result<String, GenerateError> {
        self.ensure_credential()?;

        let text = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": text }] }],
            "generationConfig": { "temperature": self.temperature },
        });

        let api_key = self.api_key.clone();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        );

        let result = tokio::task::spawn_blocking(move || -> Result<String, GenerateError> {
            let agent = http_agent();
            let response = agent
                .post(&url)
                .header("x-goog-api-key", &api_key)
                .header("content-type", "application/json")
                .send_json(body)
                .map_err(|e| GenerateError::Network(e.to_string()))?;

            let status = response.status().as_u16();
            let json: serde_json::Value = response
                .into_body()
                .read_json()
                .map_err(|e| GenerateError::Parse(format!("invalid JSON response: {}", e)))?;

            if !(200..300).contains(&status) {
                return Err(GenerateError::Provider {
                    status,
                    message: payload_error_message(status, Some(&json)),
                });
            }

            json["candidates"]
                .as_array()
                .and_then(|arr| arr.first())
                .and_then(|c| c["content"]["parts"].as_array())
                .and_then(|parts| parts.first())
                .and_then(|p| p["text"].as_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    GenerateError::Parse(
                        "response has no candidates[0].content.parts[0].text".to_string(),
                    )
                })
        })
        .await
        .map_err(|e| GenerateError::Task(e.to_string()))?;

        result
    }

    fn provider_id(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn openai_missing_credential_fails_before_network() {
        let client = OpenAiClient::new(String::new())
            .with_base_url("http://127.0.0.1:1".to_string());
        let err = client
            .complete(vec![Message::user("hi")], "gpt-4")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn gemini_missing_credential_fails_before_network() {
        let client = GeminiClient::new("   ".to_string())
            .with_base_url("http://127.0.0.1:1".to_string());
        let err = client
            .complete(vec![Message::user("hi")], "gemini-1.5-flash")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingCredential { .. }));
    }

    #[test]
    fn payload_message_is_taken_verbatim() {
        let body = serde_json::json!({"error": {"message": "Incorrect API key provided"}});
        assert_eq!(
            payload_error_message(401, Some(&body)),
            "Incorrect API key provided"
        );
    }

    #[test]
    fn payload_message_falls_back_to_status_line() {
        let body = serde_json::json!({"unexpected": true});
        assert_eq!(
            payload_error_message(503, Some(&body)),
            "request failed with HTTP status 503"
        );
        assert_eq!(
            payload_error_message(500, None),
            "request failed with HTTP status 500"
        );
    }

    #[test]
    fn provider_kind_metadata() {
        assert_eq!(ProviderKind::OpenAi.credential_key(), "openai_api_key");
        assert_eq!(ProviderKind::Gemini.credential_key(), "gemini_api_key");
        assert_eq!(ProviderKind::OpenAi.default_model(), "gpt-4");
        assert_eq!(ProviderKind::Gemini.to_string(), "gemini");
    }
}
