//! Image-generation variant of the OpenAI client.
//!
//! Some previews are plain images rather than rendered markup; the
//! images endpoint returns hosted URLs instead of text.

use crate::error::GenerateError;
use crate::provider::OpenAiClient;

impl OpenAiClient {
    /// Generate one image for `prompt` and return its hosted URL.
    ///
    /// POSTs `/v1/images/generations` and reads `data[0].url`. Shares
    /// the text client's error taxonomy: missing credential fails before
    /// any network call, non-success statuses surface the payload
    /// message.
    pub async fn generate_image(
        &self,
        prompt: &str,
        size: &str,
    ) -> Result<String, GenerateError> {
        self.ensure_credential()?;

        let body = serde_json::json!({
            "model": "dall-e-3",
            "prompt": prompt,
            "n": 1,
            "size": size,
        });

        let api_key = self.api_key.clone();
        let url = format!("{}/v1/images/generations", self.base_url);

        let result = tokio::task::spawn_blocking(move || -> Result<String, GenerateError> {
            let agent = crate::provider::http_agent();
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
                    message: crate::provider::payload_error_message(status, Some(&json)),
                });
            }

            json["data"]
                .as_array()
                .and_then(|arr| arr.first())
                .and_then(|d| d["url"].as_str())
                .map(str::to_string)
                .ok_or_else(|| GenerateError::Parse("response has no data[0].url".to_string()))
        })
        .await
        .map_err(|e| GenerateError::Task(e.to_string()))?;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn image_generation_requires_a_credential() {
        let client = OpenAiClient::new(String::new());
        let err = client
            .generate_image("a dashboard", "1024x1024")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingCredential { .. }));
    }
}
