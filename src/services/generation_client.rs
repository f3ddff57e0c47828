use reqwest::Client;
use serde::Serialize;

use crate::models::ChatMessage;

pub const DEFAULT_ENDPOINT: &str = "https://text.pollinations.ai/";

/// Model id of the reasoning-capable variant; the only one that accepts
/// a `reasoning_effort` field.
pub const REASONING_MODEL: &str = "openai-reasoning";

/// Generation request body. The endpoint answers with raw HTML text, not
/// a structured completion object.
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(rename = "jsonMode")]
    pub json_mode: bool,
    pub private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
}

/// Client for the text-generation endpoint.
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Send the full transcript and return the response body verbatim as
    /// the new HTML. Exactly one attempt per call: a failure is returned
    /// to the caller, never retried.
    pub async fn generate(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
        reasoning_effort: Option<&str>,
    ) -> Result<String, String> {
        let request = GenerationRequest {
            messages,
            model: model.to_string(),
            json_mode: false,
            private: true,
            reasoning_effort: reasoning_effort.map(str::to_string),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("API error ({}): {}", status, error_text));
        }

        response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))
    }
}

impl Default for GenerationClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let request = GenerationRequest {
            messages: vec![ChatMessage::assistant("seed"), ChatMessage::user("hi")],
            model: "openai".to_string(),
            json_mode: false,
            private: true,
            reasoning_effort: None,
        };

        let body: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(body["jsonMode"], false);
        assert_eq!(body["private"], true);
        assert_eq!(body["messages"][0]["role"], "assistant");
        // Absent unless the reasoning-capable model is selected.
        assert!(body.get("reasoning_effort").is_none());
    }

    #[test]
    fn reasoning_effort_serializes_when_present() {
        let request = GenerationRequest {
            messages: Vec::new(),
            model: REASONING_MODEL.to_string(),
            json_mode: false,
            private: true,
            reasoning_effort: Some("high".to_string()),
        };

        let body: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(body["reasoning_effort"], "high");
    }
}
