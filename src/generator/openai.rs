//! OpenAI-compatible backend
//!
//! Chat-completion HTTP API client. Works against api.openai.com and
//! any endpoint speaking the same protocol.

use serde_json::Value as JsonValue;

use crate::generator::prompt::{user_instruction, SYSTEM_INSTRUCTION};
use crate::generator::{GenerateBackend, GeneratorError};
use crate::transport::{SyncTransport, Transport};

/// OpenAI-compatible backend
#[derive(Debug)]
pub struct OpenAiBackend {
    /// Base URL (e.g., https://api.openai.com/v1)
    base_url: String,
    /// Model name (e.g., gpt-3.5-turbo)
    model: String,
    /// API key
    api_key: String,
    /// HTTP transport
    transport: Transport,
}

impl OpenAiBackend {
    /// Create new backend with the real transport
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self::with_transport(base_url, model, api_key, Transport::default())
    }

    /// Create backend with custom transport (for testing)
    pub fn with_transport(
        base_url: String,
        model: String,
        api_key: String,
        transport: Transport,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport,
        }
    }

    /// Get model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build chat request body
    pub fn build_request(&self, requirement: &str) -> String {
        let request = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_INSTRUCTION},
                {"role": "user", "content": user_instruction(requirement)}
            ]
        });

        request.to_string()
    }

    /// Extract content from JSON response
    fn extract_content(&self, response: &str) -> Result<String, GeneratorError> {
        let json: JsonValue = serde_json::from_str(response)?;

        let content = json["choices"]
            .get(0)
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                GeneratorError::InvalidResponse("Missing choices[0].message.content".to_string())
            })?;

        Ok(content.to_string())
    }
}

impl GenerateBackend for OpenAiBackend {
    fn generate(&self, requirement: &str) -> Result<String, GeneratorError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = self.build_request(requirement);

        let auth_header = format!("Bearer {}", self.api_key);
        let headers = [
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.transport.post_json(&url, &headers, &body)?;

        match response.status {
            200..=299 => self.extract_content(&response.body),
            401 => Err(GeneratorError::Authentication(
                "Invalid API key".to_string(),
            )),
            status => Err(GeneratorError::Http {
                status,
                message: response.body,
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
