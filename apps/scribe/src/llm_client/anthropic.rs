//! Anthropic Messages API backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::GenerationError;
use crate::llm_client::ModelBackend;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl AnthropicResponse {
    /// The first text block as a bare string value, or null when the reply
    /// carried no text block. The Messages API wraps `content` in an array
    /// of typed blocks, which the normalizer does not speak; unwrapping it
    /// here keeps envelope knowledge inside the provider.
    fn into_text_value(self) -> Value {
        self.content
            .into_iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text)
            .map(Value::String)
            .unwrap_or(Value::Null)
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Backend for the Anthropic Messages API. Returns the first text block of
/// the reply as a bare string; block-array unwrapping happens here, the
/// rest of envelope handling belongs to the normalizer.
#[derive(Clone)]
pub struct AnthropicBackend {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicBackend {
    pub fn new(api_key: String, model: String) -> Result<Self, GenerationError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl ModelBackend for AnthropicBackend {
    async fn get_model_response(&self, full_prompt: &str) -> Result<Value, GenerationError> {
        let request_body = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: full_prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: AnthropicResponse = response.json().await?;
        debug!(model = %self.model, "Anthropic call succeeded");
        Ok(body.into_text_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::response::parse_response;
    use serde_json::json;

    #[test]
    fn test_messages_body_flows_through_normalizer() {
        let body = json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-5",
            "content": [{"type": "text", "text": "Hello world"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        });

        let parsed: AnthropicResponse = serde_json::from_value(body).unwrap();
        let value = parsed.into_text_value();
        assert_eq!(value, json!("Hello world"));
        assert_eq!(parse_response(&value).unwrap(), "Hello world");
    }

    #[test]
    fn test_first_text_block_wins_over_non_text_blocks() {
        let body = json!({
            "content": [
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "after the tool"}
            ]
        });

        let parsed: AnthropicResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.into_text_value(), json!("after the tool"));
    }

    #[test]
    fn test_reply_without_text_block_is_empty_response() {
        let body = json!({"content": []});

        let parsed: AnthropicResponse = serde_json::from_value(body).unwrap();
        let value = parsed.into_text_value();
        assert!(value.is_null());
        assert!(matches!(
            parse_response(&value).unwrap_err(),
            crate::errors::GenerationError::EmptyResponse
        ));
    }
}
