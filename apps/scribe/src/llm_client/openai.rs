//! OpenAI-compatible chat completions backend. Works against api.openai.com
//! or any server exposing the same `/chat/completions` contract.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::GenerationError;
use crate::llm_client::ModelBackend;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Backend for OpenAI-compatible chat completion endpoints. Returns the raw
/// response body with its `choices` envelope intact.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiBackend {
    pub fn new(api_key: String, model: String) -> Result<Self, GenerationError> {
        Self::with_base_url(api_key, model, OPENAI_API_BASE.to_string())
    }

    /// Points the backend at a non-default base URL, e.g. a local
    /// OpenAI-compatible server.
    pub fn with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
            model,
            base_url,
        })
    }
}

#[async_trait]
impl ModelBackend for OpenAiBackend {
    async fn get_model_response(&self, full_prompt: &str) -> Result<Value, GenerationError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: full_prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        debug!(model = %self.model, "OpenAI-compatible call succeeded");
        Ok(body)
    }
}
