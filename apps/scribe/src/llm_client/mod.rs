//! LLM client — the single seam between the generation pipeline and model
//! providers.
//!
//! ARCHITECTURAL RULE: the generation pipeline never talks to a provider
//! API directly. Providers implement exactly one operation,
//! [`ModelBackend::get_model_response`]; every other piece of logic
//! (prompt building, normalization, extraction, audit logging) is shared.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::GenerationError;

pub mod anthropic;
pub mod openai;
pub mod response;

pub use anthropic::AnthropicBackend;
pub use openai::OpenAiBackend;

/// A model provider. Takes a fully rendered prompt and returns the raw
/// response value in whatever envelope the provider uses; the normalizer
/// in [`response`] deals with the shape.
///
/// A hung call hangs the request — there is no retry and no timeout beyond
/// the HTTP client's own.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn get_model_response(&self, full_prompt: &str) -> Result<Value, GenerationError>;
}
