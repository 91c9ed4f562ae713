//! Scribe — a thin core for LLM-backed diagram, code, and text generation.
//!
//! It builds prompts, dispatches them to a pluggable [`ModelBackend`],
//! normalizes whatever envelope the provider replies with into plain text,
//! extracts fenced code blocks, and appends every generation to a
//! per-model audit log. No retries, no caching, no streaming: a failure is
//! terminal for its request.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod generation;
pub mod imports;
pub mod llm_client;

pub use catalog::{all_components, find_relevant_components, ComponentCatalog, RelevantImports};
pub use config::Config;
pub use errors::GenerationError;
pub use generation::{AcceptAllImports, AuditLog, GenerationKind, Generator, ImportValidator};
pub use imports::format_imports;
pub use llm_client::response::parse_response;
pub use llm_client::{AnthropicBackend, ModelBackend, OpenAiBackend};
