//! Generation pipeline — orchestrates prompt building, the backend call,
//! response normalization, code extraction, validation, and audit logging.
//!
//! Flow (diagram): catalog lookup → format imports → fill template →
//!       backend → normalize → extract code block → validate → audit → code.
//!
//! The Generator owns no persistent state beyond its configuration; every
//! request is independent.

use std::sync::Arc;

use tracing::info;

use crate::catalog::{find_relevant_components, ComponentCatalog, RelevantImports};
use crate::errors::GenerationError;
use crate::generation::audit::{AuditLog, GenerationKind};
use crate::generation::codeblock::extract_code_block;
use crate::generation::prompts::{
    CODE_PROMPT_TEMPLATE, DIAGRAM_PROMPT_TEMPLATE, TEXT_PROMPT_TEMPLATE,
};
use crate::imports::format_imports;
use crate::llm_client::response::parse_response;
use crate::llm_client::ModelBackend;

/// Checks generated diagram code against the imports that were offered.
/// Extension point; the default implementation accepts everything.
pub trait ImportValidator: Send + Sync {
    fn validate(&self, imports: &RelevantImports, code: &str) -> Result<(), GenerationError>;
}

/// Default validator: accepts all generated code unchanged.
pub struct AcceptAllImports;

impl ImportValidator for AcceptAllImports {
    fn validate(&self, _imports: &RelevantImports, _code: &str) -> Result<(), GenerationError> {
        Ok(())
    }
}

/// Orchestrator bound to one model name and one backend. All provider
/// variation lives behind [`ModelBackend`]; everything here is shared.
pub struct Generator {
    model: String,
    backend: Arc<dyn ModelBackend>,
    catalog: ComponentCatalog,
    validator: Arc<dyn ImportValidator>,
    audit: AuditLog,
}

impl Generator {
    /// Creates a generator with an empty catalog, the accept-all validator,
    /// and audit logs rooted at the current directory. Use the `with_*`
    /// methods to override.
    pub fn new(model: impl Into<String>, backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            model: model.into(),
            backend,
            catalog: ComponentCatalog::new(),
            validator: Arc::new(AcceptAllImports),
            audit: AuditLog::new("."),
        }
    }

    /// Builds a generator from environment configuration, picking the
    /// provider whose API key is set (Anthropic wins if both are).
    pub fn from_config(config: &crate::config::Config) -> anyhow::Result<Self> {
        let backend: Arc<dyn ModelBackend> = if let Some(key) = &config.anthropic_api_key {
            Arc::new(crate::llm_client::AnthropicBackend::new(
                key.clone(),
                config.model.clone(),
            )?)
        } else if let Some(key) = &config.openai_api_key {
            Arc::new(crate::llm_client::OpenAiBackend::new(
                key.clone(),
                config.model.clone(),
            )?)
        } else {
            anyhow::bail!("No provider API key set (need ANTHROPIC_API_KEY or OPENAI_API_KEY)");
        };

        Ok(Self::new(config.model.clone(), backend).with_audit_root(config.audit_root.clone()))
    }

    pub fn with_catalog(mut self, catalog: ComponentCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn ImportValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_audit_root(mut self, root: impl Into<std::path::PathBuf>) -> Self {
        self.audit = AuditLog::new(root);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates diagram code for `prompt`.
    ///
    /// Relevant components are looked up in the catalog, rendered as import
    /// lines, and embedded into the diagram template together with the
    /// fixed `diagram_output` save instruction. The extracted code is run
    /// through the import validator and logged under `generated_code`
    /// before being returned; an audit write failure fails the request.
    pub async fn generate_diagram(&self, prompt: &str) -> Result<String, GenerationError> {
        let relevant = find_relevant_components(&self.catalog, prompt);
        let imports = format_imports(&relevant);

        let full_prompt = DIAGRAM_PROMPT_TEMPLATE
            .replace("{imports}", &imports)
            .replace("{prompt}", prompt);

        info!(
            model = %self.model,
            matched_categories = relevant.len(),
            "Generating diagram"
        );

        let response = self.backend.get_model_response(&full_prompt).await?;
        let text = parse_response(&response)?;
        let code = extract_code_block(&text)?;

        self.validator.validate(&relevant, &code)?;

        self.audit
            .append(GenerationKind::Code, &self.model, prompt, &code)
            .await?;

        Ok(code)
    }

    /// Generates code for `prompt` with the generic code template.
    /// Not logged and not validated.
    pub async fn generate_code(&self, prompt: &str) -> Result<String, GenerationError> {
        let full_prompt = CODE_PROMPT_TEMPLATE.replace("{prompt}", prompt);

        info!(model = %self.model, "Generating code");

        let response = self.backend.get_model_response(&full_prompt).await?;
        let text = parse_response(&response)?;
        extract_code_block(&text)
    }

    /// Generates free text for `prompt`. The normalized text is returned
    /// verbatim (no code extraction) after being logged under
    /// `generated_text`.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let full_prompt = TEXT_PROMPT_TEMPLATE.replace("{prompt}", prompt);

        info!(model = %self.model, "Generating text");

        let response = self.backend.get_model_response(&full_prompt).await?;
        let text = parse_response(&response)?;

        self.audit
            .append(GenerationKind::Text, &self.model, prompt, &text)
            .await?;

        Ok(text)
    }
}
