use std::path::PathBuf;

use anyhow::{Context, Result};

/// Configuration loaded from environment variables by the embedding
/// application. Only the key for the provider actually in use needs to be
/// set; the other may stay empty.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub model: String,
    /// Root directory under which `generated_text/` and `generated_code/`
    /// audit directories are created.
    pub audit_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an injected variable lookup. Tests pass a
    /// closure over a plain map so process-wide env stays untouched.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY"),
            openai_api_key: lookup("OPENAI_API_KEY"),
            model: require(&lookup, "SCRIBE_MODEL")?,
            audit_root: lookup("SCRIBE_AUDIT_ROOT")
                .unwrap_or_else(|| ".".to_string())
                .into(),
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
