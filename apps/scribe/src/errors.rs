use thiserror::Error;

/// Crate-wide error type.
/// Every failure is terminal for the current request — nothing is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Unrecognized response format: {response}")]
    UnrecognizedResponseFormat { response: String },

    #[error("No fenced code block found in model output")]
    NoCodeBlockFound,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audit log write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generated code failed import validation: {0}")]
    InvalidImports(String),
}
