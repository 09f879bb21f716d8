use std::error::Error as StdError;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ExecutionError>;

/// The single failure kind of the oracle pipeline.
///
/// Covers LLM transport failures, malformed or schema-invalid model output,
/// ledger submission failures and confirmation failures. Parse failures keep
/// the raw model text around so operators can see what the model said.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExecutionError {
    message: String,
    raw_response: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raw_response: None,
            source: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            raw_response: None,
            source: Some(cause.into()),
        }
    }

    /// Attach the untrusted model output that triggered this failure.
    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_response = Some(raw.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn raw_response(&self) -> Option<&str> {
        self.raw_response.as_deref()
    }

    pub fn has_cause(&self) -> bool {
        self.source.is_some()
    }
}
