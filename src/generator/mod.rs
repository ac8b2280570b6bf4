//! Test-case generation backends
//!
//! Provider-agnostic interface over chat-completion HTTP APIs. The
//! OpenAI-compatible backend does real work; the stub backend returns
//! canned test cases for tests and offline use.

pub mod factory;
pub mod openai;
pub mod prompt;
pub mod stub;

pub use factory::{create_generator, DEFAULT_BASE_URL};
pub use prompt::{user_instruction, DEFAULT_MODEL, SYSTEM_INSTRUCTION};

use crate::transport::TransportError;

/// Generator errors
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Network error (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error (non-2xx status)
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid response from provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::Json(err.to_string())
    }
}

impl From<TransportError> for GeneratorError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(msg) => GeneratorError::Network(msg),
            TransportError::Io(msg) => GeneratorError::Io(msg),
        }
    }
}

/// Generation backend trait
///
/// Takes the requirement text and returns the raw generated output,
/// one string with blank-line separated test cases.
pub trait GenerateBackend: Send + Sync {
    fn generate(&self, requirement: &str) -> Result<String, GeneratorError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}

/// Generator enum — concrete type for all backends
///
/// Wraps all backend types, implementing GenerateBackend via delegation.
#[derive(Debug)]
pub enum Generator {
    OpenAi(openai::OpenAiBackend),
    Stub(stub::StubBackend),
}

impl GenerateBackend for Generator {
    fn generate(&self, requirement: &str) -> Result<String, GeneratorError> {
        match self {
            Generator::OpenAi(b) => b.generate(requirement),
            Generator::Stub(b) => b.generate(requirement),
        }
    }

    fn provider_name(&self) -> &str {
        match self {
            Generator::OpenAi(b) => b.provider_name(),
            Generator::Stub(b) => b.provider_name(),
        }
    }
}
