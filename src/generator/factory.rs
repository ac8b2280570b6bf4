//! Backend factory
//!
//! Creates generator instances from configuration values.

use crate::generator::openai::OpenAiBackend;
use crate::generator::prompt::DEFAULT_MODEL;
use crate::generator::stub::StubBackend;
use crate::generator::{Generator, GeneratorError};
use crate::transport::Transport;

/// Base URL used when the config leaves it blank
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Create a generator from config values.
///
/// Empty base_url and model fall back to the OpenAI defaults; the
/// provider name must be one of "openai" or "stub".
pub fn create_generator(
    provider: &str,
    base_url: &str,
    model: &str,
    api_key: &str,
    transport: Transport,
) -> Result<Generator, GeneratorError> {
    match provider {
        "stub" => Ok(Generator::Stub(StubBackend::new())),
        "openai" => {
            let base_url = if base_url.is_empty() {
                DEFAULT_BASE_URL
            } else {
                base_url
            };
            let model = if model.is_empty() { DEFAULT_MODEL } else { model };

            Ok(Generator::OpenAi(OpenAiBackend::with_transport(
                base_url.to_string(),
                model.to_string(),
                api_key.to_string(),
                transport,
            )))
        }
        other => Err(GeneratorError::Configuration(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
