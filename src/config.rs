//! Configuration loading.
//!
//! Reads `config.toml` from the config root using simple string matching
//! (no TOML dependency). Values may point at environment variables with
//! the `env:NAME` prefix so secrets stay out of the file.

use std::path::Path;

/// Config file name, resolved relative to the config root.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolved application configuration.
///
/// Jira credentials drive the issue fetch; the generator fields select
/// and authenticate the test-case backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub jira_domain: String,
    pub jira_username: String,
    pub jira_api_token: String,
    pub provider: String,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Load configuration from `config.toml` under the config root.
pub fn load_config(config_root: &Path) -> std::io::Result<Config> {
    let config_path = config_root.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&config_path)?;
    Ok(parse_config(&content))
}

/// Parse TOML-style config content.
///
/// Missing keys become empty strings; the caller decides which fields
/// are required for the operation at hand. Provider defaults to
/// "openai" when absent.
pub fn parse_config(content: &str) -> Config {
    let value = |key: &str| {
        extract_config_value(content, key)
            .map(|v| resolve_env_var(&v))
            .unwrap_or_default()
    };

    let mut config = Config {
        jira_domain: value("domain"),
        jira_username: value("username"),
        jira_api_token: value("api_token"),
        provider: value("provider"),
        base_url: value("base_url"),
        api_key: value("api_key"),
        model: value("model"),
    };

    if config.provider.is_empty() {
        config.provider = "openai".to_string();
    }

    config
}

/// Extract config value from TOML-style string
///
/// Simple parser for "key = \"value\"" pattern.
fn extract_config_value(content: &str, key: &str) -> Option<String> {
    let pattern = format!("{} = \"", key);
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with(&pattern) {
            let start = pattern.len();
            if let Some(end) = line[start..].find('"') {
                return Some(line[start..start + end].to_string());
            }
        }
    }
    None
}

/// Resolve environment variable reference
///
/// If value starts with "env:", read from environment.
/// Otherwise return value as-is.
fn resolve_env_var(value: &str) -> String {
    if let Some(rest) = value.strip_prefix("env:") {
        std::env::var(rest).unwrap_or_else(|_| format!("env:{}", rest))
    } else {
        value.to_string()
    }
}
