//! First-run configuration
//!
//! Detects missing or invalid config, prompts the user, writes
//! config.toml.
//!
//! NO network calls, NO credential validation.

use std::io::{self, Write};
use std::path::Path;

use crate::cli::{Error, Result};
use crate::config::CONFIG_FILE;
use crate::generator::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Outcome of the config preflight check
#[derive(Debug, Clone, PartialEq)]
pub enum PreflightOutcome {
    /// Continue with normal operation
    Proceed,
    /// Exit cleanly (config written, requires restart)
    Exit,
}

/// Run the config preflight check
///
/// # Behavior
/// - If config missing: run the wizard, write config, request restart
/// - If valid config exists: return Proceed immediately
/// - If invalid config exists: prompt for recovery
pub fn run_config_preflight(config_root: &Path) -> Result<PreflightOutcome> {
    let config_path = config_root.join(CONFIG_FILE);

    if !config_path.exists() {
        return run_preflight_wizard(&config_path);
    }

    match validate_config(&config_path) {
        Ok(()) => Ok(PreflightOutcome::Proceed),
        Err(e) => handle_invalid_config(&config_path, e),
    }
}

/// Run the wizard for first-time setup
fn run_preflight_wizard(config_path: &Path) -> Result<PreflightOutcome> {
    println!("No configuration found.");
    println!();
    println!("CaseForge needs Jira credentials and a test-case generator.");
    println!("Secrets may be given as env:VAR_NAME to read them from the");
    println!("environment instead of storing them in the file.");
    println!();

    let domain = prompt("Jira domain (e.g. example.atlassian.net)", "")?;
    let username = prompt("Jira username (email)", "")?;
    let api_token = prompt("Jira API token", "")?;

    println!();
    let provider = prompt("Generator provider (openai/stub)", "openai")?;

    let config_content = if provider == "stub" {
        format!(
            r#"[jira]
domain = "{}"
username = "{}"
api_token = "{}"

[generator]
provider = "stub"
"#,
            domain, username, api_token
        )
    } else {
        let base_url = prompt("Base URL", DEFAULT_BASE_URL)?;
        let api_key = prompt("API key", "")?;
        let model = prompt("Model name", DEFAULT_MODEL)?;

        format!(
            r#"[jira]
domain = "{}"
username = "{}"
api_token = "{}"

[generator]
provider = "{}"
base_url = "{}"
api_key = "{}"
model = "{}"
"#,
            domain, username, api_token, provider, base_url, api_key, model
        )
    };

    std::fs::write(config_path, config_content).map_err(Error::Io)?;

    println!();
    println!("Configuration written to: {}", config_path.display());
    println!();
    println!("Please restart caseforge to apply the configuration.");

    Ok(PreflightOutcome::Exit)
}

/// Handle invalid existing config
fn handle_invalid_config(config_path: &Path, error: String) -> Result<PreflightOutcome> {
    eprintln!("Invalid configuration: {}", error);
    eprintln!();
    eprintln!("  [1] Run the configuration wizard (overwrites the file)");
    eprintln!("  [2] Exit and edit the config file");
    eprintln!();
    print!("Choice: ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice).map_err(Error::Io)?;

    match choice.trim() {
        "1" => run_preflight_wizard(config_path),
        "2" => {
            println!();
            println!("Edit the config file at: {}", config_path.display());
            println!("Then restart caseforge.");
            Ok(PreflightOutcome::Exit)
        }
        _ => {
            eprintln!("Invalid choice. Exiting.");
            Ok(PreflightOutcome::Exit)
        }
    }
}

/// Print a labeled prompt and read one trimmed line.
///
/// Empty input falls back to the default.
fn prompt(label: &str, default: &str) -> Result<String> {
    if default.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, default);
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Validate existing config file
///
/// # Returns
/// * `Ok(())` - Config is valid
/// * `Err(String)` - Config is invalid with reason
fn validate_config(config_path: &Path) -> std::result::Result<(), String> {
    let content = std::fs::read_to_string(config_path)
        .map_err(|e| format!("Failed to read config: {}", e))?;

    let mut has_jira_section = false;
    let mut has_generator_section = false;

    for line in content.lines() {
        let line = line.trim();
        if line == "[jira]" {
            has_jira_section = true;
        } else if line == "[generator]" {
            has_generator_section = true;
        }
    }

    if !has_jira_section {
        return Err("Missing [jira] section".to_string());
    }

    if !has_generator_section {
        return Err("Missing [generator] section".to_string());
    }

    // The openai provider needs an endpoint; stub needs nothing more
    if content.contains("provider = \"openai\"") && !content.contains("base_url = ") {
        return Err("openai provider requires 'base_url' field".to_string());
    }

    Ok(())
}
