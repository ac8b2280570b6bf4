//! CLI mode dispatch
//!
//! Dispatches to mode handlers:
//! - tui: interactive terminal UI (launched from main)
//! - fetch: print an issue's description
//! - generate: fetch an issue and print generated test cases

use std::path::Path;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cases::split_blocks;
use crate::cli::config_root::resolve_config_root;
use crate::cli::preflight::{run_config_preflight, PreflightOutcome};
use crate::cli::{Args, Error, Mode, Result, EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::{load_config, Config};
use crate::generator::{create_generator, GenerateBackend};
use crate::jira;
use crate::logging;
use crate::transport::Transport;

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run CLI mode and return exit code
///
/// This is the main entry point for CLI mode dispatch.
/// Called from main() after argument parsing.
pub fn run_cli_mode(args: Args) -> ExitCode {
    let config_root = match resolve_config_root(args.config_root) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_CONFIG_ERROR;
        }
    };

    let _log_guard = logging::init_logging(&config_root);

    // First-run wizard before any mode touches the config
    match run_config_preflight(&config_root) {
        Ok(PreflightOutcome::Exit) => {
            // Config was written, need to restart
            return EXIT_SUCCESS;
        }
        Ok(PreflightOutcome::Proceed) => {}
        Err(e) => {
            eprintln!("Preflight error: {}", e);
            return EXIT_CONFIG_ERROR;
        }
    }

    let mode = args.mode.unwrap_or(Mode::Tui);

    match run_mode(mode, &config_root, args.json_output) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                Error::Config(_) => EXIT_CONFIG_ERROR,
                _ => EXIT_FAILURE,
            }
        }
    }
}

/// Run specific CLI mode
fn run_mode(mode: Mode, config_root: &Path, json_output: bool) -> Result<()> {
    match mode {
        Mode::Tui => {
            // TUI is launched from main(), not here
            Ok(())
        }
        Mode::Fetch { issue_key } => run_fetch_mode(config_root, &issue_key, json_output),
        Mode::Generate { issue_key } => run_generate_mode(config_root, &issue_key, json_output),
    }
}

fn load_cli_config(config_root: &Path) -> Result<Config> {
    load_config(config_root).map_err(|e| Error::Config(format!("Failed to read config: {}", e)))
}

fn require_jira_credentials(config: &Config) -> Result<()> {
    if config.jira_domain.trim().is_empty()
        || config.jira_username.trim().is_empty()
        || config.jira_api_token.trim().is_empty()
    {
        return Err(Error::Config(
            "Missing Jira credentials in config (domain, username, api_token)".to_string(),
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct FetchOutput {
    issue_key: String,
    description: String,
}

/// Run fetch mode: print an issue's description
fn run_fetch_mode(config_root: &Path, issue_key: &str, json_output: bool) -> Result<()> {
    let config = load_cli_config(config_root)?;
    require_jira_credentials(&config)?;

    let transport = Transport::default();
    let request_id = Uuid::new_v4();
    info!(%request_id, issue_key, "fetching issue description");

    let description = jira::fetch_description(
        &transport,
        &config.jira_domain,
        issue_key,
        &config.jira_username,
        &config.jira_api_token,
    )?;

    if json_output {
        let output = FetchOutput {
            issue_key: issue_key.to_string(),
            description,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", description);
    }

    Ok(())
}

#[derive(Serialize)]
struct CaseOutput {
    label: String,
    text: String,
}

#[derive(Serialize)]
struct GenerateOutput {
    issue_key: String,
    requirement: String,
    cases: Vec<CaseOutput>,
}

/// Run generate mode: fetch the issue, generate, print the blocks
fn run_generate_mode(config_root: &Path, issue_key: &str, json_output: bool) -> Result<()> {
    let config = load_cli_config(config_root)?;
    require_jira_credentials(&config)?;

    if config.provider != "stub" && config.api_key.trim().is_empty() {
        return Err(Error::Config(
            "Missing generator API key in config".to_string(),
        ));
    }

    let transport = Transport::default();
    let request_id = Uuid::new_v4();
    info!(%request_id, issue_key, "fetching issue description");

    let requirement = jira::fetch_description(
        &transport,
        &config.jira_domain,
        issue_key,
        &config.jira_username,
        &config.jira_api_token,
    )?;

    // Unlike the TUI there is no human between fetch and generate, so
    // refuse to generate from a sentinel or an error line.
    if requirement == jira::NO_DESCRIPTION || requirement.starts_with("Error: ") {
        return Err(Error::Execution(format!(
            "No usable description for {}: {}",
            issue_key, requirement
        )));
    }

    let generator = create_generator(
        &config.provider,
        &config.base_url,
        &config.model,
        &config.api_key,
        transport,
    )?;

    info!(%request_id, provider = generator.provider_name(), "generating test cases");
    let raw = generator.generate(&requirement)?;
    let blocks = split_blocks(&raw);

    if json_output {
        let output = GenerateOutput {
            issue_key: issue_key.to_string(),
            requirement,
            cases: blocks
                .iter()
                .map(|block| CaseOutput {
                    label: block.label(),
                    text: block.text.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for block in &blocks {
            println!("{}", block.label());
            println!("{}", block.text);
            println!();
        }
    }

    Ok(())
}
