//! CLI argument parsing
//!
//! Modes: tui, fetch, generate
//! Options: --config-root, --json, --version, --help

use crate::cli::{Error, Result};

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// CLI mode (or None for default TUI)
    pub mode: Option<Mode>,

    /// Config root path (explicitly set or None for resolution)
    pub config_root: Option<String>,

    /// JSON output flag
    pub json_output: bool,

    /// Show version and exit
    pub show_version: bool,

    /// Show help and exit
    pub show_help: bool,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// TUI mode (interactive terminal UI)
    Tui,

    /// Fetch mode: print an issue's description
    Fetch { issue_key: String },

    /// Generate mode: fetch an issue and generate test cases from it
    Generate { issue_key: String },
}

/// Parse CLI arguments from std::env::args()
///
/// Grammar:
/// ```text
/// caseforge [options] <mode> [mode-args]
///
/// MODES:
///   (no mode)       → TUI mode
///   tui             → TUI mode
///   fetch <KEY>     → Print issue description
///   generate <KEY>  → Generate test cases for issue
///
/// OPTIONS:
///   --config-root <path>  Config root directory
///   --json                Output JSON
///   --version             Show version
///   --help                Show help
/// ```
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    let mut args_out = Args {
        mode: None,
        config_root: None,
        json_output: false,
        show_version: false,
        show_help: false,
    };

    let mut positional = Vec::new();

    // First pass: collect flags and positional args
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                args_out.show_version = true;
            }
            "--help" | "-h" => {
                args_out.show_help = true;
            }
            "--json" => {
                args_out.json_output = true;
            }
            "--config-root" => {
                let path = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--config-root requires a path".to_string())
                })?;
                args_out.config_root = Some(path);
            }
            arg if arg.starts_with("--") => {
                return Err(Error::InvalidArgs(format!("Unknown option: {}", arg)));
            }
            other => {
                positional.push(other.to_string());
            }
        }
    }

    // Second pass: parse mode from positional args
    if !positional.is_empty() {
        args_out.mode = Some(parse_mode(&mut positional.into_iter())?);
    }

    Ok(args_out)
}

/// Parse mode from positional arguments
fn parse_mode<I: Iterator<Item = String>>(iter: &mut I) -> Result<Mode> {
    let first = iter
        .next()
        .ok_or_else(|| Error::InvalidArgs("Expected mode argument".to_string()))?;

    let mode = match first.as_str() {
        "tui" => Mode::Tui,
        "fetch" => {
            let issue_key = iter.next().ok_or_else(|| {
                Error::MissingArgument("fetch mode requires an issue key".to_string())
            })?;
            Mode::Fetch { issue_key }
        }
        "generate" => {
            let issue_key = iter.next().ok_or_else(|| {
                Error::MissingArgument("generate mode requires an issue key".to_string())
            })?;
            Mode::Generate { issue_key }
        }
        other => return Err(Error::UnknownMode(other.to_string())),
    };

    if let Some(extra) = iter.next() {
        return Err(Error::InvalidArgs(format!(
            "Unexpected argument: {}",
            extra
        )));
    }

    Ok(mode)
}
