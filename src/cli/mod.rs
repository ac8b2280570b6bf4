//! CLI module
//!
//! Provides:
//! - Argument parsing for CLI modes
//! - Config root resolution (flag → env → cwd)
//! - Mode dispatch (tui, fetch, generate)
//! - First-run configuration wizard

pub mod args;
pub mod config_root;
pub mod dispatch;
pub mod preflight;

// Re-exports
pub use args::{parse_args, Args, Mode};
pub use config_root::resolve_config_root;
pub use dispatch::{run_cli_mode, ExitCode};
pub use preflight::{run_config_preflight, PreflightOutcome};

use crate::generator::GeneratorError;
use crate::transport::TransportError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] TransportError),

    #[error("Generation error: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
