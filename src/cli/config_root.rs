//! Config root resolution
//!
//! Resolution priority:
//! 1. --config-root <path> flag (highest priority)
//! 2. $CASEFORGE_HOME env var
//! 3. Current directory "." (default)

use std::path::PathBuf;

use crate::cli::Result;

/// Resolve the config root directory
///
/// An explicit --config-root path or $CASEFORGE_HOME must name an
/// existing path; the cwd fallback is taken as-is. The log appender
/// creates its file under the resolved root right after this returns.
pub fn resolve_config_root(explicit: Option<String>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path_buf = PathBuf::from(&path);
        if !path_buf.exists() {
            return Err(crate::cli::Error::InvalidArgs(format!(
                "config root '{}' does not exist",
                path
            )));
        }
        return Ok(path_buf);
    }

    if let Ok(home) = std::env::var("CASEFORGE_HOME") {
        let path_buf = PathBuf::from(&home);
        if !path_buf.exists() {
            return Err(crate::cli::Error::InvalidArgs(format!(
                "CASEFORGE_HOME '{}' does not exist",
                home
            )));
        }
        return Ok(path_buf);
    }

    Ok(PathBuf::from("."))
}
