//! File-backed tracing setup.
//!
//! Log lines go to `caseforge.log` under the config root so they never
//! corrupt the terminal UI. The returned guard must stay alive for the
//! duration of the process or buffered lines are lost.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name, created under the config root.
pub const LOG_FILE: &str = "caseforge.log";

/// Environment variable that overrides the default log filter.
pub const LOG_ENV_VAR: &str = "CASEFORGE_LOG";

/// Install the global subscriber writing to the log file.
///
/// Filter defaults to `info` unless `CASEFORGE_LOG` is set.
pub fn init_logging(config_root: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(config_root, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
