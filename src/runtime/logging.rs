//! File logging. The TUI owns the terminal, so nothing goes to stdout/stderr
//! once the alternate screen is up.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_dir};

const LOG_FILE: &str = "tunebox.log";

/// Install a daily rolling file subscriber.
///
/// Returns the writer guard; keep it alive until exit or buffered lines are
/// lost. `None` means logging is off or could not be set up, which is not
/// fatal.
pub fn init_logging(settings: &LoggingSettings) -> Option<WorkerGuard> {
    if !settings.enabled {
        return None;
    }
    let dir = log_dir(settings)?;
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("tunebox: cannot create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter(settings))
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tunebox: logging disabled: {e}");
        return None;
    }
    Some(guard)
}

fn log_dir(settings: &LoggingSettings) -> Option<PathBuf> {
    settings.directory.clone().or_else(default_log_dir)
}

/// `RUST_LOG` wins over the configured filter; a bad configured filter falls
/// back to `info`.
fn filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
