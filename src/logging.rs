//! File-backed tracing setup.
//!
//! The terminal belongs to the UI while it runs, so log output goes to
//! `<data dir>/logs/datalab-search.log` instead of stderr.

use std::fs;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "DATALAB_SEARCH_LOG";

const LOG_FILE: &str = "datalab-search.log";
const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber.
///
/// `level` (from `--log-level`) takes priority over [`LOG_ENV`]. The returned
/// guard flushes buffered lines when dropped and must outlive the UI.
pub fn initialize(level: Option<&str>) -> Result<WorkerGuard> {
	let filter = build_filter(level)?;
	let dir = app_dirs::get_log_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(guard)
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
	if let Some(level) = level {
		return EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"));
	}

	Ok(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)))
}
