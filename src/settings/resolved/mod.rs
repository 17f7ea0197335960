use std::path::PathBuf;
use std::time::Duration;

use datalab_search::{Navigation, UiConfig, Url};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{parse_http_url, resolve_navigation};

/// Where search results come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendChoice {
	/// Query the DataLab search endpoint over HTTP.
	Http { endpoint: Url },
	/// Answer queries from a JSON file shaped like an endpoint response.
	Fixtures(PathBuf),
	/// Answer queries from the bundled sample data.
	Demo,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) backend: BackendChoice,
	pub(crate) debounce: Duration,
	pub(crate) timeout: Duration,
	pub(crate) max_results: usize,
	pub(crate) theme: Option<String>,
	pub(crate) navigation: Navigation,
	pub(crate) ui: UiConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
