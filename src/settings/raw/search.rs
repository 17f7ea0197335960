use std::path::PathBuf;
use std::time::Duration;

use datalab_search::{DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{BackendChoice, ConfigError, ConfigSources, parse_http_url};

/// Endpoint queried when neither the config nor the CLI names one.
pub(crate) const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/search";

/// Search related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) endpoint: Option<String>,
	pub(super) fixtures: Option<PathBuf>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) timeout_ms: Option<u64>,
	pub(super) max_results: Option<usize>,
}

pub(super) struct SearchResolution {
	pub(super) backend: BackendChoice,
	pub(super) debounce: Duration,
	pub(super) timeout: Duration,
	pub(super) max_results: usize,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			// An endpoint on the command line beats fixtures from a file.
			self.endpoint = Some(endpoint);
			self.fixtures = None;
		}
		if let Some(path) = cli.fixtures.clone() {
			self.fixtures = Some(path);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.timeout_ms {
			self.timeout_ms = Some(value);
		}
		if let Some(value) = cli.max_results {
			self.max_results = Some(value);
		}
	}

	pub(super) fn resolve(
		self,
		demo: bool,
		sources: &ConfigSources,
	) -> Result<SearchResolution, ConfigError> {
		let backend = if demo {
			BackendChoice::Demo
		} else if let Some(path) = self.fixtures {
			BackendChoice::Fixtures(path)
		} else {
			let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
			BackendChoice::Http {
				endpoint: parse_http_url("search.endpoint", endpoint, sources.source_for_endpoint())?,
			}
		};

		Ok(SearchResolution {
			backend,
			debounce: self
				.debounce_ms
				.map(Duration::from_millis)
				.unwrap_or(DEFAULT_DEBOUNCE),
			timeout: self
				.timeout_ms
				.map(Duration::from_millis)
				.unwrap_or(DEFAULT_TIMEOUT),
			max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
		})
	}
}
