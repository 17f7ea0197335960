use std::env;

use anyhow::Result;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod search;
mod ui;

use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.search.endpoint.is_some(),
				"DATALAB_SEARCH__SEARCH__ENDPOINT",
				"--endpoint",
				"search.endpoint",
			),
			timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.search.timeout_ms.is_some(),
				"DATALAB_SEARCH__SEARCH__TIMEOUT_MS",
				"--timeout-ms",
				"search.timeout_ms",
			),
			max_results: detect_source(
				cli.max_results.is_some(),
				self.search.max_results.is_some(),
				"DATALAB_SEARCH__SEARCH__MAX_RESULTS",
				"--max-results",
				"search.max_results",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DATALAB_SEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			navigation: detect_source(
				cli.navigation.is_some(),
				self.ui.navigation.is_some(),
				"DATALAB_SEARCH__UI__NAVIGATION",
				"--navigation",
				"ui.navigation",
			),
			base_url: detect_source(
				cli.base_url.is_some(),
				self.ui.base_url.is_some(),
				"DATALAB_SEARCH__UI__BASE_URL",
				"--base-url",
				"ui.base_url",
			),
		};

		let search = self.search.resolve(cli.demo, &sources)?;
		let ui = self.ui.resolve(&sources)?;

		let config = ResolvedConfig {
			backend: search.backend,
			debounce: search.debounce,
			timeout: search.timeout,
			max_results: search.max_results,
			theme: ui.theme,
			navigation: ui.navigation,
			ui: ui.ui,
		};

		config.validate(&sources)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
