use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use datalab_search::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment overrides; nested keys are joined with `__`.
const ENV_PREFIX: &str = "DATALAB_SEARCH";
const ENV_SEPARATOR: &str = "__";

/// Environment variable that overrides the dotted config `key`.
pub(super) fn env_var_for(key: &str) -> String {
	let mut name = String::from(ENV_PREFIX);
	for part in key.split('.') {
		name.push_str(ENV_SEPARATOR);
		name.push_str(&part.to_ascii_uppercase());
	}
	name
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".datalab-search.toml"));
		files.push(current_dir.join("datalab-search.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".datalab-search.toml")));
		assert!(files.iter().any(|path| path.ends_with("datalab-search.toml")));
	}

	#[test]
	fn env_var_names_follow_the_section_layout() {
		assert_eq!(env_var_for("search.timeout_ms"), "DATALAB_SEARCH__SEARCH__TIMEOUT_MS");
		assert_eq!(env_var_for("ui.base_url"), "DATALAB_SEARCH__UI__BASE_URL");
	}
}
