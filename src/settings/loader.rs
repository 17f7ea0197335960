use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;
	use crate::settings::BackendChoice;

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("search.toml");
		fs::write(
			&path,
			"[search]\nfixtures = \"pedidos.json\"\nmax_results = 3\n\n[ui]\ntitle = \"Laboratorio\"\n\n[ui.messages]\nloading = \"Cargando...\"\n",
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"datalab-search",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let config = load(&cli).expect("config loads");

		assert!(matches!(config.backend, BackendChoice::Fixtures(ref file) if file.ends_with("pedidos.json")));
		assert_eq!(config.max_results, 3);
		assert_eq!(config.ui.title, "Laboratorio");
		assert_eq!(config.ui.messages.loading, "Cargando...");
		assert_eq!(config.ui.messages.prompt, "Escribe para buscar...");
	}

	#[test]
	fn cli_flags_win_over_the_config_file() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("search.toml");
		fs::write(&path, "[search]\ndebounce_ms = 900\n").expect("write config");

		let cli = CliArgs::parse_from([
			"datalab-search",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
			"--debounce-ms",
			"120",
		]);
		let config = load(&cli).expect("config loads");
		assert_eq!(config.debounce.as_millis(), 120);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"datalab-search",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn invalid_values_report_their_origin() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("search.toml");
		fs::write(&path, "[search]\ntimeout_ms = 0\n").expect("write config");

		let cli = CliArgs::parse_from([
			"datalab-search",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let message = load(&cli).expect_err("zero timeout").to_string();
		assert!(message.contains("search.timeout_ms"));
		assert!(message.contains("configuration key"));
	}
}
