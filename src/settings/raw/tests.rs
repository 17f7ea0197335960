use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use datalab_search::{DEFAULT_DEBOUNCE, Navigation, Url};

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::BackendChoice;

fn cli(args: &[&str]) -> CliArgs {
	let mut full = vec!["datalab-search"];
	full.extend_from_slice(args);
	CliArgs::parse_from(full)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--fixtures",
		"pedidos.json",
		"--debounce-ms",
		"150",
		"--timeout-ms",
		"900",
		"--max-results",
		"4",
		"--navigation",
		"browser",
		"--base-url",
		"http://lab.local",
		"--theme",
		"light",
		"--title",
		"Laboratorio",
	]);

	let mut config = RawConfig::default();
	config.search.debounce_ms = Some(600);
	config.ui.title = Some("DataLab".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.search.fixtures, cli.fixtures);
	assert_eq!(config.search.debounce_ms, Some(150));
	assert_eq!(config.search.timeout_ms, Some(900));
	assert_eq!(config.search.max_results, Some(4));
	assert_eq!(config.ui.navigation.as_deref(), Some("browser"));
	assert_eq!(config.ui.base_url, cli.base_url);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.title.as_deref(), Some("Laboratorio"));
}

#[test]
fn endpoint_flag_replaces_configured_fixtures() {
	let cli = cli(&["--endpoint", "http://lab.local/api/search"]);
	let mut config = RawConfig::default();
	config.search.fixtures = Some(PathBuf::from("pedidos.json"));
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(
		resolved.backend,
		BackendChoice::Http {
			endpoint: Url::parse("http://lab.local/api/search").expect("url"),
		}
	);
}

#[test]
fn defaults_resolve_to_the_local_endpoint() {
	let cli = cli(&[]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(
		resolved.backend,
		BackendChoice::Http {
			endpoint: Url::parse("http://127.0.0.1:5000/api/search").expect("url"),
		}
	);
	assert_eq!(resolved.debounce, DEFAULT_DEBOUNCE);
	assert_eq!(resolved.timeout, Duration::from_secs(5));
	assert_eq!(resolved.navigation, Navigation::Exit { base_url: None });
	assert_eq!(resolved.theme, None);
}

#[test]
fn demo_flag_wins_over_configured_fixtures() {
	let cli = cli(&["--demo"]);
	let mut config = RawConfig::default();
	config.search.fixtures = Some(PathBuf::from("pedidos.json"));
	config.apply_cli_overrides(&cli);

	assert_eq!(config.resolve(&cli).expect("resolves").backend, BackendChoice::Demo);
}

#[test]
fn relative_endpoint_is_rejected_with_its_flag() {
	let cli = cli(&["--endpoint", "/api/search"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).expect_err("relative url").to_string();
	assert!(message.contains("search.endpoint"));
	assert!(message.contains("CLI flag `--endpoint`"));
}

#[test]
fn browser_navigation_without_base_url_is_rejected() {
	let cli = cli(&["--navigation", "browser"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).expect_err("no base url").to_string();
	assert!(message.contains("ui.navigation"));
	assert!(message.contains("ui.base_url"));
}

#[test]
fn message_overrides_keep_the_other_defaults() {
	let cli = cli(&[]);
	let mut config = RawConfig::default();
	config.ui.messages.no_results = Some("Sin coincidencias".into());

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.ui.messages.no_results, "Sin coincidencias");
	assert_eq!(resolved.ui.messages.loading, "Buscando...");
}
