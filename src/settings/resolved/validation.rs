use datalab_search::{Navigation, Url, theme_by_name, theme_names};

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"search.timeout_ms",
			config.timeout.as_millis().to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.max_results == 0 {
		return Err(ConfigError::invalid(
			"search.max_results",
			config.max_results.to_string(),
			sources.source_for_max_results(),
			"must be at least 1",
		));
	}

	if let Some(theme) = &config.theme
		&& theme_by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("expected one of {}", theme_names().join(", ")),
		));
	}

	Ok(())
}

/// Parse `value` as an absolute http(s) URL.
pub(crate) fn parse_http_url(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<Url, ConfigError> {
	let url = Url::parse(value.trim())
		.map_err(|err| ConfigError::invalid(key, value, origin.clone(), err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid(
			key,
			value,
			origin,
			"expected an http or https URL",
		));
	}
	Ok(url)
}

/// Combine the navigation mode with the optional base url.
pub(crate) fn resolve_navigation(
	mode: Option<&str>,
	base_url: Option<Url>,
	sources: &ConfigSources,
) -> Result<Navigation, ConfigError> {
	let mode = mode.map(str::trim).unwrap_or("print");
	if mode.eq_ignore_ascii_case("print") {
		return Ok(Navigation::Exit { base_url });
	}
	if mode.eq_ignore_ascii_case("browser") {
		return match base_url {
			Some(base_url) => Ok(Navigation::Browser { base_url }),
			None => Err(ConfigError::invalid(
				"ui.navigation",
				mode,
				sources.source_for_navigation(),
				"browser navigation needs `ui.base_url`",
			)),
		};
	}
	Err(ConfigError::invalid(
		"ui.navigation",
		mode,
		sources.source_for_navigation(),
		"expected `print` or `browser`",
	))
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use datalab_search::UiConfig;

	use super::super::BackendChoice;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			backend: BackendChoice::Demo,
			debounce: Duration::from_millis(300),
			timeout: Duration::from_secs(5),
			max_results: 10,
			theme: None,
			navigation: Navigation::default(),
			ui: UiConfig::default(),
		}
	}

	#[test]
	fn validation_accepts_defaults() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Duration::ZERO,
			..config()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.timeout_ms");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_max_results() {
		let config = ResolvedConfig {
			max_results: 0,
			..config()
		};
		let sources = ConfigSources {
			max_results: Some(SettingSource::Environment(
				"DATALAB_SEARCH__SEARCH__MAX_RESULTS",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.max_results");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_themes() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.reason.contains("slate"));
	}

	#[test]
	fn endpoints_must_be_absolute_http_urls() {
		let origin = SettingSource::ConfigKey("search.endpoint");
		assert!(parse_http_url("search.endpoint", "http://lab.local/api/search", origin.clone()).is_ok());
		assert!(parse_http_url("search.endpoint", "/api/search", origin.clone()).is_err());
		let err = parse_http_url("search.endpoint", "ftp://lab.local/search", origin).unwrap_err();
		assert_eq!(err.reason, "expected an http or https URL");
	}

	#[test]
	fn browser_navigation_requires_a_base_url() {
		let sources = ConfigSources::default();
		let err = resolve_navigation(Some("browser"), None, &sources).unwrap_err();
		assert_eq!(err.key, "ui.navigation");

		let base = Url::parse("http://lab.local").expect("url");
		assert_eq!(
			resolve_navigation(Some("Browser"), Some(base.clone()), &sources).expect("navigation"),
			Navigation::Browser { base_url: base }
		);
		assert_eq!(
			resolve_navigation(None, None, &sources).expect("navigation"),
			Navigation::Exit { base_url: None }
		);
		assert!(resolve_navigation(Some("tab"), None, &sources).is_err());
	}
}
