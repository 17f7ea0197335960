use super::{BackendChoice, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Backend: {}", describe_backend(&config.backend));
	println!("  Debounce: {} ms", config.debounce.as_millis());
	if matches!(config.backend, BackendChoice::Http { .. }) {
		println!("  Timeout: {} ms", config.timeout.as_millis());
	} else {
		println!("  Max results: {}", config.max_results);
	}
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Navigation: {}", config.navigation.label());
	if let Some(base_url) = config.navigation.base_url() {
		println!("  Base url: {base_url}");
	}
	println!("  Title: {}", config.ui.title);
}

fn describe_backend(backend: &BackendChoice) -> String {
	match backend {
		BackendChoice::Http { endpoint } => format!("endpoint {endpoint}"),
		BackendChoice::Fixtures(path) => format!("fixtures {}", path.display()),
		BackendChoice::Demo => "built-in sample data".to_string(),
	}
}
