use std::sync::Arc;

use anyhow::{Context, Result};
use datalab_search::{
	FixtureSearchBackend, HttpSearchBackend, SearchBackend, SearchOutcome, SearchResult, SearchUi,
};
use tracing::{info, warn};

use crate::settings::{BackendChoice, ResolvedConfig};

/// Coordinates building and running the search experience.
pub(crate) struct SearchWorkflow {
	backend: Arc<dyn SearchBackend>,
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			backend,
			debounce,
			timeout,
			max_results,
			theme,
			navigation,
			ui,
		} = config;

		let backend = build_backend(backend, timeout, max_results)?;
		let mut search_ui = SearchUi::new(Arc::clone(&backend))
			.with_ui_config(ui)
			.with_navigation(navigation)
			.with_debounce(debounce);
		if let Some(theme) = theme {
			search_ui = search_ui.with_theme_name(&theme);
		}

		Ok(Self { backend, search_ui })
	}

	/// Run the interactive surface until the user quits or navigates away.
	pub(crate) fn run(self) -> Result<Option<SearchOutcome>> {
		self.search_ui.run()
	}

	/// Answer a single query without a terminal UI.
	pub(crate) fn run_once(&self, query: &str) -> Result<Vec<SearchResult>> {
		let query = query.trim();
		info!(query, "running one-shot search");
		self.backend.search(query).map_err(|err| {
			warn!(query, error = %err, "one-shot search failed");
			err.into()
		})
	}
}

fn build_backend(
	choice: BackendChoice,
	timeout: std::time::Duration,
	max_results: usize,
) -> Result<Arc<dyn SearchBackend>> {
	let backend: Arc<dyn SearchBackend> = match choice {
		BackendChoice::Http { endpoint } => {
			info!(%endpoint, "querying the search endpoint");
			Arc::new(
				HttpSearchBackend::new(endpoint, timeout)
					.context("failed to build the HTTP client")?,
			)
		}
		BackendChoice::Fixtures(path) => {
			info!(path = %path.display(), "answering from fixtures");
			Arc::new(FixtureSearchBackend::from_path(&path, max_results)?)
		}
		BackendChoice::Demo => {
			info!("answering from the built-in sample data");
			Arc::new(FixtureSearchBackend::demo(max_results))
		}
	};
	Ok(backend)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use datalab_search::{Navigation, UiConfig};
	use tempfile::tempdir;

	use super::*;

	fn config(backend: BackendChoice) -> ResolvedConfig {
		ResolvedConfig {
			backend,
			debounce: Duration::from_millis(300),
			timeout: Duration::from_secs(5),
			max_results: 10,
			theme: Some("light".into()),
			navigation: Navigation::default(),
			ui: UiConfig::default(),
		}
	}

	#[test]
	fn demo_backend_answers_one_shot_queries() {
		let workflow = SearchWorkflow::from_config(config(BackendChoice::Demo)).expect("workflow");
		let rows = workflow.run_once("  pedido ").expect("rows");
		assert!(!rows.is_empty());
		assert!(workflow.run_once("zzz").expect("rows").is_empty());
	}

	#[test]
	fn fixtures_are_loaded_from_disk() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("pedidos.json");
		fs::write(
			&path,
			r#"{"results": [{"title": "Pedido 042", "url": "/pedidos/42", "type": "pedido"}]}"#,
		)
		.expect("write fixtures");

		let workflow =
			SearchWorkflow::from_config(config(BackendChoice::Fixtures(path))).expect("workflow");
		let rows = workflow.run_once("042").expect("rows");
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].url, "/pedidos/42");
	}

	#[test]
	fn missing_fixture_file_fails_early() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("absent.json");
		assert!(SearchWorkflow::from_config(config(BackendChoice::Fixtures(missing))).is_err());
	}
}
