use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use super::App;
use super::config::UiConfig;
use super::style::{self, Theme};
use crate::navigation::{Navigation, SearchOutcome};
use crate::systems::search::SearchBackend;

/// A small builder for configuring the interactive search UI before running it.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	navigation: Option<Navigation>,
	debounce: Option<Duration>,
}

impl SearchUi {
	/// Create a search UI that answers queries with `backend`.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			ui_config: None,
			theme: None,
			navigation: None,
			debounce: None,
		}
	}

	#[must_use]
	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Use the named built-in theme; unknown names keep the default.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	#[must_use]
	pub fn with_navigation(mut self, navigation: Navigation) -> Self {
		self.navigation = Some(navigation);
		self
	}

	#[must_use]
	pub fn with_debounce(mut self, delay: Duration) -> Self {
		self.debounce = Some(delay);
		self
	}

	/// Build the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.backend);
		if let Some(ui) = self.ui_config {
			app.set_ui_config(ui);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(navigation) = self.navigation {
			app.set_navigation(navigation);
		}
		if let Some(delay) = self.debounce {
			app.set_debounce(delay);
		}
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<Option<SearchOutcome>> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::systems::search::FixtureSearchBackend;
	use crate::ui::style::LIGHT;

	#[test]
	fn options_are_applied_to_the_app() {
		let app = SearchUi::new(Arc::new(FixtureSearchBackend::demo(10)))
			.with_ui_config(UiConfig::default().with_title("Laboratorio"))
			.with_theme_name("light")
			.with_debounce(Duration::from_millis(50))
			.build();

		assert_eq!(app.ui.title, "Laboratorio");
		assert_eq!(app.theme, LIGHT);
		assert_eq!(app.debounce, Duration::from_millis(50));
		assert_eq!(app.navigation, Navigation::default());
	}

	#[test]
	fn unknown_theme_names_keep_the_default() {
		let app = SearchUi::new(Arc::new(FixtureSearchBackend::demo(10)))
			.with_theme_name("neon")
			.build();
		assert_eq!(app.theme, Theme::default());
	}
}
