//! Core state container for the terminal application's front-end.

use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::components::RowTarget;
use super::config::UiConfig;
use super::input::SearchInput;
use super::style::Theme;
use crate::navigation::Navigation;
use crate::session::{DEFAULT_DEBOUNCE, SearchSession};
use crate::systems::search::{self, SearchBackend};

mod search_runtime;

pub(crate) use search_runtime::SearchRuntime;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Which landing-view widget receives keys while the search surface is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Page,
	Filter,
}

/// A result opened in the browser during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
	pub title: String,
	pub url: String,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` is the host surface: it owns the landing view, the search worker
/// handle and, while the search surface is open, the [`SearchSession`].
/// Closing the surface drops the session together with anything it was
/// waiting for.
pub struct App<'a> {
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) navigation: Navigation,
	pub(crate) debounce: Duration,
	pub(in crate::ui) search: SearchRuntime,
	pub(crate) session: Option<SearchSession>,
	pub search_input: SearchInput<'a>,
	pub filter_input: SearchInput<'a>,
	pub(crate) focus: Focus,
	pub table_state: TableState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) history: Vec<Visit>,
	/// Where the search surface was drawn last frame.
	pub(crate) overlay: Option<Rect>,
	/// Row hit-targets of the last frame; replaced on every draw.
	pub(crate) row_targets: Vec<RowTarget>,
	/// Replies dropped because their session or query was no longer current.
	pub(crate) stale_replies: usize,
	/// Last message shown under the landing view, e.g. a failed browser launch.
	pub(crate) status: Option<String>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] that answers queries with `backend`.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let (search_tx, search_rx) = search::spawn(backend);
		let ui = UiConfig::default();
		let filter_input = SearchInput::new("", ui.filter_label.clone());
		Self {
			search_input: SearchInput::new("", ui.messages.prompt.clone()),
			filter_input,
			ui,
			theme: Theme::default(),
			navigation: Navigation::default(),
			debounce: DEFAULT_DEBOUNCE,
			search: SearchRuntime::new(search_tx, search_rx),
			session: None,
			focus: Focus::default(),
			table_state: TableState::default(),
			throbber_state: ThrobberState::default(),
			history: Vec::new(),
			overlay: None,
			row_targets: Vec::new(),
			stale_replies: 0,
			status: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.search_input = SearchInput::new("", ui.messages.prompt.clone());
		self.filter_input = SearchInput::new("", ui.filter_label.clone());
		self.ui = ui;
	}

	pub fn set_navigation(&mut self, navigation: Navigation) {
		self.navigation = navigation;
	}

	pub fn set_debounce(&mut self, delay: Duration) {
		self.debounce = delay;
	}

	/// The open session, if the search surface is showing.
	#[must_use]
	pub fn session(&self) -> Option<&SearchSession> {
		self.session.as_ref()
	}

	#[must_use]
	pub fn is_search_open(&self) -> bool {
		self.session.is_some()
	}

	#[must_use]
	pub fn history(&self) -> &[Visit] {
		&self.history
	}

	/// History entries whose title or url contains the filter text.
	pub(crate) fn filtered_history(&self) -> Vec<&Visit> {
		let needle = self.filter_input.text().trim().to_lowercase();
		self.history
			.iter()
			.rev()
			.filter(|visit| {
				needle.is_empty()
					|| visit.title.to_lowercase().contains(&needle)
					|| visit.url.to_lowercase().contains(&needle)
			})
			.collect()
	}

	/// Number of rows the selection can move over.
	pub(crate) fn result_len(&self) -> usize {
		self.session
			.as_ref()
			.map_or(0, |session| session.state().results().len())
	}

	/// Ensure the row selection remains valid for the current rows.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.result_len();
		if len == 0 {
			self.table_state.select(None);
		} else if let Some(selected) = self.table_state.selected() {
			if selected >= len {
				self.table_state.select(Some(len - 1));
			}
		} else {
			self.table_state.select(Some(0));
		}
	}
}
