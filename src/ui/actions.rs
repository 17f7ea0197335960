use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::warn;

use super::App;
use super::state::{Focus, Visit};
use crate::navigation::{NavigationStep, SearchOutcome};

/// Why the event loop should stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Exit {
	Quit,
	Navigated(SearchOutcome),
}

/// Ctrl+K, or Cmd+K where the terminal reports it.
pub(crate) fn opens_search(key: KeyEvent) -> bool {
	matches!(key.code, KeyCode::Char('k' | 'K'))
		&& key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

fn is_interrupt(key: KeyEvent) -> bool {
	key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<Exit>> {
		if is_interrupt(key) {
			return Ok(Some(Exit::Quit));
		}

		if self.session.is_some() {
			return self.handle_search_key(key, now);
		}

		match self.focus {
			Focus::Filter => match key.code {
				KeyCode::Tab | KeyCode::Esc => self.focus_page(),
				_ => {
					self.filter_input.input(key);
				}
			},
			Focus::Page => {
				if opens_search(key) {
					self.open_search();
				} else if key.code == KeyCode::Tab {
					self.focus_filter();
				} else if key.code == KeyCode::Char('q') && key.modifiers.is_empty() {
					return Ok(Some(Exit::Quit));
				}
			}
		}
		Ok(None)
	}

	fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<Exit>> {
		match key.code {
			KeyCode::Esc => self.close_search(),
			KeyCode::Enter => {
				if let Some(selected) = self.table_state.selected() {
					return self.navigate_to(selected);
				}
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ if opens_search(key) => {}
			_ => {
				if self.search_input.input(key) {
					self.on_search_input(now);
				}
			}
		}
		Ok(None)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<Exit>> {
		if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) || self.session.is_none() {
			return Ok(None);
		}

		let position = Position::new(mouse.column, mouse.row);
		let inside = self.overlay.is_some_and(|area| area.contains(position));
		if !inside {
			self.close_search();
			return Ok(None);
		}

		let hit = self
			.row_targets
			.iter()
			.find(|target| target.area.contains(position))
			.map(|target| target.index);
		match hit {
			Some(index) => {
				self.table_state.select(Some(index));
				self.navigate_to(index)
			}
			None => Ok(None),
		}
	}

	/// Follow the row at `index` according to the navigation policy.
	fn navigate_to(&mut self, index: usize) -> Result<Option<Exit>> {
		let Some(session) = self.session.as_ref() else {
			return Ok(None);
		};
		let Some(row) = session.state().results().get(index) else {
			return Ok(None);
		};

		match self.navigation.follow(session.query().trim(), row) {
			Ok(Some(NavigationStep::Exit(outcome))) => Ok(Some(Exit::Navigated(outcome))),
			Ok(Some(NavigationStep::Stayed { target })) => {
				self.history.push(Visit {
					title: row.display_title().to_string(),
					url: target,
				});
				self.status = None;
				self.close_search();
				Ok(None)
			}
			Ok(None) => Ok(None),
			Err(err) => {
				warn!(error = %err, "navigation failed");
				self.status = Some(err.to_string());
				Ok(None)
			}
		}
	}

	fn focus_filter(&mut self) {
		self.focus = Focus::Filter;
		self.filter_input.set_focused(true);
	}

	fn focus_page(&mut self) {
		self.focus = Focus::Page;
		self.filter_input.set_focused(false);
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			if selected + 1 < self.result_len() {
				self.table_state.select(Some(selected + 1));
			}
		} else if self.result_len() > 0 {
			self.table_state.select(Some(0));
		}
	}
}
