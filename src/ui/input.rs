//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// A one-line editor used for the search prompt and the history filter.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("", "")
	}
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(text: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_placeholder_text(placeholder);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press to the editor and report whether the text changed.
	///
	/// Keys that would add lines or that drive the surrounding UI are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_reserved(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn clear(&mut self) {
		self.textarea.select_all();
		self.textarea.cut();
	}

	pub fn set_style(&mut self, text: Style, placeholder: Style) {
		self.textarea.set_style(text);
		self.textarea.set_placeholder_style(placeholder);
	}

	/// Show or hide the block cursor.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_reserved(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter
		| KeyCode::Tab
		| KeyCode::BackTab
		| KeyCode::Esc
		| KeyCode::Up
		| KeyCode::Down
		| KeyCode::PageUp
		| KeyCode::PageDown => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_edits_the_text() {
		let mut input = SearchInput::default();
		assert!(input.input(press(KeyCode::Char('p'))));
		assert!(input.input(press(KeyCode::Char('a'))));
		assert_eq!(input.text(), "pa");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "p");
	}

	#[test]
	fn navigation_keys_are_not_consumed() {
		let mut input = SearchInput::new("par", "");
		assert!(!input.input(press(KeyCode::Enter)));
		assert!(!input.input(press(KeyCode::Down)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "par");
	}

	#[test]
	fn cursor_starts_after_initial_text() {
		let mut input = SearchInput::new("pa", "");
		input.input(press(KeyCode::Char('r')));
		assert_eq!(input.text(), "par");
	}

	#[test]
	fn clear_empties_the_line() {
		let mut input = SearchInput::new("pedido", "");
		input.clear();
		assert_eq!(input.text(), "");
	}
}
