use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status text drawn at the right edge of the prompt row.
pub struct ProgressState<'a> {
	pub text: &'a str,
}

/// Render the input with the status right-aligned over it.
pub fn render_prompt(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	search_input.render(frame, area);
	render_progress(frame, area, &progress, theme);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: &ProgressState<'_>, theme: &Theme) {
	if progress.text.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(progress.text.to_string(), theme.empty_style()));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	let Some(start_x) = progress_start(frame, area, line_width) else {
		return;
	};
	let max_width = area.right().saturating_sub(start_x).min(line_width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, max_width);
}

/// Column where the status starts, keeping two columns clear after the typed
/// text. `None` when there is no room left.
fn progress_start(frame: &mut Frame, area: Rect, line_width: u16) -> Option<u16> {
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let buffer = frame.buffer_mut();
	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, area.top()))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	(start_x < area.right()).then_some(start_x)
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn draw(text: &str, status: &str) -> String {
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
		let input = SearchInput::new(text, "");
		let theme = Theme::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_prompt(
					frame,
					InputContext {
						search_input: &input,
						area,
						theme: &theme,
					},
					ProgressState { text: status },
				);
			})
			.unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn status_is_right_aligned() {
		let screen = draw("par", "3 resultados");
		assert!(screen.starts_with("\"par "));
		assert!(screen.contains("3 resultados\""));
	}

	#[test]
	fn status_never_covers_typed_text() {
		let screen = draw("análisis de muestras de agua", "3 resultados");
		assert!(screen.contains("análisis de muestras de agua"));
	}
}
