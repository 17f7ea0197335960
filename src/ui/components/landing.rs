use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::ui::config::UiConfig;
use crate::ui::input::SearchInput;
use crate::ui::state::Visit;
use crate::ui::style::Theme;

/// Argument bundle for the view behind the search surface.
pub struct LandingContext<'a> {
	pub ui: &'a UiConfig,
	pub theme: &'a Theme,
	pub filter_input: &'a SearchInput<'a>,
	pub filter_focused: bool,
	pub history: &'a [&'a Visit],
	pub status: Option<&'a str>,
}

/// Title, hint, history filter and visited results.
pub fn render_landing(frame: &mut Frame, area: Rect, context: LandingContext<'_>) {
	let LandingContext {
		ui,
		theme,
		filter_input,
		filter_focused,
		history,
		status,
	} = context;

	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.split(area);

	let title = Paragraph::new(Line::from(Span::styled(
		format!(" {} ", ui.title),
		theme.header_style(),
	)))
	.alignment(Alignment::Left);
	frame.render_widget(title, layout[0]);

	let hint = Paragraph::new(ui.hint.as_str()).style(theme.empty_style());
	frame.render_widget(hint, layout[1]);

	let border = if filter_focused {
		theme.prompt_style()
	} else {
		theme.border_style()
	};
	let filter_block = Block::default()
		.borders(Borders::ALL)
		.border_style(border)
		.title(ui.filter_label.as_str());
	let filter_inner = filter_block.inner(layout[2]);
	frame.render_widget(filter_block, layout[2]);
	filter_input.render(frame, filter_inner);

	let items: Vec<ListItem> = history
		.iter()
		.map(|visit| {
			ListItem::new(Line::from(vec![
				Span::styled(visit.title.clone(), theme.header_style()),
				Span::raw("  "),
				Span::styled(visit.url.clone(), theme.description_style()),
			]))
		})
		.collect();
	frame.render_widget(List::new(items), layout[3]);

	if let Some(status) = status {
		let line = Paragraph::new(status).style(theme.error_style());
		frame.render_widget(line, layout[4]);
	}
}
