//! The results container: one of four views, drawn from the session state.

use frizbee::{Options, match_indices};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::session::{EmptyKind, SessionState};
use crate::types::{char_positions, highlight_line};
use crate::ui::config::Messages;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "› ";

/// How a message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
	Muted,
	Error,
}

/// One navigable row of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
	pub title: String,
	pub description: Option<String>,
	pub kind: Option<String>,
	pub url: String,
}

impl ResultRow {
	fn height(&self) -> u16 {
		if self.description.is_some() { 2 } else { 1 }
	}
}

/// What the results container shows for a given session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
	Message { text: String, tone: Tone },
	Loading { text: String },
	Rows(Vec<ResultRow>),
}

impl ResultsView {
	/// Map a session state to its view.
	#[must_use]
	pub fn from_state(state: &SessionState, messages: &Messages) -> Self {
		match state {
			SessionState::Empty(EmptyKind::Prompt) => Self::Message {
				text: messages.prompt.clone(),
				tone: Tone::Muted,
			},
			SessionState::Empty(EmptyKind::NoResults) => Self::Message {
				text: messages.no_results.clone(),
				tone: Tone::Muted,
			},
			SessionState::Loading => Self::Loading {
				text: messages.loading.clone(),
			},
			SessionState::Error(_) => Self::Message {
				text: messages.error.clone(),
				tone: Tone::Error,
			},
			SessionState::Results(rows) => Self::Rows(
				rows.iter()
					.map(|row| ResultRow {
						title: row.display_title().to_string(),
						description: row.display_description().map(str::to_string),
						kind: row.kind.clone().filter(|kind| !kind.trim().is_empty()),
						url: row.url.clone(),
					})
					.collect(),
			),
		}
	}
}

/// Screen region that selects the row at `index` when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTarget {
	pub index: usize,
	pub area: Rect,
}

/// Argument bundle for drawing the results container.
pub struct ResultsContext<'a> {
	pub theme: &'a Theme,
	/// Current input text, used to highlight matched characters in titles.
	pub query: &'a str,
	pub throbber_state: &'a ThrobberState,
}

/// Draw `view` into `area` and return the row hit-targets for this frame.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	view: &ResultsView,
	table_state: &mut TableState,
	context: ResultsContext<'_>,
) -> Vec<RowTarget> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}

	match view {
		ResultsView::Message { text, tone } => {
			let style = match tone {
				Tone::Muted => context.theme.empty_style(),
				Tone::Error => context.theme.error_style(),
			};
			let message = Paragraph::new(text.as_str())
				.style(style)
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true });
			frame.render_widget(message, area);
			Vec::new()
		}
		ResultsView::Loading { text } => {
			let muted = context.theme.empty_style();
			let spinner = Throbber::default().style(muted).throbber_style(muted);
			let mut line = Line::default();
			line.spans.push(spinner.to_symbol_span(context.throbber_state));
			line.spans.push(Span::styled(text.clone(), muted));
			frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
			Vec::new()
		}
		ResultsView::Rows(rows) => render_rows(frame, area, rows, table_state, &context),
	}
}

fn render_rows(
	frame: &mut Frame,
	area: Rect,
	rows: &[ResultRow],
	table_state: &mut TableState,
	context: &ResultsContext<'_>,
) -> Vec<RowTarget> {
	let theme = context.theme;
	let badge_width = rows
		.iter()
		.filter_map(|row| row.kind.as_deref())
		.map(|kind| kind.width() as u16 + 2)
		.max()
		.unwrap_or(0);
	let symbol_width = HIGHLIGHT_SYMBOL.width() as u16;
	let gap = u16::from(badge_width > 0);
	let text_width = area
		.width
		.saturating_sub(symbol_width)
		.saturating_sub(badge_width)
		.saturating_sub(gap);

	let table_rows: Vec<Row> = rows
		.iter()
		.map(|row| {
			let indices = highlight_for(context.query, &row.title);
			let mut lines = vec![highlight_line(
				&row.title,
				indices,
				Some(text_width),
				theme.header_style(),
				theme.highlight_style(),
			)];
			if let Some(description) = row.description.as_deref() {
				lines.push(highlight_line(
					description,
					None,
					Some(text_width),
					theme.description_style(),
					theme.description_style(),
				));
			}
			let badge = row
				.kind
				.as_deref()
				.map(|kind| Line::from(Span::styled(format!(" {kind} "), theme.badge_style())))
				.unwrap_or_default();
			Row::new(vec![Cell::from(Text::from(lines)), Cell::from(badge)]).height(row.height())
		})
		.collect();

	let widths = [Constraint::Min(1), Constraint::Length(badge_width)];
	let table = Table::new(table_rows, widths)
		.column_spacing(gap)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(table, area, table_state);

	row_targets(area, rows, table_state.offset())
}

/// Hit-targets for the rows that fit in `area`, starting at `offset`.
fn row_targets(area: Rect, rows: &[ResultRow], offset: usize) -> Vec<RowTarget> {
	let mut targets = Vec::new();
	let mut y = area.y;
	for (index, row) in rows.iter().enumerate().skip(offset) {
		let height = row.height();
		if y.saturating_add(height) > area.bottom() {
			break;
		}
		targets.push(RowTarget {
			index,
			area: Rect::new(area.x, y, area.width, height),
		});
		y += height;
	}
	targets
}

fn highlight_for(query: &str, text: &str) -> Option<Vec<usize>> {
	let query = query.trim();
	if query.is_empty() || text.is_empty() {
		return None;
	}
	let options = Options {
		prefilter: false,
		..Options::default()
	};
	// frizbee reports byte offsets; the line builder walks chars.
	match_indices(query, text, options).map(|m| char_positions(text, &m.indices))
}
