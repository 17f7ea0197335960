use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::{Block, Borders, Clear};

use super::App;
use super::components::{
	InputContext, LandingContext, ProgressState, ResultsContext, ResultsView, render_landing,
	render_prompt, render_results,
};
use super::state::Focus;
use crate::session::SessionState;

const MIN_OVERLAY_WIDTH: u16 = 24;
const MIN_OVERLAY_HEIGHT: u16 = 6;
const MAX_OVERLAY_WIDTH: u16 = 80;
const MAX_OVERLAY_HEIGHT: u16 = 20;

/// Centered area for the search surface, or `None` when `area` is too small.
pub(crate) fn overlay_area(area: Rect) -> Option<Rect> {
	let width = area.width.saturating_sub(4).min(MAX_OVERLAY_WIDTH);
	let height = area.height.saturating_sub(2).min(MAX_OVERLAY_HEIGHT);
	if width < MIN_OVERLAY_WIDTH || height < MIN_OVERLAY_HEIGHT {
		return None;
	}
	let x = area.x + (area.width - width) / 2;
	let y = area.y + (area.height - height) / 2;
	Some(Rect::new(x, y, width, height))
}

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		self.draw_landing(frame, area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		}));

		if self.session.is_none() {
			self.overlay = None;
			self.row_targets.clear();
			return;
		}
		let Some(overlay) = overlay_area(area) else {
			self.overlay = None;
			self.row_targets.clear();
			return;
		};
		self.overlay = Some(overlay);
		self.draw_search(frame, overlay);
	}

	fn draw_landing(&self, frame: &mut Frame, area: Rect) {
		let history = self.filtered_history();
		render_landing(frame, area, LandingContext {
			ui: &self.ui,
			theme: &self.theme,
			filter_input: &self.filter_input,
			filter_focused: self.focus == Focus::Filter,
			history: &history,
			status: self.status.as_deref(),
		});
	}

	fn draw_search(&mut self, frame: &mut Frame, overlay: Rect) {
		let Some(session) = self.session.as_ref() else {
			return;
		};

		frame.render_widget(Clear, overlay);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border_style())
			.title(self.ui.search_title.as_str());
		let inner = block.inner(overlay);
		frame.render_widget(block, overlay);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(inner);

		let status = match session.state() {
			SessionState::Results(rows) if rows.len() == 1 => "1 resultado".to_string(),
			SessionState::Results(rows) => format!("{} resultados", rows.len()),
			_ => String::new(),
		};
		render_prompt(
			frame,
			InputContext {
				search_input: &self.search_input,
				area: layout[0],
				theme: &self.theme,
			},
			ProgressState { text: &status },
		);

		let view = ResultsView::from_state(session.state(), &self.ui.messages);
		let query = session.query().to_string();
		self.row_targets = render_results(
			frame,
			layout[2],
			&view,
			&mut self.table_state,
			ResultsContext {
				theme: &self.theme,
				query: &query,
				throbber_state: &self.throbber_state,
			},
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn overlay_is_centered_and_capped() {
		let area = Rect::new(0, 0, 120, 40);
		assert_eq!(overlay_area(area), Some(Rect::new(20, 10, 80, 20)));
	}

	#[test]
	fn small_frames_have_no_overlay() {
		assert_eq!(overlay_area(Rect::new(0, 0, 20, 30)), None);
		assert_eq!(overlay_area(Rect::new(0, 0, 80, 6)), None);
	}
}
