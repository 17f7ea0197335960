use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	description: Style::new().fg(Color::Rgb(148, 163, 184)),
	badge: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(125, 211, 252)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(241, 245, 249)),
	row_highlight: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.fg(Color::Rgb(30, 64, 175)),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	description: Style::new().fg(Color::Rgb(71, 85, 105)),
	badge: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(59, 130, 246)),
};

pub(super) const DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT).with_aliases(&["claro"]),
];
