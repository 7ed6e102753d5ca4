use ratatui::style::{Color, Modifier, Style};

use super::theme::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new()
		.fg(Color::Rgb(125, 211, 252))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	selected: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
};

pub const SOLARIZED: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	selected: Style::new()
		.fg(Color::Rgb(42, 161, 152))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
