use ratatui::style::{Color, Style};

/// Colours and text styles used across the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub header: Style,
	pub row_highlight: Style,
	pub selected: Style,
	pub prompt: Style,
	pub empty: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	/// Style for the row whose entity is shown in the detail panel.
	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Case-insensitive match on the name or any alias. Spaces, dashes and
	/// underscores are interchangeable.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		let wanted = normalize_name(name);
		normalize_name(self.name) == wanted
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == wanted)
	}
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|ch| match ch {
			' ' | '_' => '-',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}
