use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input bound to the filter.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text of the input.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(style);
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	///
	/// Keys that would split the line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let splits_line = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if splits_line {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
