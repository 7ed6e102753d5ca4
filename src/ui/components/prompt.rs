use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::input::QueryInput;
use crate::ui::style::Theme;

/// Inputs for [`render_input`].
pub struct InputContext<'a, 'b> {
	pub search_input: &'a QueryInput<'b>,
	pub label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status text shown at the right edge of the input line.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Draw `label > [input]` with the status right-aligned on the same line.
pub fn render_input(frame: &mut Frame, input: InputContext<'_, '_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		label,
		area,
		theme,
	} = input;

	let prompt = if label.is_empty() {
		String::new()
	} else {
		format!("{label} > ")
	};
	let status = status_line(&progress, theme);
	let status_width = status.width() as u16;

	let [prompt_area, input_area, status_area] = Layout::horizontal([
		Constraint::Length(prompt.width() as u16),
		Constraint::Min(1),
		Constraint::Length(status_width.saturating_add(1)),
	])
	.areas(area);

	if !prompt.is_empty() {
		frame.render_widget(
			Paragraph::new(prompt).style(theme.prompt_style()),
			prompt_area,
		);
	}
	search_input.render_textarea(frame, input_area);
	frame.render_widget(
		Paragraph::new(status).alignment(Alignment::Right),
		status_area,
	);
}

fn status_line<'a>(progress: &ProgressState<'a>, theme: &Theme) -> Line<'a> {
	let muted = theme.empty_style();
	let mut line = Line::default();
	if !progress.progress_complete {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	line.spans
		.push(Span::styled(progress.progress_text.to_string(), muted));
	line
}

/// Draw the heading line.
pub fn render_title(frame: &mut Frame, title: &str, area: Rect, theme: &Theme) {
	frame.render_widget(
		Paragraph::new(Line::styled(title.to_string(), theme.title_style())),
		area,
	);
}
