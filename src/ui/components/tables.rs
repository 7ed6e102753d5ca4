use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub const TABLE_COLUMN_SPACING: u16 = 1;
pub const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::Always;
/// Header row plus the separator line beneath it.
pub const HEADER_HEIGHT: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
}

/// Column widths used by the result table.
#[must_use]
pub fn result_column_widths() -> Vec<Constraint> {
	vec![Constraint::Percentage(55), Constraint::Percentage(45)]
}

/// Resolve the rendered width of each column for `area`, so that cells can
/// be truncated before they reach the table.
#[must_use]
pub fn resolve_column_widths(area: Rect, widths: &[Constraint]) -> Vec<u16> {
	if widths.is_empty() || area.width == 0 {
		return Vec::new();
	}

	let highlight_width = HIGHLIGHT_SYMBOL.width() as u16;
	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, area.width, 1));

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}

/// Render a table with a styled header and a separator line.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	let header_bg = theme.header_bg();
	let base_style = Style::new().bg(header_bg);
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_style = Style::new().bg(header_bg).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled(middle, middle_style),
		Span::styled(" ", base_style),
	];
	let para = Paragraph::new(Text::from(Line::from(spans)));
	frame.render_widget(para, sep_rect);
}

/// Map a terminal row inside the table area to a row index in the table.
#[must_use]
pub fn row_at(area: Rect, offset: usize, row_count: usize, column: u16, row: u16) -> Option<usize> {
	if !point_in_rect(column, row, area) {
		return None;
	}
	let first_row_y = area.y.saturating_add(HEADER_HEIGHT);
	if row < first_row_y {
		return None;
	}
	let index = offset + usize::from(row - first_row_y);
	(index < row_count).then_some(index)
}

#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
