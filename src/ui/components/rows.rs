use ratatui::style::Style;
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::dataset::{Dataset, Entity};

const ELLIPSIS: &str = "…";

/// Projection of one entity onto a result table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
	pub id: u32,
	pub name: &'a str,
	pub types: String,
}

impl<'a> RowView<'a> {
	#[must_use]
	pub fn from_entity(entity: &'a Entity) -> Self {
		Self {
			id: entity.id,
			name: entity.display_name(),
			types: entity.joined_types(),
		}
	}
}

/// Build table rows for the visible entities.
///
/// `selected` is the dataset index currently shown in the detail panel; its
/// row is drawn with `selected_style`.
#[must_use]
pub fn build_rows<'a>(
	visible: &[usize],
	dataset: &'a Dataset,
	selected: Option<usize>,
	selected_style: Style,
	column_widths: Option<&[u16]>,
) -> Vec<Row<'a>> {
	let (name_width, type_width) = column_widths
		.map(|widths| (widths.first().copied(), widths.get(1).copied()))
		.unwrap_or((None, None));

	visible
		.iter()
		.filter_map(|&index| {
			let entity = dataset.get(index)?;
			let view = RowView::from_entity(entity);
			let row = Row::new([
				Cell::from(fit_to_width(view.name, name_width)),
				Cell::from(fit_to_width(&view.types, type_width)),
			]);
			Some(if selected == Some(index) {
				row.style(selected_style)
			} else {
				row
			})
		})
		.collect()
}

/// Truncate `text` to `width` columns, marking the cut with an ellipsis.
#[must_use]
pub fn fit_to_width(text: &str, width: Option<u16>) -> String {
	let Some(width) = width.map(usize::from) else {
		return text.to_string();
	};
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (kept, _) = text.unicode_truncate(width.saturating_sub(ELLIPSIS.width()));
	format!("{kept}{ELLIPSIS}")
}
