use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::dataset::Entity;
use crate::ui::style::Theme;

/// What the detail panel shows for the selected entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView<'a> {
	pub name: &'a str,
	pub aliases: Vec<&'a str>,
	/// Statistic label/value pairs in display order. Empty when the record
	/// carries no statistics.
	pub stats: Vec<(&'static str, u32)>,
}

impl<'a> DetailView<'a> {
	#[must_use]
	pub fn from_entity(entity: &'a Entity) -> Self {
		Self {
			name: entity.display_name(),
			aliases: entity.name.localized().collect(),
			stats: entity
				.base
				.map(|base| base.pairs().to_vec())
				.unwrap_or_default(),
		}
	}
}

pub struct DetailContext<'a> {
	pub title: &'a str,
	pub entity: Option<&'a Entity>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Draw the detail panel. The panel body stays blank without a selection.
pub fn render_detail(frame: &mut Frame, context: DetailContext<'_>) {
	let DetailContext {
		title,
		entity,
		area,
		theme,
	} = context;

	let block = Block::default()
		.borders(Borders::LEFT)
		.border_style(theme.empty_style())
		.title(Line::styled(format!(" {title} "), theme.header_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let Some(entity) = entity else {
		return;
	};
	let view = DetailView::from_entity(entity);

	let alias_height = u16::from(!view.aliases.is_empty());
	let [heading_area, alias_area, stats_area] = Layout::vertical([
		Constraint::Length(2),
		Constraint::Length(alias_height),
		Constraint::Min(0),
	])
	.areas(inner);

	let heading = Paragraph::new(Line::styled(view.name, theme.title_style()));
	frame.render_widget(heading, heading_area);

	if alias_height > 0 {
		let aliases = Paragraph::new(view.aliases.join(" / ")).style(theme.empty_style());
		frame.render_widget(aliases, alias_area);
	}

	let rows = view
		.stats
		.iter()
		.map(|(label, value)| Row::new([Cell::from(*label), Cell::from(value.to_string())]));
	let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(5)]).column_spacing(1);
	frame.render_widget(table, stats_area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::dataset::{BaseStats, Name};

	fn charmander() -> Entity {
		Entity::new(4, "Charmander", ["Fire"]).with_base(BaseStats {
			hp: 39,
			attack: 52,
			defence: 43,
			special_attack: 60,
			special_defence: 50,
			speed: 65,
		})
	}

	#[test]
	fn detail_lists_stats_in_order() {
		let entity = charmander();
		let view = DetailView::from_entity(&entity);
		assert_eq!(view.name, "Charmander");
		assert_eq!(
			view.stats,
			vec![
				("HP", 39),
				("Attack", 52),
				("Defence", 43),
				("Sp. Attack", 60),
				("Sp. Defence", 50),
				("Speed", 65),
			]
		);
	}

	#[test]
	fn missing_stats_default_to_empty() {
		let entity = Entity {
			name: Name {
				english: "Missingno".into(),
				japanese: Some("けつばん".into()),
				..Name::default()
			},
			..Entity::new(0, "", Vec::<String>::new())
		};
		let view = DetailView::from_entity(&entity);
		assert_eq!(view.name, "Missingno");
		assert_eq!(view.aliases, vec!["けつばん"]);
		assert!(view.stats.is_empty());
	}

	#[test]
	fn renders_heading_and_stat_rows() {
		let entity = charmander();
		let mut terminal = Terminal::new(TestBackend::new(30, 12)).expect("terminal");
		terminal
			.draw(|frame| {
				render_detail(
					frame,
					DetailContext {
						title: "Details",
						entity: Some(&entity),
						area: frame.area(),
						theme: &Theme::default(),
					},
				);
			})
			.expect("draw");
		let view = terminal.backend().to_string();
		assert!(view.contains("Details"));
		assert!(view.contains("Charmander"));
		assert!(view.contains("Sp. Defence"));
		assert!(view.contains("65"));
	}
}
