use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Clear, Paragraph};

use super::App;
use super::components::tables::{HEADER_HEIGHT, resolve_column_widths, result_column_widths};
use super::components::{
	DetailContext, InputContext, ProgressState, TableSpec, build_rows, render_detail,
	render_input, render_table, render_title,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [title_area, input_area, _gap, body_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		render_title(frame, &self.ui.title, title_area, &self.theme);

		let (progress_text, progress_complete) = self.progress_status();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				label: &self.ui.filter_label,
				area: input_area,
				theme: &self.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				progress_complete,
				throbber_state: &self.throbber_state,
			},
		);

		let [results_area, detail_area] =
			Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
				.spacing(1)
				.areas(body_area);

		self.results_area = Some(results_area);
		self.render_results(frame, results_area);

		render_detail(
			frame,
			DetailContext {
				title: &self.ui.detail_panel_title,
				entity: self.view.selected(&self.dataset),
				area: detail_area,
				theme: &self.theme,
			},
		);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let widths = result_column_widths();
		let column_widths = resolve_column_widths(area, &widths);
		let rows = build_rows(
			&self.visible,
			&self.dataset,
			self.view.selection(),
			self.theme.selected_style(),
			Some(&column_widths),
		);
		render_table(
			frame,
			area,
			&mut self.table_state,
			TableSpec {
				headers: self.ui.headers.to_vec(),
				widths,
				rows,
			},
			&self.theme,
		);

		if self.visible.is_empty() && !self.is_loading() && area.height > HEADER_HEIGHT {
			let message_area = Rect {
				y: area.y + HEADER_HEIGHT,
				height: area.height - HEADER_HEIGHT,
				..area
			};
			let empty = Paragraph::new("No results")
				.alignment(Alignment::Center)
				.style(self.theme.empty_style());
			frame.render_widget(Clear, message_area);
			frame.render_widget(empty, message_area);
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use crate::dataset::{BaseStats, Dataset, Entity};
	use crate::ui::App;

	fn scenario() -> Dataset {
		Dataset::new(vec![
			Entity::new(1, "Bulbasaur", ["Grass", "Poison"]).with_base(BaseStats {
				hp: 45,
				attack: 49,
				defence: 49,
				special_attack: 65,
				special_defence: 65,
				speed: 45,
			}),
			Entity::new(2, "Charmander", ["Fire"]).with_base(BaseStats {
				hp: 39,
				attack: 52,
				defence: 43,
				special_attack: 60,
				special_defence: 50,
				speed: 65,
			}),
		])
		.expect("dataset")
	}

	fn render(app: &mut App<'_>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		terminal.backend().to_string()
	}

	#[test]
	fn renders_rows_and_status() {
		let mut app = App::with_dataset(scenario(), "");
		let view = render(&mut app);
		assert!(view.contains("Pokemon Search"));
		assert!(view.contains("Bulbasaur"));
		assert!(view.contains("Grass, Poison"));
		assert!(view.contains("Charmander"));
		assert!(view.contains("2 of 2"));
		assert!(!view.contains("Speed"));
	}

	#[test]
	fn filter_and_select_shows_detail() {
		let mut app = App::with_dataset(scenario(), "char");
		app.select_cursor_row();
		let view = render(&mut app);
		assert!(!view.contains("Bulbasaur"));
		assert!(view.contains("Charmander"));
		assert!(view.contains("Sp. Attack"));
		assert!(view.contains("Speed"));
		assert!(view.contains("1 of 2"));
	}

	#[test]
	fn empty_view_shows_placeholder_message() {
		let mut app = App::with_dataset(scenario(), "pikachu");
		let view = render(&mut app);
		assert!(view.contains("No results"));
		assert!(view.contains("0 of 2"));
	}

	#[test]
	fn render_records_results_area_for_hit_testing() {
		let mut app = App::with_dataset(scenario(), "");
		render(&mut app);
		assert!(app.results_area.is_some());
	}
}
