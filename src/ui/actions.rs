use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::ui::components::tables::row_at;

/// Whether the loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
	Continue,
	Exit,
}

impl<'a> App<'a> {
	/// Process a keyboard event.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Flow {
		match key.code {
			KeyCode::Esc => return Flow::Exit,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Flow::Exit;
			}
			KeyCode::Enter => {
				self.select_cursor_row();
			}
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.set_filter(text);
				}
			}
		}
		Flow::Continue
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let Some(area) = self.results_area else {
			return;
		};
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let offset = self.table_state.offset();
				let hit = row_at(area, offset, self.visible_len(), mouse.column, mouse.row);
				if let Some(row) = hit {
					self.select_visible_row(row);
				}
			}
			MouseEventKind::ScrollUp => self.move_cursor_up(),
			MouseEventKind::ScrollDown => self.move_cursor_down(),
			_ => {}
		}
	}
}
