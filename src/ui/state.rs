//! Core state container for the terminal front-end.
//!
//! [`App`] owns the session's dataset and view state. Widgets only ever see
//! borrowed projections of it; every mutation goes through the methods here.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiLabels;
use super::outcome::SessionOutcome;
use crate::dataset::{Dataset, Entity};
use crate::loader::{DatasetLoad, error_chain};
use crate::ui::components::QueryInput;
use crate::ui::style::Theme;
use crate::view::{VIEW_LIMIT, ViewState};

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub dataset: Dataset,
	pub view: ViewState,
	/// Text input widget bound to the filter.
	pub search_input: QueryInput<'a>,
	/// Cursor over the visible rows.
	pub table_state: TableState,
	pub theme: Theme,
	pub(crate) ui: UiLabels,
	pub(crate) visible: Vec<usize>,
	pub(crate) limit: usize,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) load: DatasetLoad,
	pub(crate) results_area: Option<Rect>,
}

impl<'a> App<'a> {
	/// Build an app that will receive its dataset from `load`.
	pub fn new(load: DatasetLoad, initial_query: impl Into<String>) -> Self {
		let initial_query = initial_query.into();
		let mut app = Self {
			dataset: Dataset::empty(),
			view: ViewState::new(initial_query.clone()),
			search_input: QueryInput::new(initial_query),
			table_state: TableState::default(),
			theme: Theme::default(),
			ui: UiLabels::default(),
			visible: Vec::new(),
			limit: VIEW_LIMIT,
			throbber_state: ThrobberState::default(),
			load,
			results_area: None,
		};
		app.refresh_placeholder();
		app
	}

	/// Build an app around a dataset that is already loaded.
	pub fn with_dataset(dataset: Dataset, initial_query: impl Into<String>) -> Self {
		let mut app = Self::new(DatasetLoad::idle(), initial_query);
		app.install_dataset(dataset);
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.refresh_placeholder();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	/// Change the maximum number of visible rows.
	pub fn set_limit(&mut self, limit: usize) {
		self.limit = limit;
		self.refresh_view();
	}

	fn refresh_placeholder(&mut self) {
		self.search_input
			.set_placeholder("type to filter by name", self.theme.empty_style());
	}

	/// Whether the dataset is still on its way.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.load.is_pending()
	}

	/// Install the dataset if the loader has delivered it.
	///
	/// A failed load leaves the dataset empty; the error only goes to the log.
	pub(crate) fn pump_dataset(&mut self) {
		match self.load.try_take() {
			Some(Ok(dataset)) => self.install_dataset(dataset),
			Some(Err(err)) => {
				log::warn!("continuing with an empty dataset: {}", error_chain(&err));
			}
			None => {}
		}
	}

	fn install_dataset(&mut self, dataset: Dataset) {
		if !self.dataset.is_empty() {
			log::warn!("ignoring a second dataset delivery");
			return;
		}
		self.dataset = dataset;
		self.refresh_view();
	}

	/// Replace the filter text and recompute the visible rows.
	pub fn set_filter(&mut self, text: impl Into<String>) {
		self.view.set_filter(text);
		self.refresh_view();
	}

	/// Recompute the visible rows and keep the cursor in range.
	pub(crate) fn refresh_view(&mut self) {
		self.visible = self.view.visible(&self.dataset, self.limit);
		self.ensure_cursor();
	}

	pub(crate) fn ensure_cursor(&mut self) {
		let len = self.visible.len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Dataset indices currently visible, in display order.
	#[must_use]
	pub fn visible(&self) -> &[usize] {
		&self.visible
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	/// Select the entity shown in visible row `row`.
	pub fn select_visible_row(&mut self, row: usize) -> bool {
		let Some(&index) = self.visible.get(row) else {
			return false;
		};
		self.table_state.select(Some(row));
		self.view.select(index);
		log::debug!("selected entity #{index}");
		true
	}

	/// Select the entity under the cursor.
	pub fn select_cursor_row(&mut self) -> bool {
		match self.table_state.selected() {
			Some(row) => self.select_visible_row(row),
			None => false,
		}
	}

	#[must_use]
	pub fn selected_entity(&self) -> Option<&Entity> {
		self.view.selected(&self.dataset)
	}

	pub(crate) fn move_cursor_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_cursor_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.visible.len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	/// Snapshot of the session for the caller.
	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			filter: self.view.filter().to_string(),
			selection: self.selected_entity().cloned(),
		}
	}

	pub(crate) fn progress_status(&self) -> (String, bool) {
		if self.is_loading() {
			return ("Loading".to_string(), false);
		}
		let text = format!("{} of {}", self.visible.len(), self.dataset.len());
		(text, true)
	}
}
