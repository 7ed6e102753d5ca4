use anyhow::Result;

use super::config::UiLabels;
use super::outcome::SessionOutcome;
use super::style::Theme;
use super::App;
use crate::loader::{self, DataSource, DatasetLoad, FetchOptions};
use crate::view::VIEW_LIMIT;

/// Builder for configuring the interactive search screen before running it.
#[derive(Debug, Clone)]
pub struct SearchUi {
	source: DataSource,
	fetch: FetchOptions,
	initial_query: String,
	labels: UiLabels,
	theme: Theme,
	limit: usize,
}

impl SearchUi {
	/// Search the dataset published at `source`.
	#[must_use]
	pub fn new(source: DataSource) -> Self {
		Self {
			source,
			fetch: FetchOptions::default(),
			initial_query: String::new(),
			labels: UiLabels::default(),
			theme: Theme::default(),
			limit: VIEW_LIMIT,
		}
	}

	#[must_use]
	pub fn with_fetch_options(mut self, options: FetchOptions) -> Self {
		self.fetch = options;
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	/// Build the [`App`] around an existing load handle.
	#[must_use]
	pub fn build<'a>(self, load: DatasetLoad) -> App<'a> {
		let mut app = App::new(load, self.initial_query);
		app.set_labels(self.labels);
		app.set_theme(self.theme);
		app.set_limit(self.limit);
		app
	}

	/// Start the one background load and run the interactive screen.
	pub fn run(self) -> Result<SessionOutcome> {
		let load = loader::spawn(self.source.clone(), self.fetch);
		let mut app = self.build(load);
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::style;

	#[test]
	fn build_applies_configuration() {
		let labels = UiLabels {
			title: "Creatures".into(),
			..UiLabels::default()
		};
		let app = SearchUi::new(DataSource::default())
			.with_initial_query("pika")
			.with_labels(labels.clone())
			.with_theme(style::LIGHT)
			.with_limit(5)
			.build(DatasetLoad::idle());

		assert_eq!(app.view.filter(), "pika");
		assert_eq!(app.search_input.text(), "pika");
		assert_eq!(app.ui, labels);
		assert_eq!(app.theme, style::LIGHT);
		assert_eq!(app.limit, 5);
		assert!(!app.is_loading());
	}
}
