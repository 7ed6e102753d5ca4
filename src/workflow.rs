use anyhow::{Result, anyhow};
use pokesearch::ui::style;
use pokesearch::{Entity, SearchUi, SessionOutcome, derived_view, loader};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			source,
			fetch,
			limit,
			initial_query,
			theme,
			labels,
			..
		} = config;

		let builder = Self {
			search_ui: SearchUi::new(source)
				.with_fetch_options(fetch)
				.with_limit(limit)
				.with_labels(labels),
		}
		.with_initial_query(initial_query)
		.with_theme(theme)?;

		Ok(builder.finish())
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.search_ui = self.search_ui.with_initial_query(query);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Result<Self> {
		if let Some(name) = theme {
			let theme = style::by_name(&name).ok_or_else(|| anyhow!("unknown theme `{name}`"))?;
			self.search_ui = self.search_ui.with_theme(theme);
		}
		Ok(self)
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}

/// Fetch the dataset in the foreground and return the rows matching the
/// configured initial query.
pub(crate) fn run_headless(config: &ResolvedConfig) -> Result<Vec<Entity>> {
	let dataset = loader::fetch(&config.source, &config.fetch)?;
	log::info!("loaded {} entities from {}", dataset.len(), config.source);
	let rows = derived_view(dataset.entities(), &config.initial_query, config.limit)
		.into_iter()
		.filter_map(|index| dataset.get(index).cloned())
		.collect();
	Ok(rows)
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::path::PathBuf;

	use log::LevelFilter;
	use pokesearch::{DataSource, FetchOptions, UiLabels};

	use super::*;

	fn config(source: DataSource, query: &str, limit: usize) -> ResolvedConfig {
		ResolvedConfig {
			source,
			fetch: FetchOptions::default(),
			limit,
			initial_query: query.to_string(),
			theme: None,
			labels: UiLabels::default(),
			log_level: Some(LevelFilter::Off),
			log_file: None,
		}
	}

	#[test]
	fn headless_run_filters_file_dataset() {
		let mut file = tempfile::NamedTempFile::new().expect("tempfile");
		write!(
			file,
			r#"[
				{{"id": 1, "name": {{"english": "Bulbasaur"}}, "type": ["Grass", "Poison"]}},
				{{"id": 4, "name": {{"english": "Charmander"}}, "type": ["Fire"]}},
				{{"id": 5, "name": {{"english": "Charmeleon"}}, "type": ["Fire"]}}
			]"#
		)
		.expect("write");

		let source = DataSource::File(file.path().to_path_buf());
		let rows = run_headless(&config(source, "CHAR", 1)).expect("rows");
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].display_name(), "Charmander");
	}

	#[test]
	fn headless_run_reports_missing_file() {
		let source = DataSource::File(PathBuf::from("/definitely/not/here.json"));
		assert!(run_headless(&config(source, "", 20)).is_err());
	}

	#[test]
	fn factory_rejects_unknown_theme() {
		let mut config = config(DataSource::default(), "", 20);
		config.theme = Some("neon".into());
		assert!(SearchWorkflow::from_config(config).is_err());
	}
}
