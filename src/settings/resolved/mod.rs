use std::path::PathBuf;

use log::LevelFilter;
use pokesearch::{DataSource, FetchOptions, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::parse_log_level;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: DataSource,
	pub fetch: FetchOptions,
	pub limit: usize,
	pub initial_query: String,
	pub theme: Option<String>,
	pub labels: UiLabels,
	/// `None` defers to `RUST_LOG`.
	pub log_level: Option<LevelFilter>,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
