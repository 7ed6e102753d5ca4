use std::time::Duration;

use pokesearch::{DataSource, FetchOptions, VIEW_LIMIT};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Dataset related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) source: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) limit: Option<usize>,
}

pub(super) struct DataResolution {
	pub(super) source: DataSource,
	pub(super) fetch: FetchOptions,
	pub(super) limit: usize,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(source) = cli.source.clone() {
			self.source = Some(source);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
		if let Some(limit) = cli.limit {
			self.limit = Some(limit);
		}
	}

	pub(super) fn finalize(self) -> DataResolution {
		let source = self
			.source
			.as_deref()
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.map(DataSource::parse)
			.unwrap_or_default();

		let fetch = match self.timeout_secs {
			Some(secs) => FetchOptions {
				timeout: Duration::from_secs(secs),
			},
			None => FetchOptions::default(),
		};

		DataResolution {
			source,
			fetch,
			limit: self.limit.unwrap_or(VIEW_LIMIT),
		}
	}
}
