use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, parse_log_level};

mod data;
mod logging;
mod ui;

use data::DataSection;
use logging::LogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			limit: detect_source(
				cli.limit.is_some(),
				self.data.limit.is_some(),
				"POKESEARCH__DATA__LIMIT",
				"--limit",
				"data.limit",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.data.timeout_secs.is_some(),
				"POKESEARCH__DATA__TIMEOUT_SECS",
				"--timeout",
				"data.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"POKESEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"POKESEARCH__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let data = self.data.finalize();
		let ui = self.ui.finalize();
		let (level, log_file) = self.log.finalize();
		let log_level = level
			.map(|value| parse_log_level(&value, sources.source_for_log_level()))
			.transpose()
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			source: data.source,
			fetch: data.fetch,
			limit: data.limit,
			initial_query: ui.initial_query,
			theme: ui.theme,
			labels: ui.labels,
			log_level,
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
