use std::time::Duration;

use log::LevelFilter;
use pokesearch::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.limit == 0 {
		return Err(ConfigError::invalid(
			"data.limit",
			config.limit.to_string(),
			sources.source_for_limit(),
			"must be greater than zero",
		));
	}

	if config.fetch.timeout == Duration::ZERO {
		return Err(ConfigError::invalid(
			"data.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be at least 1 second",
		));
	}

	if let Some(theme) = config.theme.as_deref()
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			sources.source_for_theme(),
			format!("unknown theme, expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}

/// Parse a textual log level such as `warn` or `debug`.
pub(crate) fn parse_log_level(
	value: &str,
	origin: SettingSource,
) -> Result<LevelFilter, ConfigError> {
	value.parse::<LevelFilter>().map_err(|_| {
		ConfigError::invalid(
			"log.level",
			value,
			origin,
			"expected one of off, error, warn, info, debug, trace",
		)
	})
}
