use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use pokesearch::{DataSource, VIEW_LIMIT};

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"pokesearch",
		"--source",
		"fixtures/pokemon.json",
		"--timeout",
		"3",
		"--limit",
		"5",
		"--query",
		"char",
		"--theme",
		"light",
		"--title",
		"Dex",
		"--filter-label",
		"Name",
		"--detail-title",
		"Stats",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/dex.log",
	]);

	let mut config = RawConfig::default();
	config.data.source = Some("http://example.invalid/p.json".into());
	config.data.limit = Some(50);
	config.ui.theme = Some("solarized".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.source.as_deref(), Some("fixtures/pokemon.json"));
	assert_eq!(config.data.timeout_secs, Some(3));
	assert_eq!(config.data.limit, Some(5));
	assert_eq!(config.ui.initial_query.as_deref(), Some("char"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.title.as_deref(), Some("Dex"));
	assert_eq!(config.ui.filter_label.as_deref(), Some("Name"));
	assert_eq!(config.ui.detail_panel_title.as_deref(), Some("Stats"));
	assert_eq!(config.log.level.as_deref(), Some("debug"));
	assert_eq!(config.log.file, Some(PathBuf::from("/tmp/dex.log")));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["pokesearch"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.source, DataSource::default());
	assert_eq!(resolved.fetch.timeout, Duration::from_secs(10));
	assert_eq!(resolved.limit, VIEW_LIMIT);
	assert_eq!(resolved.initial_query, "");
	assert_eq!(resolved.theme, None);
	assert_eq!(resolved.labels.title, "Pokemon Search");
	assert_eq!(resolved.log_level, None);
	assert_eq!(resolved.log_file, None);
}

#[test]
fn resolve_applies_config_values() {
	let cli = CliArgs::parse_from(["pokesearch"]);
	let mut config = RawConfig::default();
	config.data.source = Some("  ./data/pokemon.json ".into());
	config.data.timeout_secs = Some(2);
	config.ui.headers = Some(vec!["Species".into(), "  ".into()]);
	config.ui.theme = Some(" Dark ".into());
	config.log.level = Some("INFO".into());

	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(
		resolved.source,
		DataSource::File(PathBuf::from("./data/pokemon.json"))
	);
	assert_eq!(resolved.fetch.timeout, Duration::from_secs(2));
	assert_eq!(resolved.labels.headers, ["Species".to_string(), "Type".to_string()]);
	assert_eq!(resolved.theme.as_deref(), Some("Dark"));
	assert_eq!(resolved.log_level, Some(LevelFilter::Info));
}

#[test]
fn resolve_rejects_zero_limit_from_cli() {
	let cli = CliArgs::parse_from(["pokesearch", "--limit", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err().to_string();
	assert!(err.contains("data.limit"), "{err}");
	assert!(err.contains("CLI flag `--limit`"), "{err}");
}

#[test]
fn resolve_rejects_unknown_theme() {
	let cli = CliArgs::parse_from(["pokesearch"]);
	let mut config = RawConfig::default();
	config.ui.theme = Some("neon".into());

	let err = config.resolve(&cli).unwrap_err().to_string();
	assert!(err.contains("ui.theme"), "{err}");
	assert!(err.contains("neon"), "{err}");
}

#[test]
fn resolve_rejects_unknown_log_level() {
	let cli = CliArgs::parse_from(["pokesearch"]);
	let mut config = RawConfig::default();
	config.log.level = Some("loud".into());

	let err = config.resolve(&cli).unwrap_err().to_string();
	assert!(err.contains("log.level"), "{err}");
}
