use std::fmt::Write;

use pokesearch::DataSource;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	match &config.source {
		DataSource::Http(url) => {
			let _ = writeln!(out, "  Source: {url}");
		}
		DataSource::File(path) => {
			let _ = writeln!(out, "  Source: {} (file)", path.display());
		}
	}
	let _ = writeln!(out, "  Timeout: {}s", config.fetch.timeout.as_secs());
	let _ = writeln!(out, "  Row limit: {}", config.limit);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Title: {}", config.labels.title);
	let _ = writeln!(out, "  Filter label: {}", config.labels.filter_label);
	let _ = writeln!(out, "  Detail title: {}", config.labels.detail_panel_title);
	let _ = writeln!(out, "  Headers: {}", config.labels.headers.join(", "));
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(
		out,
		"  Log level: {}",
		config
			.log_level
			.map(|level| level.as_str().to_ascii_lowercase())
			.unwrap_or_else(|| "(from RUST_LOG)".to_string())
	);
	if let Some(file) = &config.log_file {
		let _ = writeln!(out, "  Log file: {}", file.display());
	}
	out
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use log::LevelFilter;
	use pokesearch::{FetchOptions, UiLabels};

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			source: DataSource::File(PathBuf::from("pokemon.json")),
			fetch: FetchOptions::default(),
			limit: 20,
			initial_query: "char".into(),
			theme: Some("light".into()),
			labels: UiLabels::default(),
			log_level: Some(LevelFilter::Debug),
			log_file: None,
		};

		insta::assert_snapshot!(render_summary(&config).trim_end(), @r"
		Effective configuration:
		  Source: pokemon.json (file)
		  Timeout: 10s
		  Row limit: 20
		  UI theme: light
		  Title: Pokemon Search
		  Filter label: Filter
		  Detail title: Details
		  Headers: Name, Type
		  Initial query: char
		  Log level: debug
		");
	}

	#[test]
	fn summary_mentions_default_theme_and_env_logging() {
		let config = ResolvedConfig {
			source: DataSource::default(),
			fetch: FetchOptions::default(),
			limit: 20,
			initial_query: String::new(),
			theme: None,
			labels: UiLabels::default(),
			log_level: None,
			log_file: Some(PathBuf::from("/tmp/p.log")),
		};

		let summary = render_summary(&config);
		assert!(summary.contains("(use the library default)"));
		assert!(summary.contains("(from RUST_LOG)"));
		assert!(summary.contains("Log file: /tmp/p.log"));
		assert!(!summary.contains("Initial query"));
	}
}
