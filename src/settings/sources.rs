use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use pokesearch::app_dirs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("pokesearch")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pokesearch.toml"));
		files.push(current_dir.join("pokesearch.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".pokesearch.toml")));
		assert!(files.iter().any(|path| path.ends_with("pokesearch.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("tempfile");
		writeln!(file, "[data]\nlimit = 7\nsource = \"fixtures/p.json\"").expect("write");

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["pokesearch", "--no-config", "--config", path.as_str()]);
		let config = build_config(&cli).expect("config");
		assert_eq!(config.get_int("data.limit").expect("limit"), 7);
		assert_eq!(
			config.get_string("data.source").expect("source"),
			"fixtures/p.json"
		);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["pokesearch", "--no-config", "--config", path.as_str()]);
		assert!(build_config(&cli).is_err());
	}
}
