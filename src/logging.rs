//! Logger setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so interactive
//! sessions log to a file. Headless runs log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Name of the log file created inside the data directory.
pub const LOG_FILE_NAME: &str = "pokesearch.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	File(PathBuf),
	Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	/// Explicit level. `None` defers to `RUST_LOG`, then `warn`.
	pub level: Option<LevelFilter>,
	pub target: LogTarget,
}

/// Install the global logger. Safe to call more than once; later calls keep
/// the first logger.
pub fn init(settings: &LogSettings) -> Result<()> {
	let mut builder = Builder::new();
	builder.filter_level(LevelFilter::Warn);
	match settings.level {
		Some(level) => {
			builder.filter_level(level);
		}
		None => {
			builder.parse_default_env();
		}
	}

	match &settings.target {
		LogTarget::File(path) => {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent).with_context(|| {
					format!("failed to create log directory {}", parent.display())
				})?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			builder.target(Target::Pipe(Box::new(file)));
		}
		LogTarget::Stderr => {
			builder.target(Target::Stderr);
		}
	}

	if builder.try_init().is_err() {
		log::debug!("logger already initialised");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_target_creates_parent_directories() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join(LOG_FILE_NAME);
		init(&LogSettings {
			level: Some(LevelFilter::Info),
			target: LogTarget::File(path.clone()),
		})
		.expect("init");
		assert!(path.exists());
	}
}
