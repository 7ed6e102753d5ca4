use std::path::PathBuf;

use thiserror::Error;

use crate::dataset::DatasetError;

/// Reasons a dataset load can fail.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("request to {url} failed")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{url} responded with status {status}")]
	Status {
		url: String,
		status: reqwest::StatusCode,
	},
	#[error("failed to read {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("response from {origin} is not a list of entities")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("dataset from {origin} is invalid")]
	Dataset {
		origin: String,
		#[source]
		source: DatasetError,
	},
}
