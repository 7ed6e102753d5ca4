//! One-shot dataset loading.
//!
//! [`spawn`] runs a single [`fetch`] on a worker thread and hands the result
//! back over a channel that the UI drains on its own schedule. Nothing is
//! retried. If the UI goes away first, the result is dropped on the floor.

mod error;
mod source;

use std::fs;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::dataset::{Dataset, Entity};

pub use error::LoadError;
pub use source::{DEFAULT_SOURCE_URL, DataSource};

/// Default time allowed for the whole HTTP exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables applied to a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
	pub timeout: Duration,
}

impl Default for FetchOptions {
	fn default() -> Self {
		Self {
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

pub type LoadResult = Result<Dataset, LoadError>;

/// Read, parse and validate the dataset behind `source`.
pub fn fetch(source: &DataSource, options: &FetchOptions) -> LoadResult {
	let origin = source.to_string();
	let body = match source {
		DataSource::Http(url) => fetch_http(url, options)?,
		DataSource::File(path) => fs::read(path).map_err(|source| LoadError::Io {
			path: path.clone(),
			source,
		})?,
	};
	parse_dataset(&body, origin)
}

fn fetch_http(url: &str, options: &FetchOptions) -> Result<Vec<u8>, LoadError> {
	let request_error = |source| LoadError::Request {
		url: url.to_string(),
		source,
	};
	let client = reqwest::blocking::Client::builder()
		.timeout(options.timeout)
		.build()
		.map_err(request_error)?;
	let response = client.get(url).send().map_err(request_error)?;
	let status = response.status();
	if !status.is_success() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status,
		});
	}
	let bytes = response.bytes().map_err(request_error)?;
	Ok(bytes.to_vec())
}

/// Parse a JSON array of entities and check dataset invariants.
pub fn parse_dataset(body: &[u8], origin: impl Into<String>) -> LoadResult {
	let origin = origin.into();
	let entities: Vec<Entity> = match serde_json::from_slice(body) {
		Ok(entities) => entities,
		Err(source) => return Err(LoadError::Parse { origin, source }),
	};
	Dataset::new(entities).map_err(|source| LoadError::Dataset { origin, source })
}

/// Handle to an in-flight load started by [`spawn`].
#[derive(Debug)]
pub struct DatasetLoad {
	receiver: Option<Receiver<LoadResult>>,
}

impl DatasetLoad {
	/// Wrap an existing receiver. Useful when the caller produces the result.
	#[must_use]
	pub fn from_receiver(receiver: Receiver<LoadResult>) -> Self {
		Self {
			receiver: Some(receiver),
		}
	}

	/// A load that will never deliver anything.
	#[must_use]
	pub fn idle() -> Self {
		Self { receiver: None }
	}

	/// Whether a result may still arrive.
	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.receiver.is_some()
	}

	/// Take the result if it has arrived. Returns `None` while the worker is
	/// still running and after the result has been taken.
	pub fn try_take(&mut self) -> Option<LoadResult> {
		let receiver = self.receiver.as_ref()?;
		match receiver.try_recv() {
			Ok(result) => {
				self.receiver = None;
				Some(result)
			}
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => {
				log::warn!("dataset loader exited without delivering a result");
				self.receiver = None;
				None
			}
		}
	}

	/// Block until the result arrives. Returns `None` if it was already taken.
	pub fn wait(mut self) -> Option<LoadResult> {
		let receiver = self.receiver.take()?;
		receiver.recv().ok()
	}
}

/// Start the single background load for this session.
pub fn spawn(source: DataSource, options: FetchOptions) -> DatasetLoad {
	let (tx, rx) = mpsc::channel();
	let spawned = thread::Builder::new()
		.name("dataset-loader".into())
		.spawn(move || {
			log::info!("loading dataset from {source}");
			let result = fetch(&source, &options);
			match &result {
				Ok(dataset) => log::info!("loaded {} entities from {source}", dataset.len()),
				Err(err) => log::error!("dataset load failed: {}", error_chain(err)),
			}
			if tx.send(result).is_err() {
				log::debug!("dataset load finished after the session ended");
			}
		});
	match spawned {
		Ok(_) => DatasetLoad::from_receiver(rx),
		Err(err) => {
			log::error!("failed to start dataset loader: {err}");
			DatasetLoad::idle()
		}
	}
}

/// Render an error and its sources on one line.
#[must_use]
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
