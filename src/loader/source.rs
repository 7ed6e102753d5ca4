use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Endpoint the upstream dataset is published at.
pub const DEFAULT_SOURCE_URL: &str = "http://localhost:3001/starting-react/pokemon.json";

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
	Http(String),
	File(PathBuf),
}

impl DataSource {
	/// Interpret a user-supplied location. `http://` and `https://` prefixes
	/// select HTTP, `file://` is stripped, anything else is a path.
	#[must_use]
	pub fn parse(location: &str) -> Self {
		let location = location.trim();
		if location.starts_with("http://") || location.starts_with("https://") {
			return Self::Http(location.to_string());
		}
		let path = location.strip_prefix("file://").unwrap_or(location);
		Self::File(PathBuf::from(path))
	}
}

impl Default for DataSource {
	fn default() -> Self {
		Self::Http(DEFAULT_SOURCE_URL.to_string())
	}
}

impl FromStr for DataSource {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl fmt::Display for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Http(url) => f.write_str(url),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}
