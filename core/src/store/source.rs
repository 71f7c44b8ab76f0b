//! Where location datasets come from

use crate::{domain::LocationRecord, error::LoadError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};
use tracing::debug;

/// A read-only provider of the full location dataset
#[async_trait]
pub trait LocationSource: Send + Sync {
	/// Fetch and parse every record; partial results are never returned
	async fn fetch(&self) -> Result<Vec<LocationRecord>, LoadError>;

	/// Human readable origin, used in logs
	fn describe(&self) -> String;
}

/// Dataset location as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataSource {
	File { path: PathBuf },
	Url { url: String },
}

impl Default for DataSource {
	fn default() -> Self {
		DataSource::File {
			path: PathBuf::from("data/locations.json"),
		}
	}
}

impl fmt::Display for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DataSource::File { path } => write!(f, "{}", path.display()),
			DataSource::Url { url } => write!(f, "{url}"),
		}
	}
}

impl DataSource {
	/// Treat anything with an http(s) scheme as a URL, everything else as a path
	pub fn parse(value: &str) -> Self {
		if value.starts_with("http://") || value.starts_with("https://") {
			DataSource::Url {
				url: value.to_string(),
			}
		} else {
			DataSource::File {
				path: PathBuf::from(value),
			}
		}
	}

	pub fn into_source(self) -> Box<dyn LocationSource> {
		match self {
			DataSource::File { path } => Box::new(FileSource::new(path)),
			DataSource::Url { url } => Box::new(HttpSource::new(url)),
		}
	}
}

/// JSON dataset on the local filesystem
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

#[async_trait]
impl LocationSource for FileSource {
	async fn fetch(&self) -> Result<Vec<LocationRecord>, LoadError> {
		let bytes = tokio::fs::read(&self.path)
			.await
			.map_err(|e| LoadError::from_std_io_err(&self.path, e))?;
		debug!("Read {} bytes from {}", bytes.len(), self.path.display());

		Ok(serde_json::from_slice(&bytes)?)
	}

	fn describe(&self) -> String {
		self.path.display().to_string()
	}
}

/// JSON dataset served over HTTP
pub struct HttpSource {
	url: String,
	client: reqwest::Client,
}

impl HttpSource {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			client: reqwest::Client::new(),
		}
	}
}

#[async_trait]
impl LocationSource for HttpSource {
	async fn fetch(&self) -> Result<Vec<LocationRecord>, LoadError> {
		let response = self.client.get(&self.url).send().await?.error_for_status()?;
		let body = response.bytes().await?;
		debug!("Fetched {} bytes from {}", body.len(), self.url);

		Ok(serde_json::from_slice(&body)?)
	}

	fn describe(&self) -> String {
		self.url.clone()
	}
}

/// Records already in memory, parsed from a JSON string
pub struct StaticSource {
	json: String,
}

impl StaticSource {
	pub fn new(json: impl Into<String>) -> Self {
		Self { json: json.into() }
	}

	/// A source with no locations
	pub fn empty() -> Self {
		Self::new("[]")
	}
}

#[async_trait]
impl LocationSource for StaticSource {
	async fn fetch(&self) -> Result<Vec<LocationRecord>, LoadError> {
		Ok(serde_json::from_str(&self.json)?)
	}

	fn describe(&self) -> String {
		"<static>".to_string()
	}
}
