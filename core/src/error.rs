//! Error types for the campus core

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::LocationId;

/// Errors surfaced by session-level operations
#[derive(Error, Debug)]
pub enum CampusError {
	/// Fetching or parsing the location dataset failed; the previous set is kept
	#[error("Failed to load locations: {0}")]
	LoadFailure(#[from] LoadError),

	/// No location with this id in the current snapshot
	#[error("Location not found: {0}")]
	NotFound(LocationId),

	/// The geolocation provider refused or could not produce a position
	#[error("Geolocation unavailable: {0}")]
	GeolocationDenied(#[from] GeolocationError),

	/// Invalid configuration value
	#[error("Configuration error: {0}")]
	Config(String),
}

/// Result type for campus operations
pub type CampusResult<T> = std::result::Result<T, CampusError>;

/// Reasons a dataset load can fail
#[derive(Error, Debug)]
pub enum LoadError {
	#[error("file I/O error; path: '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("duplicate location id '{0}'")]
	DuplicateId(LocationId),

	#[error("location '{id}' has invalid coordinates ({lat}, {lng})")]
	InvalidCoordinates { id: LocationId, lat: f64, lng: f64 },
}

impl LoadError {
	pub fn from_std_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

/// Geolocation failures, all of which fall back to the fixed origin
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
	#[error("permission denied")]
	Denied,
	#[error("position unavailable")]
	Unavailable,
	#[error("timed out")]
	Timeout,
}
