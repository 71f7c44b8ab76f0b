//! Session configuration

use crate::{
	domain::Coordinates,
	error::{CampusError, CampusResult},
	filter::FilterEngine,
	route::{TravelMode, DEFAULT_FALLBACK_ORIGIN},
	search::SearchOptions,
	selection::DEFAULT_FOCUS_ZOOM,
	store::DataSource,
};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{info, warn};

/// Map view settings passed through to the map surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
	pub center: Coordinates,
	pub default_zoom: u8,
	/// Zoom used when a location gains focus
	pub focus_zoom: u8,
	pub max_zoom: u8,
	pub tile_url: String,
	pub attribution: String,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			center: DEFAULT_FALLBACK_ORIGIN,
			default_zoom: 15,
			focus_zoom: DEFAULT_FOCUS_ZOOM,
			max_zoom: 19,
			tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
			attribution: "© OpenStreetMap".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
	pub travel_mode: TravelMode,
	/// Route origin when the device position is unknown
	pub fallback_origin: Coordinates,
}

impl Default for RouteConfig {
	fn default() -> Self {
		Self {
			travel_mode: TravelMode::default(),
			fallback_origin: DEFAULT_FALLBACK_ORIGIN,
		}
	}
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
	/// Config schema version
	pub version: u32,

	/// Logging level
	pub log_level: String,

	/// Where the location dataset is loaded from
	pub data_source: DataSource,

	pub map: MapConfig,
	pub search: SearchOptions,
	pub filter: FilterEngine,
	pub route: RouteConfig,
}

impl Default for CampusConfig {
	fn default() -> Self {
		Self {
			version: Self::CURRENT_VERSION,
			log_level: "info".to_string(),
			data_source: DataSource::default(),
			map: MapConfig::default(),
			search: SearchOptions::default(),
			filter: FilterEngine::default(),
			route: RouteConfig::default(),
		}
	}
}

impl CampusConfig {
	pub const CURRENT_VERSION: u32 = 1;

	/// Load configuration from `path`, writing defaults there if it does not exist
	pub fn load_from(path: &Path) -> Result<Self> {
		if path.exists() {
			Self::read(path)
		} else {
			warn!("No config found, creating default at {:?}", path);
			let config = Self::default();
			config.save(path)?;
			Ok(config)
		}
	}

	/// Load configuration from `path`, using defaults without touching disk if it does not exist
	pub fn load_or_default(path: &Path) -> Result<Self> {
		if path.exists() {
			Self::read(path)
		} else {
			info!("No config at {:?}, using defaults", path);
			Ok(Self::default())
		}
	}

	fn read(path: &Path) -> Result<Self> {
		info!("Loading config from {:?}", path);
		let json = fs::read_to_string(path)
			.with_context(|| format!("reading config {}", path.display()))?;
		let config: CampusConfig = serde_json::from_str(&json)
			.with_context(|| format!("parsing config {}", path.display()))?;

		if config.version > Self::CURRENT_VERSION {
			return Err(anyhow!("Unknown config version: {}", config.version));
		}

		config.validate()?;
		Ok(config)
	}

	/// Save configuration to disk
	pub fn save(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}

		let json = serde_json::to_string_pretty(self)?;
		fs::write(path, json)?;
		info!("Saved config to {:?}", path);
		Ok(())
	}

	pub fn validate(&self) -> CampusResult<()> {
		let search = &self.search;
		if !(0.0..=1.0).contains(&search.threshold) {
			return Err(CampusError::Config(format!(
				"search.threshold must be within 0.0..=1.0, got {}",
				search.threshold
			)));
		}

		let weights = &search.weights;
		if [weights.name, weights.category, weights.description]
			.iter()
			.any(|w| !w.is_finite() || *w < 0.0)
		{
			return Err(CampusError::Config(
				"search.weights must be non-negative".to_string(),
			));
		}

		if self.map.focus_zoom > self.map.max_zoom || self.map.default_zoom > self.map.max_zoom {
			return Err(CampusError::Config(format!(
				"map zoom levels must not exceed max_zoom ({})",
				self.map.max_zoom
			)));
		}

		for (name, c) in [
			("map.center", &self.map.center),
			("route.fallback_origin", &self.route.fallback_origin),
		] {
			if !c.is_valid() {
				return Err(CampusError::Config(format!("{name} is not a valid coordinate")));
			}
		}

		Ok(())
	}
}
