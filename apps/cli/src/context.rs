use anyhow::{Context as _, Result};
use campus_map_core::{store::LocationStore, Catalog, CampusConfig};
use std::{path::PathBuf, sync::Arc};
use tracing::debug;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
	Human,
	Json,
}

#[derive(Clone)]
pub struct Context {
	pub config: CampusConfig,
	pub config_path: PathBuf,
	pub format: OutputFormat,
}

impl Context {
	pub fn new(config: CampusConfig, config_path: PathBuf, format: OutputFormat) -> Self {
		Self {
			config,
			config_path,
			format,
		}
	}

	/// Load the configured dataset into a fresh catalog
	pub async fn load_catalog(&self) -> Result<Arc<Catalog>> {
		let source = self.config.data_source.clone();
		debug!("Loading locations from {}", source);

		let mut store = LocationStore::new(source.clone().into_source(), self.config.search);
		store
			.load()
			.await
			.with_context(|| format!("loading locations from {}", source))
	}
}
