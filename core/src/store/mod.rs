//! Location store - the session's authoritative location list
//!
//! A [`Catalog`] is one immutable snapshot: the resolved locations, an id
//! lookup table and the search index built from exactly those locations.
//! Loading builds a complete new catalog off to the side and only swaps it in
//! once every record has parsed and validated, so readers never observe a
//! half-loaded set and the index can never drift from the store.

pub mod source;

use crate::{
	domain::{Location, LocationId, LocationRecord},
	error::{CampusError, CampusResult, LoadError},
	search::{SearchIndex, SearchOptions},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{error, info, instrument};

pub use source::{DataSource, FileSource, HttpSource, LocationSource, StaticSource};

/// One immutable snapshot of the location set and its search index
#[derive(Debug)]
pub struct Catalog {
	locations: Arc<[Location]>,
	by_id: HashMap<LocationId, usize>,
	index: SearchIndex,
}

impl Catalog {
	/// Resolve and validate raw records into a catalog
	pub fn from_records(
		records: Vec<LocationRecord>,
		options: SearchOptions,
	) -> Result<Self, LoadError> {
		let locations = records
			.into_iter()
			.map(LocationRecord::resolve)
			.collect::<Result<Vec<_>, _>>()?;

		Self::new(locations, options)
	}

	pub fn new(locations: Vec<Location>, options: SearchOptions) -> Result<Self, LoadError> {
		let mut by_id = HashMap::with_capacity(locations.len());
		for (position, location) in locations.iter().enumerate() {
			if by_id.insert(location.id.clone(), position).is_some() {
				return Err(LoadError::DuplicateId(location.id.clone()));
			}
		}

		let locations: Arc<[Location]> = locations.into();
		let index = SearchIndex::build(locations.clone(), options);

		Ok(Self {
			locations,
			by_id,
			index,
		})
	}

	pub fn empty(options: SearchOptions) -> Self {
		Self {
			locations: Arc::from(Vec::new()),
			by_id: HashMap::new(),
			index: SearchIndex::build(Arc::from(Vec::new()), options),
		}
	}

	/// Every location, in dataset order
	pub fn all(&self) -> &[Location] {
		&self.locations
	}

	pub fn get(&self, id: &LocationId) -> Option<&Location> {
		self.by_id.get(id).map(|&position| &self.locations[position])
	}

	pub fn index(&self) -> &SearchIndex {
		&self.index
	}

	pub fn len(&self) -> usize {
		self.locations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.locations.is_empty()
	}
}

/// Holds the current catalog and reloads it from a [`LocationSource`]
pub struct LocationStore {
	source: Box<dyn LocationSource>,
	options: SearchOptions,
	catalog: Arc<Catalog>,
}

impl LocationStore {
	/// Create a store with an empty catalog; call [`LocationStore::load`] to populate it
	pub fn new(source: Box<dyn LocationSource>, options: SearchOptions) -> Self {
		Self {
			source,
			options,
			catalog: Arc::new(Catalog::empty(options)),
		}
	}

	/// Fetch the full dataset and replace the current snapshot.
	///
	/// On any failure the previous snapshot stays in place and the error is
	/// returned.
	#[instrument(skip(self), fields(source = %self.source.describe()))]
	pub async fn load(&mut self) -> CampusResult<Arc<Catalog>> {
		let catalog = match self.fetch_catalog().await {
			Ok(catalog) => Arc::new(catalog),
			Err(e) => {
				error!("Failed to load locations: {}", e);
				return Err(e.into());
			}
		};

		info!("Loaded {} locations", catalog.len());
		self.catalog = catalog.clone();

		Ok(catalog)
	}

	async fn fetch_catalog(&self) -> Result<Catalog, LoadError> {
		let records = self.source.fetch().await?;
		Catalog::from_records(records, self.options)
	}

	/// The current snapshot
	pub fn catalog(&self) -> Arc<Catalog> {
		self.catalog.clone()
	}

	pub fn get_all(&self) -> &[Location] {
		self.catalog.all()
	}

	pub fn get_by_id(&self, id: &LocationId) -> Option<&Location> {
		self.catalog.get(id)
	}

	/// Like [`LocationStore::get_by_id`], but as an error for callers that want one
	pub fn require(&self, id: &LocationId) -> CampusResult<&Location> {
		self.get_by_id(id)
			.ok_or_else(|| CampusError::NotFound(id.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TWO: &str = r#"[
		{"id": "a", "name": "Alpha", "category": "academic", "lat": 33.2, "lng": -97.1},
		{"id": "b", "name": "Beta", "category": "dining", "lat": 33.3, "lng": -97.2}
	]"#;

	#[tokio::test]
	async fn test_load_and_lookup() {
		let mut store = LocationStore::new(Box::new(StaticSource::new(TWO)), SearchOptions::default());
		assert!(store.get_all().is_empty());

		let catalog = store.load().await.unwrap();
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.index().len(), 2);
		assert_eq!(store.get_by_id(&"b".into()).map(|l| l.name.as_str()), Some("Beta"));
		assert!(store.get_by_id(&"zzz".into()).is_none());
		assert!(matches!(
			store.require(&"zzz".into()),
			Err(CampusError::NotFound(_))
		));
	}

	#[test]
	fn test_duplicate_ids_rejected() {
		let records: Vec<LocationRecord> = serde_json::from_str(
			r#"[
				{"id": "a", "name": "Alpha", "category": "academic", "lat": 0, "lng": 0},
				{"id": "a", "name": "Again", "category": "dining", "lat": 0, "lng": 0}
			]"#,
		)
		.unwrap();

		let err = Catalog::from_records(records, SearchOptions::default())
			.err()
			.unwrap();
		assert!(matches!(err, LoadError::DuplicateId(id) if id.as_str() == "a"));
	}
}
