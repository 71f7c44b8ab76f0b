//! Fuzzy search over the loaded locations
//!
//! The index is built once per catalog snapshot and never updated in place.
//! Each hit is ranked by its match distance (`1 - similarity`, lower is
//! better); ties keep the original dataset order.
//!
//! A field only counts toward a hit when its own similarity clears the
//! threshold. Its distance is then sharpened by the field weight as
//! `d^(1 + w)` (with `w` normalised so the heaviest field is `1.0`), and the
//! hit takes the best of its matched fields. Sharpening can only shrink a
//! distance, so every hit scores at least the threshold and lowering the
//! threshold never drops a hit.

mod score;

use crate::domain::Location;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, ops::Range, sync::Arc};
use strum::Display;
use tracing::debug;

pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_LIMIT: usize = 10;

/// Fields the index matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SearchField {
	Name,
	Category,
	Description,
}

/// Relative importance of each field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
	pub name: f64,
	pub category: f64,
	pub description: f64,
}

impl Default for FieldWeights {
	fn default() -> Self {
		Self {
			name: 1.0,
			category: 0.6,
			description: 0.3,
		}
	}
}

impl FieldWeights {
	fn normalized(&self) -> [(SearchField, f64); 3] {
		let max = self.name.max(self.category).max(self.description);
		let norm = |w: f64| if max > 0.0 { (w / max).max(0.0) } else { 0.0 };

		[
			(SearchField::Name, norm(self.name)),
			(SearchField::Category, norm(self.category)),
			(SearchField::Description, norm(self.description)),
		]
	}
}

/// Index-build and query settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
	/// Minimum similarity (`0.0..=1.0`) a field needs to count as a match
	pub threshold: f64,
	/// Default maximum number of hits; `0` means unlimited
	pub limit: usize,
	pub weights: FieldWeights,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			threshold: DEFAULT_THRESHOLD,
			limit: DEFAULT_LIMIT,
			weights: FieldWeights::default(),
		}
	}
}

/// A single field that matched a query
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
	pub field: SearchField,
	pub similarity: f64,
	/// Char range within the (lowercased) field text
	pub span: Range<usize>,
}

/// A ranked search result
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
	pub location: &'a Location,
	/// Position of the location in the dataset
	pub position: usize,
	/// Similarity in `[threshold, 1.0]`
	pub score: f64,
	/// `1.0 - score`; hits are ordered by this, ascending
	pub distance: f64,
	pub matches: Vec<FieldMatch>,
}

#[derive(Debug)]
struct IndexedEntry {
	name: String,
	category: &'static str,
	description: Option<String>,
}

impl IndexedEntry {
	fn field(&self, field: SearchField) -> Option<&str> {
		match field {
			SearchField::Name => Some(&self.name),
			SearchField::Category => Some(self.category),
			SearchField::Description => self.description.as_deref(),
		}
	}
}

/// Fuzzy index over one catalog snapshot
#[derive(Debug)]
pub struct SearchIndex {
	locations: Arc<[Location]>,
	entries: Vec<IndexedEntry>,
	weights: [(SearchField, f64); 3],
	options: SearchOptions,
}

impl SearchIndex {
	pub fn build(locations: Arc<[Location]>, options: SearchOptions) -> Self {
		let entries = locations
			.iter()
			.map(|loc| IndexedEntry {
				name: loc.name.to_lowercase(),
				category: loc.category.as_str(),
				description: loc.description.as_ref().map(|d| d.to_lowercase()),
			})
			.collect::<Vec<_>>();

		debug!(
			"Built search index over {} locations (threshold {})",
			entries.len(),
			options.threshold
		);

		Self {
			weights: options.weights.normalized(),
			locations,
			entries,
			options,
		}
	}

	pub fn options(&self) -> &SearchOptions {
		&self.options
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Ranked hits at the index threshold
	pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
		self.search_with_threshold(query, self.options.threshold, limit)
	}

	/// Ranked hits at an explicit threshold; `limit == 0` returns every hit.
	///
	/// A non-finite threshold falls back to the index default.
	pub fn search_with_threshold(
		&self,
		query: &str,
		threshold: f64,
		limit: usize,
	) -> Vec<SearchHit<'_>> {
		let query = query.trim().to_lowercase();
		if query.is_empty() {
			return Vec::new();
		}
		let threshold = if threshold.is_finite() {
			threshold.clamp(0.0, 1.0)
		} else {
			self.options.threshold
		};

		let mut hits = self
			.entries
			.iter()
			.enumerate()
			.filter_map(|(position, entry)| self.score_entry(&query, threshold, position, entry))
			.collect::<Vec<_>>();

		hits.sort_by(|a, b| {
			a.distance
				.partial_cmp(&b.distance)
				.unwrap_or(Ordering::Equal)
				.then(a.position.cmp(&b.position))
		});

		if limit > 0 {
			hits.truncate(limit);
		}

		debug!("Search for {:?} returned {} hits", query, hits.len());
		hits
	}

	fn score_entry<'a>(
		&'a self,
		query: &str,
		threshold: f64,
		position: usize,
		entry: &IndexedEntry,
	) -> Option<SearchHit<'a>> {
		let mut matches = Vec::new();
		let mut distance = f64::INFINITY;

		for &(field, weight) in &self.weights {
			let Some(text) = entry.field(field) else {
				continue;
			};
			let Some((similarity, span)) = score::field_similarity(query, text) else {
				continue;
			};
			if similarity < threshold {
				continue;
			}

			let weighted = (1.0 - similarity).powf(1.0 + weight);
			distance = distance.min(weighted);
			matches.push(FieldMatch {
				field,
				similarity,
				span,
			});
		}

		if matches.is_empty() {
			return None;
		}

		Some(SearchHit {
			location: &self.locations[position],
			position,
			score: 1.0 - distance,
			distance,
			matches,
		})
	}
}
