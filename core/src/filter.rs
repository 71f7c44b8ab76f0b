//! Visible-set computation from category checkboxes and free text
//!
//! Every change recomputes the whole visible set from the catalog snapshot;
//! campus datasets are small enough that incremental diffing buys nothing.

use crate::{
	domain::{Category, Location},
	store::Catalog,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// What an empty category selection means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCategoryPolicy {
	/// No boxes ticked hides every location
	ShowNone,
	/// No boxes ticked applies no category restriction
	ShowAll,
}

/// Clearing every checkbox shows the whole campus rather than an empty map
pub const DEFAULT_EMPTY_CATEGORY_POLICY: EmptyCategoryPolicy = EmptyCategoryPolicy::ShowAll;

impl Default for EmptyCategoryPolicy {
	fn default() -> Self {
		DEFAULT_EMPTY_CATEGORY_POLICY
	}
}

/// How free text narrows the visible set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
	/// Case-insensitive substring of name or description
	#[default]
	Substring,
	/// Membership in the fuzzy search results
	Fuzzy,
}

/// The user's current filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	pub categories: BTreeSet<Category>,
	pub text: String,
}

impl FilterState {
	/// Every known category ticked, no text
	pub fn all_categories() -> Self {
		Self {
			categories: Category::iter().collect(),
			text: String::new(),
		}
	}

	/// Tick or untick one category; returns whether anything changed
	pub fn set_category(&mut self, category: Category, enabled: bool) -> bool {
		if enabled {
			self.categories.insert(category)
		} else {
			self.categories.remove(&category)
		}
	}
}

/// Computes which locations are visible for a [`FilterState`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterEngine {
	pub mode: FilterMode,
	pub empty_categories: EmptyCategoryPolicy,
}

impl FilterEngine {
	pub fn new(mode: FilterMode, empty_categories: EmptyCategoryPolicy) -> Self {
		Self {
			mode,
			empty_categories,
		}
	}

	/// The visible locations.
	///
	/// Substring mode (and any mode with no text) keeps dataset order; fuzzy
	/// mode keeps the search ranking.
	pub fn apply<'a>(&self, catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Location> {
		let text = state.text.trim().to_lowercase();

		if text.is_empty() {
			return catalog
				.all()
				.iter()
				.filter(|loc| self.category_visible(loc.category, &state.categories))
				.collect();
		}

		match self.mode {
			FilterMode::Substring => catalog
				.all()
				.iter()
				.filter(|loc| self.category_visible(loc.category, &state.categories))
				.filter(|loc| contains_text(loc, &text))
				.collect(),
			FilterMode::Fuzzy => catalog
				.index()
				.search(&text, 0)
				.into_iter()
				.map(|hit| hit.location)
				.filter(|loc| self.category_visible(loc.category, &state.categories))
				.collect(),
		}
	}

	fn category_visible(&self, category: Category, active: &BTreeSet<Category>) -> bool {
		if active.is_empty() {
			return self.empty_categories == EmptyCategoryPolicy::ShowAll;
		}
		active.contains(&category)
	}
}

/// `text` must already be lowercased
fn contains_text(location: &Location, text: &str) -> bool {
	location.name.to_lowercase().contains(text)
		|| location
			.description
			.as_ref()
			.is_some_and(|d| d.to_lowercase().contains(text))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		domain::{Coordinates, FloorPlan, LocationId},
		search::SearchOptions,
	};
	use pretty_assertions::assert_eq;

	fn loc(id: &str, name: &str, category: Category, description: Option<&str>) -> Location {
		Location {
			id: LocationId::new(id),
			name: name.to_string(),
			category,
			description: description.map(str::to_string),
			position: Coordinates::new(33.21, -97.15),
			floor_plan: FloorPlan::NoFloorPlan,
		}
	}

	fn catalog() -> Catalog {
		Catalog::new(
			vec![
				loc("wl", "Willis Library", Category::Library, Some("Quiet study floors")),
				loc("uu", "University Union", Category::Dining, Some("Food court")),
				loc("gab", "General Academic Building", Category::Academic, None),
				loc("ci", "Crumley Hall", Category::Housing, Some("Residence hall with dining")),
				loc("lot20", "Lot 20", Category::Parking, None),
			],
			SearchOptions::default(),
		)
		.unwrap()
	}

	fn ids(locations: &[&Location]) -> Vec<String> {
		locations.iter().map(|l| l.id.to_string()).collect()
	}

	fn state(categories: &[Category], text: &str) -> FilterState {
		FilterState {
			categories: categories.iter().copied().collect(),
			text: text.to_string(),
		}
	}

	#[test]
	fn test_category_subset_keeps_order() {
		let catalog = catalog();
		let engine = FilterEngine::default();

		let visible = engine.apply(&catalog, &state(&[Category::Parking, Category::Library], ""));
		assert_eq!(ids(&visible), vec!["wl", "lot20"]);
	}

	#[test]
	fn test_empty_selection_show_all() {
		let catalog = catalog();
		let engine = FilterEngine::new(FilterMode::Substring, EmptyCategoryPolicy::ShowAll);
		assert_eq!(engine.apply(&catalog, &state(&[], "")).len(), 5);
	}

	#[test]
	fn test_empty_selection_show_none() {
		let catalog = catalog();
		let engine = FilterEngine::new(FilterMode::Substring, EmptyCategoryPolicy::ShowNone);
		assert!(engine.apply(&catalog, &state(&[], "")).is_empty());
		assert!(engine.apply(&catalog, &state(&[], "library")).is_empty());
	}

	#[test]
	fn test_default_policy_is_named_constant() {
		assert_eq!(EmptyCategoryPolicy::default(), DEFAULT_EMPTY_CATEGORY_POLICY);
		assert_eq!(FilterEngine::default().empty_categories, DEFAULT_EMPTY_CATEGORY_POLICY);
	}

	#[test]
	fn test_substring_matches_name_or_description() {
		let catalog = catalog();
		let engine = FilterEngine::default();

		let visible = engine.apply(&catalog, &state(&[], "  DINING "));
		assert_eq!(ids(&visible), vec!["ci"]);

		let visible = engine.apply(&catalog, &state(&[], "hall"));
		assert_eq!(ids(&visible), vec!["ci"]);

		let visible = engine.apply(&catalog, &state(&[Category::Library], "union"));
		assert!(visible.is_empty());
	}

	#[test]
	fn test_substring_ignores_category_text() {
		// Category names are not part of the plain filter path
		let catalog = catalog();
		let visible = FilterEngine::default().apply(&catalog, &state(&[], "parking"));
		assert!(visible.is_empty());
	}

	#[test]
	fn test_fuzzy_mode_uses_search_ranking() {
		let catalog = catalog();
		let engine = FilterEngine::new(FilterMode::Fuzzy, EmptyCategoryPolicy::ShowAll);

		let visible = engine.apply(&catalog, &state(&[], "libary"));
		assert_eq!(ids(&visible), vec!["wl"]);

		let visible = engine.apply(&catalog, &state(&[], "parking"));
		assert_eq!(ids(&visible), vec!["lot20"]);

		let visible = engine.apply(&catalog, &state(&[Category::Dining], "libary"));
		assert!(visible.is_empty());
	}

	#[test]
	fn test_empty_catalog() {
		let catalog = Catalog::empty(SearchOptions::default());
		let engine = FilterEngine::new(FilterMode::Fuzzy, EmptyCategoryPolicy::ShowAll);
		assert!(engine.apply(&catalog, &state(&[], "anything")).is_empty());
		assert!(engine.apply(&catalog, &FilterState::all_categories()).is_empty());
	}

	#[test]
	fn test_set_category_reports_change() {
		let mut state = FilterState::default();
		assert!(state.set_category(Category::Dining, true));
		assert!(!state.set_category(Category::Dining, true));
		assert!(state.set_category(Category::Dining, false));
		assert!(state.categories.is_empty());
	}
}
