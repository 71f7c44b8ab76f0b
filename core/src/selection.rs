//! Single-location focus tracking

use crate::{
	domain::{Coordinates, Location, LocationId},
	store::Catalog,
};
use tracing::debug;

pub const DEFAULT_FOCUS_ZOOM: u8 = 17;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
	#[default]
	Idle,
	Focused(LocationId),
}

/// Effects the caller must apply after focus moves to a location
#[derive(Debug, Clone, PartialEq)]
pub struct FocusChange<'a> {
	pub location: &'a Location,
	/// The previously focused id, if focus moved away from another location
	pub previous: Option<LocationId>,
	pub center: Coordinates,
	pub zoom: u8,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
	state: Selection,
	focus_zoom: u8,
}

impl Default for SelectionController {
	fn default() -> Self {
		Self::new(DEFAULT_FOCUS_ZOOM)
	}
}

impl SelectionController {
	pub fn new(focus_zoom: u8) -> Self {
		Self {
			state: Selection::Idle,
			focus_zoom,
		}
	}

	pub fn state(&self) -> &Selection {
		&self.state
	}

	pub fn focused(&self) -> Option<&LocationId> {
		match &self.state {
			Selection::Idle => None,
			Selection::Focused(id) => Some(id),
		}
	}

	/// Focus `id`, replacing any prior focus.
	///
	/// Unknown ids leave the state untouched and return `None`.
	pub fn focus<'a>(&mut self, catalog: &'a Catalog, id: &LocationId) -> Option<FocusChange<'a>> {
		let Some(location) = catalog.get(id) else {
			debug!("Ignoring focus on unknown location {}", id);
			return None;
		};

		let previous = match std::mem::replace(&mut self.state, Selection::Focused(id.clone())) {
			Selection::Focused(prev) => Some(prev),
			Selection::Idle => None,
		};

		Some(FocusChange {
			location,
			previous,
			center: location.position,
			zoom: self.focus_zoom,
		})
	}

	/// Return to idle; returns whether anything was focused
	pub fn clear(&mut self) -> bool {
		matches!(
			std::mem::take(&mut self.state),
			Selection::Focused(_)
		)
	}

	/// Drop focus if it points at a location that no longer exists in `catalog`
	pub fn revalidate(&mut self, catalog: &Catalog) -> bool {
		match &self.state {
			Selection::Focused(id) if catalog.get(id).is_none() => {
				self.state = Selection::Idle;
				true
			}
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		domain::{Category, FloorPlan},
		search::SearchOptions,
	};

	fn catalog() -> Catalog {
		let loc = |id: &str, lat: f64| Location {
			id: LocationId::new(id),
			name: id.to_uppercase(),
			category: Category::Academic,
			description: None,
			position: Coordinates::new(lat, -97.15),
			floor_plan: FloorPlan::NoFloorPlan,
		};
		Catalog::new(vec![loc("a", 33.1), loc("b", 33.2)], SearchOptions::default()).unwrap()
	}

	#[test]
	fn test_focus_replaces_previous() {
		let catalog = catalog();
		let mut selection = SelectionController::default();

		let change = selection.focus(&catalog, &"a".into()).unwrap();
		assert_eq!(change.previous, None);
		assert_eq!(change.zoom, DEFAULT_FOCUS_ZOOM);
		assert_eq!(change.center, Coordinates::new(33.1, -97.15));

		let change = selection.focus(&catalog, &"b".into()).unwrap();
		assert_eq!(change.previous, Some("a".into()));
		assert_eq!(selection.state(), &Selection::Focused("b".into()));
	}

	#[test]
	fn test_unknown_id_is_silent_noop() {
		let catalog = catalog();
		let mut selection = SelectionController::default();
		selection.focus(&catalog, &"a".into());

		assert!(selection.focus(&catalog, &"missing".into()).is_none());
		assert_eq!(selection.focused(), Some(&"a".into()));
	}

	#[test]
	fn test_clear() {
		let catalog = catalog();
		let mut selection = SelectionController::new(18);
		assert!(!selection.clear());

		let change = selection.focus(&catalog, &"b".into()).unwrap();
		assert_eq!(change.zoom, 18);
		assert!(selection.clear());
		assert_eq!(selection.state(), &Selection::Idle);
	}

	#[test]
	fn test_revalidate_after_reload() {
		let catalog = catalog();
		let mut selection = SelectionController::default();
		selection.focus(&catalog, &"a".into());

		assert!(!selection.revalidate(&catalog));
		assert!(selection.revalidate(&Catalog::empty(SearchOptions::default())));
		assert_eq!(selection.focused(), None);
	}
}
