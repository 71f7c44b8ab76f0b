//! Paged floor-plan viewer state
//!
//! The viewer is bound to one location at a time. Paging past either end is a
//! no-op: it never errors and never wraps around.

use crate::domain::{FloorPlan, Location, LocationId, PageRef};

/// What the document surface should currently display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState<'a> {
	/// The viewer is not bound to any location
	Closed,
	/// Bound to a location that has no floor plan
	NoFloorPlan,
	Page {
		page: PageRef<'a>,
		index: usize,
		total: usize,
	},
}

#[derive(Debug, Clone)]
struct Binding {
	location: LocationId,
	plan: FloorPlan,
}

#[derive(Debug, Clone, Default)]
pub struct FloorPlanViewer {
	binding: Option<Binding>,
	page_index: usize,
}

impl FloorPlanViewer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind to a location and start at the first page
	pub fn open(&mut self, location: &Location) {
		self.binding = Some(Binding {
			location: location.id.clone(),
			plan: location.floor_plan.clone(),
		});
		self.page_index = 0;
	}

	/// Swap in reloaded floor data for the bound location, keeping the page
	/// if it still exists and clamping to the last page otherwise.
	///
	/// Returns `false` when the viewer is closed or bound to another location.
	pub fn refresh(&mut self, location: &Location) -> bool {
		let Some(binding) = self.binding.as_mut().filter(|b| b.location == location.id) else {
			return false;
		};

		binding.plan = location.floor_plan.clone();
		self.page_index = self.page_index.min(self.total_pages().saturating_sub(1));
		true
	}

	pub fn close(&mut self) {
		self.binding = None;
		self.page_index = 0;
	}

	pub fn is_open(&self) -> bool {
		self.binding.is_some()
	}

	pub fn location(&self) -> Option<&LocationId> {
		self.binding.as_ref().map(|b| &b.location)
	}

	pub fn page_index(&self) -> usize {
		self.page_index
	}

	pub fn total_pages(&self) -> usize {
		self.binding.as_ref().map_or(0, |b| b.plan.page_count())
	}

	/// Advance one page; returns `false` if already on the last page
	pub fn next(&mut self) -> bool {
		if self.page_index + 1 < self.total_pages() {
			self.page_index += 1;
			true
		} else {
			false
		}
	}

	/// Go back one page; returns `false` if already on the first page
	pub fn prev(&mut self) -> bool {
		if self.page_index > 0 {
			self.page_index -= 1;
			true
		} else {
			false
		}
	}

	pub fn current_page(&self) -> Option<PageRef<'_>> {
		self.binding
			.as_ref()
			.and_then(|b| b.plan.page_ref(self.page_index))
	}

	pub fn state(&self) -> ViewerState<'_> {
		match &self.binding {
			None => ViewerState::Closed,
			Some(binding) => match binding.plan.page_ref(self.page_index) {
				Some(page) => ViewerState::Page {
					page,
					index: self.page_index,
					total: binding.plan.page_count(),
				},
				None => ViewerState::NoFloorPlan,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::domain::{Category, Coordinates};

	fn building(plan: FloorPlan) -> Location {
		Location {
			id: LocationId::new("gab"),
			name: "General Academic Building".into(),
			category: Category::Academic,
			description: None,
			position: Coordinates::new(33.2, -97.1),
			floor_plan: plan,
		}
	}

	fn three_floors() -> Location {
		building(FloorPlan::SinglePdfPaged {
			file: "gab.pdf".into(),
			pages: 3,
		})
	}

	#[test]
	fn test_paging_clamps_at_both_ends() {
		let mut viewer = FloorPlanViewer::new();
		viewer.open(&three_floors());

		assert!(!viewer.prev());
		assert_eq!(viewer.page_index(), 0);

		assert!(viewer.next());
		assert!(viewer.next());
		assert_eq!(viewer.page_index(), 2);
		assert!(!viewer.next());
		assert_eq!(viewer.page_index(), 2);
		assert_eq!(viewer.current_page(), Some(PageRef { file: "gab.pdf", page: 3 }));

		assert!(viewer.prev());
		assert_eq!(viewer.page_index(), 1);
	}

	#[test]
	fn test_no_floor_plan_is_a_state() {
		let mut viewer = FloorPlanViewer::new();
		assert_eq!(viewer.state(), ViewerState::Closed);

		viewer.open(&building(FloorPlan::NoFloorPlan));
		assert_eq!(viewer.state(), ViewerState::NoFloorPlan);
		assert_eq!(viewer.total_pages(), 0);
		assert!(!viewer.next());
		assert!(!viewer.prev());
	}

	#[test]
	fn test_reopen_resets_page() {
		let mut viewer = FloorPlanViewer::new();
		viewer.open(&three_floors());
		viewer.next();

		viewer.close();
		assert!(!viewer.is_open());
		assert_eq!(viewer.total_pages(), 0);

		viewer.open(&three_floors());
		assert_eq!(viewer.page_index(), 0);
		assert_eq!(
			viewer.state(),
			ViewerState::Page {
				page: PageRef { file: "gab.pdf", page: 1 },
				index: 0,
				total: 3
			}
		);
	}

	#[test]
	fn test_refresh_clamps_to_new_floor_count() {
		let mut viewer = FloorPlanViewer::new();
		viewer.open(&three_floors());
		viewer.next();
		viewer.next();

		let single = building(FloorPlan::SinglePdfPaged {
			file: "gab-2025.pdf".into(),
			pages: 1,
		});
		assert!(viewer.refresh(&single));
		assert_eq!(viewer.total_pages(), 1);
		assert_eq!(viewer.page_index(), 0);
		assert_eq!(viewer.current_page(), Some(PageRef { file: "gab-2025.pdf", page: 1 }));

		let mut other = three_floors();
		other.id = LocationId::new("wl");
		assert!(!viewer.refresh(&other));
		assert_eq!(viewer.total_pages(), 1);
	}

	#[test]
	fn test_legacy_list_pages() {
		let mut viewer = FloorPlanViewer::new();
		viewer.open(&building(FloorPlan::LegacyPdfList {
			files: vec!["f1.pdf".into(), "f2.pdf".into()],
		}));
		viewer.next();
		assert_eq!(viewer.current_page(), Some(PageRef { file: "f2.pdf", page: 1 }));
		assert!(!viewer.next());
	}
}
