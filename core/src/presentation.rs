//! Presentation surfaces and the commands they dispatch back
//!
//! Rendering lives outside the core. Surfaces receive plain data plus a
//! [`Command`] value for every interactive element; when the user clicks a
//! marker or a list row, the host dispatches that command to the session
//! instead of calling back into core objects directly.

use crate::{
	domain::{Category, Coordinates, LocationId, PageRef},
	route::{RouteHandle, RouteSpec, RoutingService},
};

/// Message shown when no location is visible
pub const EMPTY_LIST_MESSAGE: &str = "No locations found.";

/// User intents, dispatched to [`crate::session::Session::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// The search box text changed
	SetSearchText(String),
	/// Enter pressed in the search box: filter, then focus the first result
	SubmitSearch,
	/// A category checkbox was toggled
	SetCategory { category: Category, enabled: bool },
	Focus(LocationId),
	ClearFocus,
	OpenFloorPlan,
	CloseFloorPlan,
	NextFloor,
	PrevFloor,
	/// "Get directions" for a location
	RequestDirections(LocationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// A map marker with its popup and click action
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
	pub position: Coordinates,
	pub label: String,
	pub popup: String,
	pub on_click: Command,
}

/// A row in the sidebar list
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
	pub id: LocationId,
	pub label: String,
	pub category: Category,
	pub on_click: Command,
}

pub trait MapSurface: Send {
	fn set_view(&mut self, center: Coordinates, zoom: u8);
	fn add_marker(&mut self, marker: Marker) -> MarkerHandle;
	fn remove_marker(&mut self, handle: MarkerHandle);
}

pub trait ListSurface: Send {
	fn render_items(&mut self, items: &[ListItem]);
	fn render_empty(&mut self, message: &str);
	/// Mark the row with this id active and every other row inactive
	fn set_active(&mut self, id: Option<&LocationId>);
	fn show_directions(&mut self, label: &str, command: Command);
	fn clear_directions(&mut self);
}

pub trait DocumentSurface: Send {
	fn show_page(&mut self, page: PageRef<'_>);
	/// The focused location has no floor plan
	fn show_unavailable(&mut self);
	fn close(&mut self);
}

/// Discards everything; for headless sessions
#[derive(Debug, Default)]
pub struct NullSurface {
	next_handle: u64,
}

impl MapSurface for NullSurface {
	fn set_view(&mut self, _center: Coordinates, _zoom: u8) {}

	fn add_marker(&mut self, _marker: Marker) -> MarkerHandle {
		self.next_handle += 1;
		MarkerHandle(self.next_handle)
	}

	fn remove_marker(&mut self, _handle: MarkerHandle) {}
}

impl ListSurface for NullSurface {
	fn render_items(&mut self, _items: &[ListItem]) {}
	fn render_empty(&mut self, _message: &str) {}
	fn set_active(&mut self, _id: Option<&LocationId>) {}
	fn show_directions(&mut self, _label: &str, _command: Command) {}
	fn clear_directions(&mut self) {}
}

impl DocumentSurface for NullSurface {
	fn show_page(&mut self, _page: PageRef<'_>) {}
	fn show_unavailable(&mut self) {}
	fn close(&mut self) {}
}

impl RoutingService for NullSurface {
	fn add_route(&mut self, _spec: &RouteSpec) -> RouteHandle {
		self.next_handle += 1;
		RouteHandle(self.next_handle)
	}

	fn remove_route(&mut self, _handle: RouteHandle) {}
}

/// The set of surfaces a session renders to
pub struct Presentation {
	pub map: Box<dyn MapSurface>,
	pub list: Box<dyn ListSurface>,
	pub document: Box<dyn DocumentSurface>,
	pub routing: Box<dyn RoutingService>,
}

impl Presentation {
	pub fn headless() -> Self {
		Self {
			map: Box::new(NullSurface::default()),
			list: Box::new(NullSurface::default()),
			document: Box::new(NullSurface::default()),
			routing: Box::new(NullSurface::default()),
		}
	}
}
