//! Shared fixtures and recording surfaces for integration tests

#![allow(dead_code)]

use campus_map_core::{
	domain::{Coordinates, LocationId, PageRef},
	presentation::{
		Command, DocumentSurface, ListItem, ListSurface, MapSurface, Marker, MarkerHandle,
		Presentation,
	},
	route::{RouteHandle, RouteSpec, RoutingService},
};
use std::sync::{Arc, Mutex};

/// Three locations: A and C share a category, C has a three-floor plan
pub const ABC_JSON: &str = r#"[
	{"id": "A", "name": "A", "category": "academic", "description": "Lecture hall",
	 "lat": 33.2100, "lng": -97.1500, "floorPlans": ["a1.pdf"]},
	{"id": "B", "name": "B", "category": "dining", "lat": 33.2110, "lng": -97.1510},
	{"id": "C", "name": "C", "category": "academic",
	 "lat": 33.2120, "lng": -97.1520, "floorMap": {"file": "c.pdf", "floors": 3}}
]"#;

/// Everything the surfaces were asked to display
#[derive(Debug, Default)]
pub struct Recorded {
	pub view: Option<(Coordinates, u8)>,
	pub markers: Vec<(MarkerHandle, Marker)>,
	pub list: Vec<ListItem>,
	pub empty_message: Option<String>,
	pub active: Option<LocationId>,
	pub directions: Option<(String, Command)>,
	pub page: Option<(String, u32)>,
	pub unavailable: bool,
	pub document_closed: bool,
	pub routes: Vec<(RouteHandle, RouteSpec)>,
	pub removed_routes: Vec<RouteHandle>,
	next_handle: u64,
}

impl Recorded {
	fn handle(&mut self) -> u64 {
		self.next_handle += 1;
		self.next_handle
	}

	pub fn list_ids(&self) -> Vec<String> {
		self.list.iter().map(|i| i.id.to_string()).collect()
	}

	pub fn marker_labels(&self) -> Vec<String> {
		self.markers.iter().map(|(_, m)| m.label.clone()).collect()
	}
}

#[derive(Clone, Default)]
pub struct Recorder(pub Arc<Mutex<Recorded>>);

impl Recorder {
	pub fn presentation(&self) -> Presentation {
		Presentation {
			map: Box::new(self.clone()),
			list: Box::new(self.clone()),
			document: Box::new(self.clone()),
			routing: Box::new(self.clone()),
		}
	}

	pub fn get(&self) -> std::sync::MutexGuard<'_, Recorded> {
		self.0.lock().unwrap()
	}
}

impl MapSurface for Recorder {
	fn set_view(&mut self, center: Coordinates, zoom: u8) {
		self.get().view = Some((center, zoom));
	}

	fn add_marker(&mut self, marker: Marker) -> MarkerHandle {
		let mut rec = self.get();
		let handle = MarkerHandle(rec.handle());
		rec.markers.push((handle, marker));
		handle
	}

	fn remove_marker(&mut self, handle: MarkerHandle) {
		self.get().markers.retain(|(h, _)| *h != handle);
	}
}

impl ListSurface for Recorder {
	fn render_items(&mut self, items: &[ListItem]) {
		let mut rec = self.get();
		rec.list = items.to_vec();
		rec.empty_message = None;
	}

	fn render_empty(&mut self, message: &str) {
		let mut rec = self.get();
		rec.list.clear();
		rec.empty_message = Some(message.to_string());
	}

	fn set_active(&mut self, id: Option<&LocationId>) {
		self.get().active = id.cloned();
	}

	fn show_directions(&mut self, label: &str, command: Command) {
		self.get().directions = Some((label.to_string(), command));
	}

	fn clear_directions(&mut self) {
		self.get().directions = None;
	}
}

impl DocumentSurface for Recorder {
	fn show_page(&mut self, page: PageRef<'_>) {
		let mut rec = self.get();
		rec.page = Some((page.file.to_string(), page.page));
		rec.unavailable = false;
		rec.document_closed = false;
	}

	fn show_unavailable(&mut self) {
		let mut rec = self.get();
		rec.page = None;
		rec.unavailable = true;
		rec.document_closed = false;
	}

	fn close(&mut self) {
		let mut rec = self.get();
		rec.page = None;
		rec.unavailable = false;
		rec.document_closed = true;
	}
}

impl RoutingService for Recorder {
	fn add_route(&mut self, spec: &RouteSpec) -> RouteHandle {
		let mut rec = self.get();
		let handle = RouteHandle(rec.handle());
		rec.routes.push((handle, spec.clone()));
		handle
	}

	fn remove_route(&mut self, handle: RouteHandle) {
		let mut rec = self.get();
		rec.routes.retain(|(h, _)| *h != handle);
		rec.removed_routes.push(handle);
	}
}
