//! Session - the single owner of all widget state
//!
//! The session ties the catalog, filter, selection, floor-plan viewer and
//! route overlay together and pushes every change out to the presentation
//! surfaces. All mutation goes through `&mut self` on one event-handling
//! thread; the only suspension points are the dataset load and the optional
//! geolocation lookup for directions.

use crate::{
	config::{CampusConfig, MapConfig, RouteConfig},
	domain::{Category, Location, LocationId},
	error::CampusResult,
	events::{EventBus, SessionEvent},
	filter::{FilterEngine, FilterState},
	floor_plan::{FloorPlanViewer, ViewerState},
	presentation::{Command, ListItem, Marker, MarkerHandle, Presentation, EMPTY_LIST_MESSAGE},
	route::{resolve_origin, Geolocator, RouteController, RouteOrigin, RouteRequest, RouteSpec},
	selection::{Selection, SelectionController},
	store::{Catalog, LocationSource, LocationStore},
};
use std::{collections::BTreeSet, sync::Arc};
use tracing::{debug, info, instrument, warn};

pub struct Session {
	store: LocationStore,
	catalog: Arc<Catalog>,
	engine: FilterEngine,
	filter: FilterState,
	visible: Vec<LocationId>,
	selection: SelectionController,
	viewer: FloorPlanViewer,
	routes: RouteController,
	markers: Vec<MarkerHandle>,
	presentation: Presentation,
	events: Arc<EventBus>,
	map: MapConfig,
	route: RouteConfig,
}

impl Session {
	/// Create a session with an empty catalog and every category ticked
	pub fn new(
		config: &CampusConfig,
		source: Box<dyn LocationSource>,
		presentation: Presentation,
	) -> Self {
		let store = LocationStore::new(source, config.search);
		let catalog = store.catalog();

		let mut session = Self {
			store,
			catalog,
			engine: config.filter,
			filter: FilterState::all_categories(),
			visible: Vec::new(),
			selection: SelectionController::new(config.map.focus_zoom),
			viewer: FloorPlanViewer::new(),
			routes: RouteController::new(),
			markers: Vec::new(),
			presentation,
			events: Arc::new(EventBus::default()),
			map: config.map.clone(),
			route: config.route.clone(),
		};

		session
			.presentation
			.map
			.set_view(session.map.center, session.map.default_zoom);
		session.refresh();
		session
	}

	/// Create a session reading from the configured data source
	pub fn from_config(config: &CampusConfig, presentation: Presentation) -> Self {
		Self::new(config, config.data_source.clone().into_source(), presentation)
	}

	pub fn events(&self) -> Arc<EventBus> {
		self.events.clone()
	}

	/// Load (or reload) the dataset and re-render.
	///
	/// A failure keeps the previous snapshot, re-renders it (the empty state
	/// on first load) and is returned so the caller can report it.
	#[instrument(skip(self))]
	pub async fn load(&mut self) -> CampusResult<usize> {
		match self.store.load().await {
			Ok(catalog) => {
				let count = catalog.len();
				self.catalog = catalog;

				if self.selection.revalidate(&self.catalog) {
					info!("Focused location disappeared after reload");
					self.close_viewer();
				}
				self.rebind_viewer();

				self.refresh();
				self.events.emit(SessionEvent::CatalogLoaded { count });
				Ok(count)
			}
			Err(e) => {
				self.refresh();
				self.events.emit(SessionEvent::CatalogLoadFailed {
					reason: e.to_string(),
				});
				Err(e)
			}
		}
	}

	/// Apply a user command.
	///
	/// Returns a [`RouteRequest`] for [`Command::RequestDirections`] on a known
	/// location; resolve an origin for it and pass both to
	/// [`Session::show_route`].
	pub fn dispatch(&mut self, command: Command) -> Option<RouteRequest> {
		debug!("Dispatching {:?}", command);

		match command {
			Command::SetSearchText(text) => {
				self.filter.text = text;
				self.refresh();
			}
			Command::SubmitSearch => {
				self.refresh();
				if let Some(first) = self.visible.first().cloned() {
					self.focus(&first);
				}
			}
			Command::SetCategory { category, enabled } => {
				if self.filter.set_category(category, enabled) {
					self.refresh();
				}
			}
			Command::Focus(id) => {
				self.focus(&id);
			}
			Command::ClearFocus => self.clear_focus(),
			Command::OpenFloorPlan => self.open_viewer(),
			Command::CloseFloorPlan => self.close_viewer(),
			Command::NextFloor => {
				if self.viewer.next() {
					self.render_viewer();
				}
			}
			Command::PrevFloor => {
				if self.viewer.prev() {
					self.render_viewer();
				}
			}
			Command::RequestDirections(id) => {
				return self.catalog.get(&id).map(|location| RouteRequest {
					destination_id: location.id.clone(),
					destination_name: location.name.clone(),
					destination: location.position,
				});
			}
		}

		None
	}

	/// Replace the whole category selection at once
	pub fn set_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
		self.filter.categories = categories.into_iter().collect::<BTreeSet<_>>();
		self.refresh();
	}

	/// Draw the route for a request, replacing any overlay already shown
	pub fn show_route(&mut self, request: RouteRequest, origin: RouteOrigin) {
		let spec = RouteSpec {
			destination_id: request.destination_id.clone(),
			from: origin.coordinates(),
			to: request.destination,
			mode: self.route.travel_mode,
		};

		self.routes
			.show(self.presentation.routing.as_mut(), spec);

		info!(
			"Showing {} route to {} from {}",
			self.route.travel_mode,
			request.destination_name,
			origin.coordinates()
		);
		self.events.emit(SessionEvent::RouteDisplayed {
			destination: request.destination_id,
			used_fallback: matches!(origin, RouteOrigin::Fallback(_)),
		});
	}

	/// Request directions and wait for the origin in one go.
	///
	/// Returns `None` for unknown ids.
	pub async fn directions_to(
		&mut self,
		id: &LocationId,
		geolocator: Option<&dyn Geolocator>,
	) -> Option<RouteOrigin> {
		let request = self.dispatch(Command::RequestDirections(id.clone()))?;
		let origin = resolve_origin(geolocator, self.route.fallback_origin).await;
		self.show_route(request, origin);
		Some(origin)
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn filter_state(&self) -> &FilterState {
		&self.filter
	}

	pub fn visible_ids(&self) -> &[LocationId] {
		&self.visible
	}

	pub fn visible(&self) -> Vec<&Location> {
		self.visible
			.iter()
			.filter_map(|id| self.catalog.get(id))
			.collect()
	}

	pub fn selection(&self) -> &Selection {
		self.selection.state()
	}

	pub fn focused(&self) -> Option<&Location> {
		self.selection
			.focused()
			.and_then(|id| self.catalog.get(id))
	}

	pub fn viewer(&self) -> &FloorPlanViewer {
		&self.viewer
	}

	pub fn active_route(&self) -> Option<&RouteSpec> {
		self.routes.active()
	}

	fn refresh(&mut self) {
		let catalog = self.catalog.clone();
		let visible = self.engine.apply(&catalog, &self.filter);

		for handle in self.markers.drain(..) {
			self.presentation.map.remove_marker(handle);
		}
		for location in &visible {
			let handle = self.presentation.map.add_marker(Marker {
				position: location.position,
				label: location.name.clone(),
				popup: location.popup_text(),
				on_click: Command::Focus(location.id.clone()),
			});
			self.markers.push(handle);
		}

		let list = &mut self.presentation.list;
		list.clear_directions();
		if visible.is_empty() {
			list.render_empty(EMPTY_LIST_MESSAGE);
		} else {
			let items = visible
				.iter()
				.map(|location| ListItem {
					id: location.id.clone(),
					label: location.name.clone(),
					category: location.category,
					on_click: Command::Focus(location.id.clone()),
				})
				.collect::<Vec<_>>();
			list.render_items(&items);

			let focused = self
				.selection
				.focused()
				.filter(|id| visible.iter().any(|l| &l.id == *id));
			list.set_active(focused);
		}

		self.visible = visible.iter().map(|l| l.id.clone()).collect();
		debug!("{} of {} locations visible", self.visible.len(), catalog.len());
		self.events.emit(SessionEvent::VisibleSetChanged {
			count: self.visible.len(),
			mode: self.engine.mode,
		});
	}

	fn focus(&mut self, id: &LocationId) -> bool {
		let catalog = self.catalog.clone();
		let Some(change) = self.selection.focus(&catalog, id) else {
			return false;
		};
		let location = change.location;
		if let Some(previous) = &change.previous {
			debug!("Focus moved from {} to {}", previous, location.id);
		}

		self.presentation.map.set_view(change.center, change.zoom);
		self.presentation.list.set_active(Some(&location.id));
		self.presentation.list.show_directions(
			&format!("Get Directions to {}", location.name),
			Command::RequestDirections(location.id.clone()),
		);

		if self.viewer.is_open() {
			self.viewer.open(location);
			self.render_viewer();
		}

		self.events.emit(SessionEvent::LocationFocused {
			id: location.id.clone(),
		});
		true
	}

	fn clear_focus(&mut self) {
		if !self.selection.clear() {
			return;
		}

		self.presentation.list.set_active(None);
		self.presentation.list.clear_directions();
		self.close_viewer();
		self.events.emit(SessionEvent::FocusCleared);
	}

	fn open_viewer(&mut self) {
		let Some(location) = self.focused() else {
			warn!("Floor plan requested with nothing focused");
			return;
		};
		let location = location.clone();

		self.viewer.open(&location);
		self.render_viewer();
	}

	/// Point an open viewer at the reloaded floor data of its location
	fn rebind_viewer(&mut self) {
		let catalog = self.catalog.clone();
		let Some(id) = self.viewer.location() else {
			return;
		};

		match catalog.get(id) {
			Some(location) => {
				self.viewer.refresh(location);
				self.render_viewer();
			}
			None => self.close_viewer(),
		}
	}

	fn close_viewer(&mut self) {
		if !self.viewer.is_open() {
			return;
		}

		self.viewer.close();
		self.presentation.document.close();
		self.events.emit(SessionEvent::FloorPlanClosed);
	}

	fn render_viewer(&mut self) {
		match self.viewer.state() {
			ViewerState::Closed => self.presentation.document.close(),
			ViewerState::NoFloorPlan => self.presentation.document.show_unavailable(),
			ViewerState::Page { page, index, total } => {
				self.presentation.document.show_page(page);
				if let Some(id) = self.viewer.location() {
					self.events.emit(SessionEvent::FloorPlanPage {
						id: id.clone(),
						index,
						total,
					});
				}
			}
		}
	}
}
