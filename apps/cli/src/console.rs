//! Terminal surfaces for interactive sessions

use campus_map_core::{
	presentation::{
		Command, DocumentSurface, ListItem, ListSurface, MapSurface, Marker, MarkerHandle,
		Presentation,
	},
	route::{RouteHandle, RouteSpec, RoutingService, StraightLineRouter},
	Coordinates, LocationId, PageRef,
};
use colored::Colorize;
use tracing::trace;

use crate::util::args::format_duration;

pub fn presentation() -> Presentation {
	Presentation {
		map: Box::new(ConsoleMap::default()),
		list: Box::new(ConsoleList::default()),
		document: Box::new(ConsoleDocument),
		routing: Box::new(ConsoleRouting::default()),
	}
}

#[derive(Default)]
struct ConsoleMap {
	next_handle: u64,
}

impl MapSurface for ConsoleMap {
	fn set_view(&mut self, center: Coordinates, zoom: u8) {
		println!("{} {} (zoom {})", "map".dimmed(), center, zoom);
	}

	fn add_marker(&mut self, marker: Marker) -> MarkerHandle {
		self.next_handle += 1;
		trace!("Marker {} at {}", marker.label, marker.position);
		MarkerHandle(self.next_handle)
	}

	fn remove_marker(&mut self, handle: MarkerHandle) {
		trace!("Marker {:?} removed", handle);
	}
}

#[derive(Default)]
struct ConsoleList {
	items: Vec<ListItem>,
}

impl ListSurface for ConsoleList {
	fn render_items(&mut self, items: &[ListItem]) {
		self.items = items.to_vec();
		for item in items {
			println!("  {} {}", item.id.to_string().dimmed(), item.label);
		}
	}

	fn render_empty(&mut self, message: &str) {
		self.items.clear();
		println!("  {}", message.yellow());
	}

	fn set_active(&mut self, id: Option<&LocationId>) {
		let Some(item) = id.and_then(|id| self.items.iter().find(|i| &i.id == id)) else {
			return;
		};
		println!("{} {} ({})", "▶".green(), item.label.bold(), item.category);
	}

	fn show_directions(&mut self, label: &str, command: Command) {
		if let Command::RequestDirections(id) = command {
			println!("  {} (route {})", label.cyan(), id);
		}
	}

	fn clear_directions(&mut self) {}
}

struct ConsoleDocument;

impl DocumentSurface for ConsoleDocument {
	fn show_page(&mut self, page: PageRef<'_>) {
		println!("{} {} page {}", "floor plan".dimmed(), page.file, page.page);
	}

	fn show_unavailable(&mut self) {
		println!("{}", "No floor plan available".yellow());
	}

	fn close(&mut self) {
		println!("{}", "floor plan closed".dimmed());
	}
}

#[derive(Default)]
struct ConsoleRouting {
	router: StraightLineRouter,
}

impl RoutingService for ConsoleRouting {
	fn add_route(&mut self, spec: &RouteSpec) -> RouteHandle {
		let handle = self.router.add_route(spec);
		let (distance, duration) = StraightLineRouter::estimate(spec);
		println!(
			"{} {} -> {}: {:.0} m, about {} {}",
			"route".green(),
			spec.from,
			spec.to,
			distance,
			format_duration(duration),
			spec.mode
		);
		handle
	}

	fn remove_route(&mut self, handle: RouteHandle) {
		self.router.remove_route(handle);
	}
}
