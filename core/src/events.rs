//! Event bus for observing session state changes

use crate::{domain::LocationId, filter::FilterMode};
use tokio::sync::broadcast;

/// Session-level events
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
	/// A new catalog snapshot replaced the previous one
	CatalogLoaded { count: usize },

	/// A load failed; the previous snapshot is still in place
	CatalogLoadFailed { reason: String },

	/// The visible set was recomputed
	VisibleSetChanged {
		count: usize,
		mode: FilterMode,
	},

	LocationFocused { id: LocationId },

	FocusCleared,

	/// The floor-plan viewer moved to a page (or opened on one)
	FloorPlanPage {
		id: LocationId,
		index: usize,
		total: usize,
	},

	FloorPlanClosed,

	/// A route overlay replaced any previous one
	RouteDisplayed {
		destination: LocationId,
		used_fallback: bool,
	},
}

/// Event bus for broadcasting events
pub struct EventBus {
	sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
	/// Create a new event bus with specified capacity
	pub fn new(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity);
		Self { sender }
	}

	/// Emit an event
	pub fn emit(&self, event: SessionEvent) {
		// Ignore send errors (no receivers)
		let _ = self.sender.send(event);
	}

	/// Subscribe to events
	pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
		self.sender.subscribe()
	}
}

impl Default for EventBus {
	fn default() -> Self {
		Self::new(256)
	}
}
