//! Route display
//!
//! The routing engine and the device geolocation are external services. This
//! module decides the route origin, keeps at most one overlay on screen and
//! ships a simple straight-line router for headless use.

use crate::{
	domain::{Coordinates, LocationId},
	error::GeolocationError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, instrument, warn};

/// Fallback origin when the device position is unavailable (campus centre)
pub const DEFAULT_FALLBACK_ORIGIN: Coordinates = Coordinates::new(33.2075, -97.1526);

const WALKING_SPEED_MPS: f64 = 1.4;
const DRIVING_SPEED_MPS: f64 = 8.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TravelMode {
	#[default]
	Walking,
	Driving,
}

impl TravelMode {
	fn speed_mps(&self) -> f64 {
		match self {
			TravelMode::Walking => WALKING_SPEED_MPS,
			TravelMode::Driving => DRIVING_SPEED_MPS,
		}
	}
}

/// Device position provider
#[async_trait]
pub trait Geolocator: Send + Sync {
	async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// A geolocator that always answers with the same result
pub struct FixedGeolocator(pub Result<Coordinates, GeolocationError>);

#[async_trait]
impl Geolocator for FixedGeolocator {
	async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
		self.0
	}
}

/// Where a route starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteOrigin {
	Device(Coordinates),
	Fallback(Coordinates),
}

impl RouteOrigin {
	pub fn coordinates(&self) -> Coordinates {
		match self {
			RouteOrigin::Device(c) | RouteOrigin::Fallback(c) => *c,
		}
	}
}

/// Ask the geolocator for a start point, falling back silently on failure
#[instrument(skip(geolocator))]
pub async fn resolve_origin(
	geolocator: Option<&dyn Geolocator>,
	fallback: Coordinates,
) -> RouteOrigin {
	let Some(geolocator) = geolocator else {
		debug!("No geolocation available, using fallback origin");
		return RouteOrigin::Fallback(fallback);
	};

	match geolocator.current_position().await {
		Ok(position) if position.is_valid() => RouteOrigin::Device(position),
		Ok(position) => {
			warn!("Geolocation returned invalid position {}, using fallback", position);
			RouteOrigin::Fallback(fallback)
		}
		Err(e) => {
			warn!("Geolocation failed ({}), using fallback origin", e);
			RouteOrigin::Fallback(fallback)
		}
	}
}

/// A route the user asked for, before its origin is known
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
	pub destination_id: LocationId,
	pub destination_name: String,
	pub destination: Coordinates,
}

/// What gets handed to the routing service.
///
/// Waypoints are fixed: the overlay is not draggable and no intermediate
/// waypoints can be added.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSpec {
	pub destination_id: LocationId,
	pub from: Coordinates,
	pub to: Coordinates,
	pub mode: TravelMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteHandle(pub u64);

/// External routing engine that draws overlays on the map
pub trait RoutingService: Send {
	fn add_route(&mut self, spec: &RouteSpec) -> RouteHandle;
	fn remove_route(&mut self, handle: RouteHandle);
}

/// Keeps at most one route overlay on screen
#[derive(Debug, Default)]
pub struct RouteController {
	active: Option<(RouteHandle, RouteSpec)>,
}

impl RouteController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Remove any existing overlay, then draw the new one
	pub fn show(&mut self, service: &mut dyn RoutingService, spec: RouteSpec) -> RouteHandle {
		self.clear(service);

		let handle = service.add_route(&spec);
		debug!(
			"Route {:?} to {} ({} -> {}, {})",
			handle, spec.destination_id, spec.from, spec.to, spec.mode
		);
		self.active = Some((handle, spec));
		handle
	}

	pub fn clear(&mut self, service: &mut dyn RoutingService) -> bool {
		match self.active.take() {
			Some((handle, _)) => {
				service.remove_route(handle);
				true
			}
			None => false,
		}
	}

	pub fn active(&self) -> Option<&RouteSpec> {
		self.active.as_ref().map(|(_, spec)| spec)
	}
}

/// A drawn straight-line route
#[derive(Debug, Clone, PartialEq)]
pub struct StraightLineRoute {
	pub handle: RouteHandle,
	pub spec: RouteSpec,
	pub distance_m: f64,
	pub duration_s: f64,
}

/// Routes as the crow flies, for headless sessions and the CLI
#[derive(Debug, Default)]
pub struct StraightLineRouter {
	next_handle: u64,
	routes: Vec<StraightLineRoute>,
}

impl StraightLineRouter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Overlays currently drawn
	pub fn routes(&self) -> &[StraightLineRoute] {
		&self.routes
	}

	pub fn estimate(spec: &RouteSpec) -> (f64, f64) {
		let distance = spec.from.distance_to(&spec.to);
		(distance, distance / spec.mode.speed_mps())
	}
}

impl RoutingService for StraightLineRouter {
	fn add_route(&mut self, spec: &RouteSpec) -> RouteHandle {
		self.next_handle += 1;
		let handle = RouteHandle(self.next_handle);
		let (distance_m, duration_s) = Self::estimate(spec);

		self.routes.push(StraightLineRoute {
			handle,
			spec: spec.clone(),
			distance_m,
			duration_s,
		});
		handle
	}

	fn remove_route(&mut self, handle: RouteHandle) {
		self.routes.retain(|r| r.handle != handle);
	}
}
