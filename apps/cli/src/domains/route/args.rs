use campus_map_core::{
	route::{FixedGeolocator, TravelMode},
	Coordinates,
};
use clap::Args;

use crate::util::args::parse_coordinates;

#[derive(Args, Debug)]
pub struct RouteArgs {
	/// Destination location id
	pub id: String,

	/// Start position as LAT,LNG (defaults to the configured fallback origin)
	#[arg(long, value_parser = parse_coordinates)]
	pub from: Option<Coordinates>,

	/// Travel mode
	#[arg(long, value_enum)]
	pub mode: Option<TravelModeArg>,
}

impl RouteArgs {
	/// A geolocator pinned to `--from`, if given
	pub fn geolocator(&self) -> Option<FixedGeolocator> {
		self.from.map(|from| FixedGeolocator(Ok(from)))
	}
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TravelModeArg {
	Walking,
	Driving,
}

impl From<TravelModeArg> for TravelMode {
	fn from(arg: TravelModeArg) -> Self {
		match arg {
			TravelModeArg::Walking => TravelMode::Walking,
			TravelModeArg::Driving => TravelMode::Driving,
		}
	}
}
