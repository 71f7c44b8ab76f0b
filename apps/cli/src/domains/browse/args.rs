use campus_map_core::{route::FixedGeolocator, Coordinates};
use clap::Args;

use crate::util::args::parse_coordinates;

#[derive(Args, Debug)]
pub struct BrowseArgs {
	/// Pretend the device is at LAT,LNG when asking for directions
	#[arg(long, value_parser = parse_coordinates)]
	pub position: Option<Coordinates>,
}

impl BrowseArgs {
	pub fn geolocator(&self) -> Option<FixedGeolocator> {
		self.position.map(|p| FixedGeolocator(Ok(p)))
	}
}
