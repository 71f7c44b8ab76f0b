mod args;

use anyhow::{Context as _, Result};
use campus_map_core::{
	presentation::Presentation,
	route::{Geolocator, RouteOrigin, StraightLineRouter, TravelMode},
	Coordinates, LocationId, Session,
};
use serde::Serialize;

use crate::util::{args::format_duration, prelude::*};

pub use self::args::RouteArgs;

#[derive(Debug, Serialize)]
struct RouteOutput {
	destination: LocationId,
	name: String,
	from: Coordinates,
	to: Coordinates,
	used_fallback: bool,
	mode: TravelMode,
	distance_m: f64,
	duration_s: f64,
}

pub async fn run(ctx: &Context, args: RouteArgs) -> Result<()> {
	let mut config = ctx.config.clone();
	if let Some(mode) = args.mode {
		config.route.travel_mode = mode.into();
	}

	let mut session = Session::from_config(&config, Presentation::headless());
	session
		.load()
		.await
		.with_context(|| format!("loading locations from {}", config.data_source))?;

	let geolocator = args.geolocator();
	let id = LocationId::new(args.id);
	let Some(origin) = session
		.directions_to(&id, geolocator.as_ref().map(|g| g as &dyn Geolocator))
		.await
	else {
		anyhow::bail!("Location '{}' not found", id);
	};

	let Some(spec) = session.active_route() else {
		anyhow::bail!("No route was drawn to '{}'", id);
	};
	let (distance_m, duration_s) = StraightLineRouter::estimate(spec);
	let name = session
		.catalog()
		.get(&id)
		.map(|l| l.name.clone())
		.unwrap_or_default();

	let out = RouteOutput {
		destination: spec.destination_id.clone(),
		name,
		from: spec.from,
		to: spec.to,
		used_fallback: matches!(origin, RouteOrigin::Fallback(_)),
		mode: spec.mode,
		distance_m,
		duration_s,
	};

	print_output!(ctx, &out, |o: &RouteOutput| {
		println!("{} {}", "Directions to".bold(), o.name.bold());
		let from = if o.used_fallback {
			format!("{} (campus default)", o.from)
		} else {
			o.from.to_string()
		};
		println!("  From: {}", from);
		println!("  To:   {}", o.to);
		println!(
			"  {:.0} m, about {} {}",
			o.distance_m,
			format_duration(o.duration_s),
			o.mode
		);
	});

	Ok(())
}
