mod args;

use anyhow::Result;
use campus_map_core::{FloorPlan, Location, LocationId};
use clap::Subcommand;
use serde::Serialize;

use crate::util::prelude::*;

use self::args::*;

#[derive(Subcommand, Debug)]
pub enum LocationCmd {
	/// List locations in dataset order
	List(LocationListArgs),
	/// Show a single location with its floor plan pages
	Show(LocationShowArgs),
}

#[derive(Serialize)]
struct LocationDetail<'a> {
	#[serde(flatten)]
	location: &'a Location,
	floor_plan_pages: Vec<String>,
}

pub async fn run(ctx: &Context, cmd: LocationCmd) -> Result<()> {
	let catalog = ctx.load_catalog().await?;

	match cmd {
		LocationCmd::List(args) => {
			let locations = catalog
				.all()
				.iter()
				.filter(|l| args.includes(l.category))
				.collect::<Vec<_>>();

			print_output!(ctx, &locations, |locations: &Vec<&Location>| {
				if locations.is_empty() {
					println!("No locations found.");
					return;
				}

				let mut table = Table::new();
				table.load_preset(UTF8_BORDERS_ONLY);
				table.set_header(vec!["ID", "Name", "Category", "Position", "Floors"]);
				for location in locations {
					table.add_row(vec![
						location.id.to_string(),
						location.name.clone(),
						location.category.to_string(),
						location.position.to_string(),
						location.floor_plan.page_count().to_string(),
					]);
				}
				println!("{}", table);
			});
		}
		LocationCmd::Show(args) => {
			let id = LocationId::from(args);
			let Some(location) = catalog.get(&id) else {
				anyhow::bail!("Location '{}' not found", id);
			};

			let detail = LocationDetail {
				location,
				floor_plan_pages: floor_plan_pages(&location.floor_plan),
			};

			print_output!(ctx, &detail, |d: &LocationDetail| {
				let l = d.location;
				println!("{} {}", l.name.bold(), format!("({})", l.id).dimmed());
				println!("  Category: {}", l.category);
				println!("  Position: {}", l.position);
				if let Some(description) = &l.description {
					println!("  {}", description);
				}
				if d.floor_plan_pages.is_empty() {
					println!("  {}", "No floor plan available".yellow());
				} else {
					println!("  Floor plan:");
					for (i, page) in d.floor_plan_pages.iter().enumerate() {
						println!("    {}. {}", i + 1, page);
					}
				}
			});
		}
	}

	Ok(())
}

fn floor_plan_pages(plan: &FloorPlan) -> Vec<String> {
	(0..plan.page_count())
		.filter_map(|i| plan.page_ref(i))
		.map(|page| format!("{}#page={}", page.file, page.page))
		.collect()
}
