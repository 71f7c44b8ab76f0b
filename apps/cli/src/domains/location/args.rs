use campus_map_core::{Category, LocationId};
use clap::Args;

use crate::util::args::parse_category;

#[derive(Args, Debug)]
pub struct LocationListArgs {
	/// Only show these categories (repeatable)
	#[arg(long = "category", value_parser = parse_category)]
	pub categories: Vec<Category>,
}

impl LocationListArgs {
	pub fn includes(&self, category: Category) -> bool {
		self.categories.is_empty() || self.categories.contains(&category)
	}
}

#[derive(Args, Debug)]
pub struct LocationShowArgs {
	/// Location id
	pub id: String,
}

impl From<LocationShowArgs> for LocationId {
	fn from(args: LocationShowArgs) -> Self {
		LocationId::new(args.id)
	}
}
