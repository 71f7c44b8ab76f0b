use campus_map_core::{
	filter::{EmptyCategoryPolicy, FilterEngine, FilterMode, FilterState},
	Category,
};
use clap::Args;

use crate::util::args::parse_category;

#[derive(Args, Debug)]
pub struct FilterArgs {
	/// Text to match against names and descriptions
	#[arg(long, default_value = "")]
	pub text: String,

	/// Categories to include (repeatable); omit to use the empty-selection policy
	#[arg(long = "category", value_parser = parse_category)]
	pub categories: Vec<Category>,

	/// Rank by fuzzy relevance instead of substring matching
	#[arg(long)]
	pub fuzzy: bool,

	/// Show nothing when no category is selected
	#[arg(long)]
	pub strict: bool,
}

impl FilterArgs {
	/// The configured engine with any flag overrides applied
	pub fn engine(&self, mut engine: FilterEngine) -> FilterEngine {
		if self.fuzzy {
			engine.mode = FilterMode::Fuzzy;
		}
		if self.strict {
			engine.empty_categories = EmptyCategoryPolicy::ShowNone;
		}
		engine
	}
}

impl From<FilterArgs> for FilterState {
	fn from(args: FilterArgs) -> Self {
		FilterState {
			categories: args.categories.into_iter().collect(),
			text: args.text,
		}
	}
}
