mod args;

use anyhow::Result;
use campus_map_core::{
	filter::{FilterEngine, FilterState},
	Location,
};

use crate::util::prelude::*;

pub use self::args::FilterArgs;

pub async fn run(ctx: &Context, args: FilterArgs) -> Result<()> {
	let engine = args.engine(ctx.config.filter);
	let state = FilterState::from(args);

	let catalog = ctx.load_catalog().await?;
	let visible = engine.apply(&catalog, &state);

	print_output!(ctx, &visible, |visible: &Vec<&Location>| {
		print_visible(&engine, visible);
	});

	Ok(())
}

fn print_visible(engine: &FilterEngine, visible: &[&Location]) {
	if visible.is_empty() {
		println!("{}", campus_map_core::presentation::EMPTY_LIST_MESSAGE);
		return;
	}

	println!(
		"{} {}",
		visible.len().to_string().bold(),
		format!("locations ({:?} match)", engine.mode).dimmed()
	);
	for location in visible {
		println!(
			"  {} {} {}",
			location.id.to_string().dimmed(),
			location.name,
			format!("[{}]", location.category).cyan()
		);
	}
}
