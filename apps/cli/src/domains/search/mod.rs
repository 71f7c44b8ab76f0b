mod args;

use anyhow::Result;
use campus_map_core::{search::SearchField, Category, LocationId};
use serde::Serialize;

use crate::util::prelude::*;

pub use self::args::SearchArgs;

#[derive(Debug, Serialize)]
struct SearchRow {
	rank: usize,
	id: LocationId,
	name: String,
	category: Category,
	score: f64,
	matched: Vec<SearchField>,
}

pub async fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
	let (threshold, limit) = args.resolve(&ctx.config.search)?;

	let catalog = ctx.load_catalog().await?;
	let hits = catalog
		.index()
		.search_with_threshold(&args.query, threshold, limit);

	let rows = hits
		.iter()
		.enumerate()
		.map(|(i, hit)| SearchRow {
			rank: i + 1,
			id: hit.location.id.clone(),
			name: hit.location.name.clone(),
			category: hit.location.category,
			score: hit.score,
			matched: hit.matches.iter().map(|m| m.field).collect(),
		})
		.collect::<Vec<_>>();

	print_output!(ctx, &rows, |rows: &Vec<SearchRow>| {
		if rows.is_empty() {
			println!("No locations found.");
			return;
		}

		let mut table = Table::new();
		table.load_preset(UTF8_BORDERS_ONLY);
		table.set_header(vec!["#", "ID", "Name", "Category", "Score", "Matched"]);
		for row in rows {
			table.add_row(vec![
				row.rank.to_string(),
				row.id.to_string(),
				row.name.clone(),
				row.category.to_string(),
				format!("{:.2}", row.score),
				row.matched
					.iter()
					.map(|f| f.to_string())
					.collect::<Vec<_>>()
					.join(", "),
			]);
		}
		println!("{}", table);
	});

	Ok(())
}
