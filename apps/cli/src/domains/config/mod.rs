use anyhow::Result;
use campus_map_core::CampusConfig;
use clap::Subcommand;

use crate::util::prelude::*;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
	/// Show the effective configuration
	Show,
	/// Print the config file location
	Path,
	/// Overwrite the config file with defaults
	Reset,
}

pub async fn run(ctx: &Context, cmd: ConfigCmd) -> Result<()> {
	match cmd {
		ConfigCmd::Show => {
			print_output!(ctx, &ctx.config, |config: &CampusConfig| {
				let mut table = Table::new();
				table.load_preset(UTF8_BORDERS_ONLY);
				table.set_header(vec!["Key", "Value"]);

				let search = &config.search;
				let rows = [
					("data_source", config.data_source.to_string()),
					("log_level", config.log_level.clone()),
					("map.center", config.map.center.to_string()),
					("map.default_zoom", config.map.default_zoom.to_string()),
					("map.focus_zoom", config.map.focus_zoom.to_string()),
					("search.threshold", search.threshold.to_string()),
					("search.limit", search.limit.to_string()),
					(
						"search.weights",
						format!(
							"name {} / category {} / description {}",
							search.weights.name, search.weights.category, search.weights.description
						),
					),
					("filter.mode", format!("{:?}", config.filter.mode)),
					(
						"filter.empty_categories",
						format!("{:?}", config.filter.empty_categories),
					),
					("route.travel_mode", config.route.travel_mode.to_string()),
					("route.fallback_origin", config.route.fallback_origin.to_string()),
				];
				for (key, value) in rows {
					table.add_row(vec![key.to_string(), value]);
				}

				println!("{}", table);
				println!();
				println!("Config file: {}", ctx.config_path.display());
			});
		}
		ConfigCmd::Path => println!("{}", ctx.config_path.display()),
		ConfigCmd::Reset => {
			CampusConfig::default().save(&ctx.config_path)?;
			println!("Reset {}", ctx.config_path.display());
		}
	}

	Ok(())
}
