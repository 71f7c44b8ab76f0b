//! Interactive session driving the core through text commands

mod args;

use anyhow::Result;
use campus_map_core::{filter::FilterState, presentation::Command, route::Geolocator, Session};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::{
	console,
	util::{args::parse_category, prelude::*},
};

pub use self::args::BrowseArgs;

const HELP: &str = "\
search <text>     filter by text (empty clears)
go                focus the first visible location
show <category>   tick a category (all: tick every category)
hide <category>   untick a category (all: untick every category)
focus <id>        focus a location
clear             clear the focus
plan | next | prev | close
                  floor plan viewer
route [id]        directions to a location (default: focused)
quit";

/// What a line of input asks for
#[derive(Debug, PartialEq)]
enum Input {
	Command(Command),
	AllCategories(bool),
	Route(Option<String>),
	Help,
	Quit,
}

fn parse_input(line: &str) -> Result<Input, String> {
	let line = line.trim();
	let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
	let rest = rest.trim();

	let input = match word {
		"search" => Input::Command(Command::SetSearchText(rest.to_string())),
		"go" => Input::Command(Command::SubmitSearch),
		"show" | "hide" if rest == "all" => Input::AllCategories(word == "show"),
		"show" | "hide" => Input::Command(Command::SetCategory {
			category: parse_category(rest)?,
			enabled: word == "show",
		}),
		"focus" if !rest.is_empty() => Input::Command(Command::Focus(rest.into())),
		"clear" => Input::Command(Command::ClearFocus),
		"plan" => Input::Command(Command::OpenFloorPlan),
		"next" => Input::Command(Command::NextFloor),
		"prev" => Input::Command(Command::PrevFloor),
		"close" => Input::Command(Command::CloseFloorPlan),
		"route" => Input::Route((!rest.is_empty()).then(|| rest.to_string())),
		"help" | "?" => Input::Help,
		"quit" | "exit" => Input::Quit,
		_ => return Err(format!("unknown command '{}', try 'help'", line)),
	};
	Ok(input)
}

pub async fn run(ctx: &Context, args: BrowseArgs) -> Result<()> {
	let mut session = Session::from_config(&ctx.config, console::presentation());
	match session.load().await {
		Ok(count) => println!("{} locations loaded, type 'help' for commands", count),
		Err(e) => warn!("Starting with an empty map: {}", e),
	}

	let geolocator = args.geolocator();
	let mut lines = BufReader::new(io::stdin()).lines();

	while let Some(line) = lines.next_line().await? {
		if line.trim().is_empty() {
			continue;
		}

		match parse_input(&line) {
			Ok(Input::Command(command)) => {
				session.dispatch(command);
			}
			Ok(Input::AllCategories(enabled)) => {
				if enabled {
					session.set_categories(FilterState::all_categories().categories);
				} else {
					session.set_categories([]);
				}
			}
			Ok(Input::Route(id)) => {
				let Some(id) = id
					.map(Into::into)
					.or_else(|| session.focused().map(|l| l.id.clone()))
				else {
					println!("{}", "Nothing focused".yellow());
					continue;
				};
				let geolocator = geolocator.as_ref().map(|g| g as &dyn Geolocator);
				if session.directions_to(&id, geolocator).await.is_none() {
					println!("{}", format!("Unknown location '{}'", id).yellow());
				}
			}
			Ok(Input::Help) => println!("{}", HELP),
			Ok(Input::Quit) => break,
			Err(e) => println!("{}", e.red()),
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use campus_map_core::Category;

	#[test]
	fn test_parse_input() {
		assert_eq!(
			parse_input("search  dining hall "),
			Ok(Input::Command(Command::SetSearchText("dining hall".into())))
		);
		assert_eq!(
			parse_input("hide Dining"),
			Ok(Input::Command(Command::SetCategory {
				category: Category::Dining,
				enabled: false
			}))
		);
		assert_eq!(parse_input("show all"), Ok(Input::AllCategories(true)));
		assert_eq!(
			parse_input("focus C"),
			Ok(Input::Command(Command::Focus("C".into())))
		);
		assert_eq!(parse_input("route"), Ok(Input::Route(None)));
		assert_eq!(parse_input("route 42"), Ok(Input::Route(Some("42".into()))));
		assert!(parse_input("focus").is_err());
		assert!(parse_input("fly away").is_err());
	}
}
