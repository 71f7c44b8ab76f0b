use anyhow::Result;
use campus_map_core::{store::DataSource, CampusConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

mod console;
mod context;
mod domains;
mod util;

use crate::context::{Context, OutputFormat};
use crate::domains::{
	browse::BrowseArgs, config::ConfigCmd, filter::FilterArgs, location::LocationCmd,
	route::RouteArgs, search::SearchArgs,
};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "campus-map", about = "Campus map CLI")]
struct Cli {
	/// Path to the config file (created with defaults if missing)
	#[arg(long, env = "CAMPUS_MAP_CONFIG", default_value = "campus-map.json")]
	config: PathBuf,

	/// Location dataset (file path or http(s) URL), overrides the config
	#[arg(long)]
	data: Option<String>,

	/// Output format
	#[arg(long, value_enum, default_value = "human")]
	format: OutputFormat,

	/// Log level, overrides the config (RUST_LOG takes precedence)
	#[arg(long)]
	log_level: Option<String>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Location operations
	#[command(subcommand)]
	Location(LocationCmd),
	/// Fuzzy search across names, categories and descriptions
	Search(SearchArgs),
	/// Apply a category and text filter
	Filter(FilterArgs),
	/// Directions to a location
	Route(RouteArgs),
	/// Interactive map session
	Browse(BrowseArgs),
	/// Configuration
	#[command(subcommand)]
	Config(ConfigCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Log before the config is read; its log_level applies once it is known
	let env_filter = EnvFilter::try_from_default_env().ok();
	let level_pinned = env_filter.is_some() || cli.log_level.is_some();
	let initial = env_filter.unwrap_or_else(|| {
		EnvFilter::new(cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))
	});
	let (filter, filter_handle) = reload::Layer::new(initial);
	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();

	// Only config commands create the file; everything else reads it if present
	let mut config = if matches!(cli.command, Commands::Config(_)) {
		CampusConfig::load_from(&cli.config)?
	} else {
		CampusConfig::load_or_default(&cli.config)?
	};
	if let Some(data) = &cli.data {
		config.data_source = DataSource::parse(data);
	}

	if !level_pinned && config.log_level != DEFAULT_LOG_LEVEL {
		filter_handle.reload(EnvFilter::new(&config.log_level))?;
	}

	debug!("Using data source {}", config.data_source);
	let ctx = Context::new(config, cli.config, cli.format);

	match cli.command {
		Commands::Location(cmd) => domains::location::run(&ctx, cmd).await?,
		Commands::Search(args) => domains::search::run(&ctx, args).await?,
		Commands::Filter(args) => domains::filter::run(&ctx, args).await?,
		Commands::Route(args) => domains::route::run(&ctx, args).await?,
		Commands::Browse(args) => domains::browse::run(&ctx, args).await?,
		Commands::Config(cmd) => domains::config::run(&ctx, cmd).await?,
	}

	Ok(())
}
