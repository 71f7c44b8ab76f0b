use anyhow::{bail, Result};
use campus_map_core::search::SearchOptions;
use clap::Args;

#[derive(Args, Debug)]
pub struct SearchArgs {
	/// Search query
	pub query: String,

	/// Maximum number of results (0 for all)
	#[arg(long)]
	pub limit: Option<usize>,

	/// Minimum similarity a field needs to match (0.0 - 1.0)
	#[arg(long)]
	pub threshold: Option<f64>,
}

impl SearchArgs {
	/// Threshold and limit, falling back to the configured defaults
	pub fn resolve(&self, options: &SearchOptions) -> Result<(f64, usize)> {
		let threshold = self.threshold.unwrap_or(options.threshold);
		if !(0.0..=1.0).contains(&threshold) {
			bail!("--threshold must be between 0.0 and 1.0");
		}

		Ok((threshold, self.limit.unwrap_or(options.limit)))
	}
}
