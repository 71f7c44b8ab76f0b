//! Value parsers shared by several subcommands

use campus_map_core::{Category, Coordinates};

pub fn parse_category(value: &str) -> Result<Category, String> {
	value
		.parse()
		.map_err(|_| format!("unknown category '{}'", value))
}

/// Parse `lat,lng`
pub fn parse_coordinates(value: &str) -> Result<Coordinates, String> {
	let (lat, lng) = value
		.split_once(',')
		.ok_or_else(|| format!("expected LAT,LNG, got '{}'", value))?;

	let lat = lat.trim().parse::<f64>().map_err(|e| e.to_string())?;
	let lng = lng.trim().parse::<f64>().map_err(|e| e.to_string())?;

	let coordinates = Coordinates::new(lat, lng);
	if !coordinates.is_valid() {
		return Err(format!("{} is not a valid position", coordinates));
	}
	Ok(coordinates)
}

/// Human-readable duration for route estimates
pub fn format_duration(seconds: f64) -> String {
	let minutes = (seconds / 60.0).round() as u64;
	if minutes < 60 {
		format!("{} min", minutes.max(1))
	} else {
		format!("{} h {} min", minutes / 60, minutes % 60)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_coordinates() {
		assert_eq!(
			parse_coordinates("33.2, -97.15"),
			Ok(Coordinates::new(33.2, -97.15))
		);
		assert!(parse_coordinates("33.2").is_err());
		assert!(parse_coordinates("95,0").is_err());
	}

	#[test]
	fn test_parse_category() {
		assert_eq!(parse_category("Dining"), Ok(Category::Dining));
		assert!(parse_category("pool").is_err());
	}

	#[test]
	fn test_format_duration() {
		assert_eq!(format_duration(10.0), "1 min");
		assert_eq!(format_duration(600.0), "10 min");
		assert_eq!(format_duration(5400.0), "1 h 30 min");
	}
}
