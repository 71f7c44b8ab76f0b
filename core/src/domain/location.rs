//! Location - a building or point of interest on the campus map
//!
//! Locations arrive as raw JSON records and are resolved once, at load time,
//! into the immutable [`Location`] the rest of the core works with. The two
//! floor-plan encodings found in datasets are folded into a single
//! [`FloorPlan`] variant here so nothing downstream has to care which one a
//! record used.

use super::Category;
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, unique location key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LocationId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for LocationId {
	fn from(s: &str) -> Self {
		Self(s.to_string())
	}
}

impl From<String> for LocationId {
	fn from(s: String) -> Self {
		Self(s)
	}
}

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

impl Coordinates {
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	pub fn is_valid(&self) -> bool {
		self.lat.is_finite()
			&& self.lng.is_finite()
			&& (-90.0..=90.0).contains(&self.lat)
			&& (-180.0..=180.0).contains(&self.lng)
	}

	/// Great-circle distance in meters (haversine)
	pub fn distance_to(&self, other: &Coordinates) -> f64 {
		const EARTH_RADIUS_M: f64 = 6_371_000.0;

		let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
		let dlat = (other.lat - self.lat).to_radians();
		let dlng = (other.lng - self.lng).to_radians();

		let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
		2.0 * EARTH_RADIUS_M * a.sqrt().asin()
	}
}

impl fmt::Display for Coordinates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.5}, {:.5}", self.lat, self.lng)
	}
}

/// Floor-plan documents attached to a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FloorPlan {
	#[default]
	NoFloorPlan,
	/// One PDF, one page per floor
	SinglePdfPaged { file: String, pages: u32 },
	/// One single-page PDF per floor
	LegacyPdfList { files: Vec<String> },
}

/// A concrete page to hand to the document viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef<'a> {
	pub file: &'a str,
	/// 1-based page number within `file`
	pub page: u32,
}

impl FloorPlan {
	pub fn page_count(&self) -> usize {
		match self {
			FloorPlan::NoFloorPlan => 0,
			FloorPlan::SinglePdfPaged { pages, .. } => *pages as usize,
			FloorPlan::LegacyPdfList { files } => files.len(),
		}
	}

	pub fn page_ref(&self, index: usize) -> Option<PageRef<'_>> {
		if index >= self.page_count() {
			return None;
		}

		match self {
			FloorPlan::NoFloorPlan => None,
			FloorPlan::SinglePdfPaged { file, .. } => Some(PageRef {
				file,
				page: index as u32 + 1,
			}),
			FloorPlan::LegacyPdfList { files } => Some(PageRef {
				file: &files[index],
				page: 1,
			}),
		}
	}

	pub fn is_available(&self) -> bool {
		self.page_count() > 0
	}
}

/// A resolved campus location, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
	pub id: LocationId,
	pub name: String,
	pub category: Category,
	pub description: Option<String>,
	pub position: Coordinates,
	pub floor_plan: FloorPlan,
}

impl Location {
	/// Popup text shown on the map marker
	pub fn popup_text(&self) -> String {
		match &self.description {
			Some(description) if !description.is_empty() => {
				format!("{}\n{}", self.name, description)
			}
			_ => self.name.clone(),
		}
	}
}

/// Ids may be written as strings or bare integers in datasets
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Number(i64),
}

impl From<RawId> for LocationId {
	fn from(raw: RawId) -> Self {
		match raw {
			RawId::Text(s) => LocationId(s),
			RawId::Number(n) => LocationId(n.to_string()),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
struct FloorMapRecord {
	file: String,
	floors: u32,
}

/// A location exactly as it appears in the JSON dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
	id: RawId,
	name: String,
	category: Category,
	#[serde(default)]
	description: Option<String>,
	lat: f64,
	lng: f64,
	#[serde(default)]
	floor_map: Option<FloorMapRecord>,
	#[serde(default)]
	floor_plans: Option<Vec<String>>,
}

impl LocationRecord {
	/// Resolve into a [`Location`], picking `floorMap` over `floorPlans`
	pub fn resolve(self) -> Result<Location, LoadError> {
		let id = LocationId::from(self.id);
		let position = Coordinates::new(self.lat, self.lng);
		if !position.is_valid() {
			return Err(LoadError::InvalidCoordinates {
				id,
				lat: self.lat,
				lng: self.lng,
			});
		}

		let floor_plan = match (self.floor_map, self.floor_plans) {
			(Some(map), _) if map.floors > 0 => FloorPlan::SinglePdfPaged {
				file: map.file,
				pages: map.floors,
			},
			(Some(_), _) => FloorPlan::NoFloorPlan,
			(None, Some(files)) if !files.is_empty() => FloorPlan::LegacyPdfList { files },
			(None, _) => FloorPlan::NoFloorPlan,
		};

		Ok(Location {
			id,
			name: self.name,
			category: self.category,
			description: self.description.filter(|d| !d.trim().is_empty()),
			position,
			floor_plan,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(json: &str) -> LocationRecord {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn test_numeric_and_string_ids() {
		let loc = record(r#"{"id": 7, "name": "Union", "category": "dining", "lat": 33.2, "lng": -97.1}"#)
			.resolve()
			.unwrap();
		assert_eq!(loc.id, LocationId::new("7"));

		let loc = record(r#"{"id": "lib", "name": "Willis", "category": "library", "lat": 33.2, "lng": -97.1}"#)
			.resolve()
			.unwrap();
		assert_eq!(loc.id.as_str(), "lib");
		assert_eq!(loc.floor_plan, FloorPlan::NoFloorPlan);
	}

	#[test]
	fn test_floor_map_takes_precedence() {
		let loc = record(
			r#"{"id": "a", "name": "A", "category": "academic", "lat": 0, "lng": 0,
			    "floorMap": {"file": "a.pdf", "floors": 3},
			    "floorPlans": ["a1.pdf", "a2.pdf"]}"#,
		)
		.resolve()
		.unwrap();

		assert_eq!(
			loc.floor_plan,
			FloorPlan::SinglePdfPaged {
				file: "a.pdf".into(),
				pages: 3
			}
		);
		assert_eq!(loc.floor_plan.page_ref(2), Some(PageRef { file: "a.pdf", page: 3 }));
		assert_eq!(loc.floor_plan.page_ref(3), None);
	}

	#[test]
	fn test_legacy_floor_plans() {
		let loc = record(
			r#"{"id": "b", "name": "B", "category": "housing", "lat": 0, "lng": 0,
			    "floorPlans": ["b1.pdf", "b2.pdf"]}"#,
		)
		.resolve()
		.unwrap();

		assert_eq!(loc.floor_plan.page_count(), 2);
		assert_eq!(loc.floor_plan.page_ref(1), Some(PageRef { file: "b2.pdf", page: 1 }));
	}

	#[test]
	fn test_empty_floor_data_is_no_floor_plan() {
		let zero_floors = record(
			r#"{"id": "c", "name": "C", "category": "parking", "lat": 0, "lng": 0,
			    "floorMap": {"file": "c.pdf", "floors": 0}}"#,
		)
		.resolve()
		.unwrap();
		assert_eq!(zero_floors.floor_plan, FloorPlan::NoFloorPlan);

		let empty_list = record(
			r#"{"id": "d", "name": "D", "category": "parking", "lat": 0, "lng": 0, "floorPlans": []}"#,
		)
		.resolve()
		.unwrap();
		assert!(!empty_list.floor_plan.is_available());
	}

	#[test]
	fn test_invalid_coordinates_rejected() {
		let err = record(r#"{"id": "x", "name": "X", "category": "other", "lat": 123.0, "lng": 0}"#)
			.resolve()
			.unwrap_err();
		assert!(matches!(err, LoadError::InvalidCoordinates { .. }));
	}

	#[test]
	fn test_distance() {
		let a = Coordinates::new(33.2075, -97.1526);
		let b = Coordinates::new(33.2100, -97.1526);
		let d = a.distance_to(&b);
		assert!((d - 278.0).abs() < 2.0, "unexpected distance {d}");
		assert_eq!(a.distance_to(&a), 0.0);
	}
}
