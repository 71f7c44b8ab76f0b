//! Location categories

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The fixed set of categories a campus location can belong to
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	PartialOrd,
	Ord,
	Serialize,
	Deserialize,
	Display,
	EnumString,
	EnumIter,
	IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
	Academic,
	Administrative,
	Athletics,
	Dining,
	Housing,
	Library,
	Parking,
	Recreation,
	Services,
	/// Anything the dataset tags with a category we do not know about
	#[serde(other)]
	Other,
}

impl Category {
	/// Lowercase label, also the text the search index matches against
	pub fn as_str(&self) -> &'static str {
		self.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;
	use strum::IntoEnumIterator;

	#[test]
	fn test_unknown_category_deserializes_as_other() {
		let category: Category = serde_json::from_str("\"observatory\"").unwrap();
		assert_eq!(category, Category::Other);

		let category: Category = serde_json::from_str("\"dining\"").unwrap();
		assert_eq!(category, Category::Dining);
	}

	#[test]
	fn test_parse_is_case_insensitive() {
		assert_eq!(Category::from_str("Academic").unwrap(), Category::Academic);
		assert_eq!(Category::from_str("PARKING").unwrap(), Category::Parking);
		assert!(Category::from_str("nope").is_err());
	}

	#[test]
	fn test_labels_match_serde_names() {
		for category in Category::iter() {
			let json = serde_json::to_string(&category).unwrap();
			assert_eq!(json, format!("\"{}\"", category.as_str()));
		}
	}
}
