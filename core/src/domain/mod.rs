//! Core domain types

pub mod category;
pub mod location;

pub use category::Category;
pub use location::{Coordinates, FloorPlan, Location, LocationId, LocationRecord, PageRef};
