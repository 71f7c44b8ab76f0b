//! Campus map core
//!
//! A headless core for the campus-map widget: it loads building locations,
//! answers fuzzy searches, filters by category and text, tracks the focused
//! building, pages through floor plans and manages the directions overlay.
//! Map tiles, list rendering, document rendering, routing and geolocation are
//! reached through the traits in [`presentation`] and [`route`].

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod filter;
pub mod floor_plan;
pub mod presentation;
pub mod route;
pub mod search;
pub mod selection;
pub mod session;
pub mod store;

pub use config::CampusConfig;
pub use domain::{Category, Coordinates, FloorPlan, Location, LocationId, PageRef};
pub use error::{CampusError, CampusResult, GeolocationError, LoadError};
pub use events::{EventBus, SessionEvent};
pub use filter::{EmptyCategoryPolicy, FilterEngine, FilterMode, FilterState};
pub use floor_plan::{FloorPlanViewer, ViewerState};
pub use presentation::{Command, Presentation};
pub use search::{SearchHit, SearchIndex, SearchOptions};
pub use selection::{Selection, SelectionController};
pub use session::Session;
pub use store::{Catalog, DataSource, LocationSource, LocationStore};
