pub mod browse;
pub mod config;
pub mod filter;
pub mod location;
pub mod route;
pub mod search;
