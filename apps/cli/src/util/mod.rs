#[macro_use]
pub mod macros;
pub mod args;
pub mod output;
pub mod prelude;
