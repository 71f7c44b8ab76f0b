pub use crate::context::Context;
pub use crate::print_output;
pub use colored::Colorize;
pub use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
