//! Command logic behind the `sortspec` binary.

pub mod commands;
pub mod context;

pub use commands::{parse_command, render_parse, sort_json};
pub use context::{Overrides, SortContext, parse_kind_assignment};
