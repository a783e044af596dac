//! Sort profiles loaded from TOML.
//!
//! A profile bundles the allow-list, default sort and value kinds for one
//! resource so callers only pass `--profile users` instead of repeating
//! them on every invocation.

pub mod error;
pub mod loader;
pub mod models;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoader, parse_config};
pub use models::{Profile, SortConfig};
