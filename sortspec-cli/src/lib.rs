//! Configuration and command line front end for `sortspec-core`.
//!
//! The `sortspec` binary parses sort strings into database sort documents or
//! `ORDER BY` bodies, and sorts JSON arrays in memory. Named profiles in a
//! TOML file carry the allow-list, default sort and value kinds per
//! resource.

pub mod cli;
pub mod config;

pub use cli::{Overrides, SortContext};
pub use config::{ConfigLoadError, ConfigLoader, Profile, SortConfig};
