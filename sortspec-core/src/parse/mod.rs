//! Sort string parsing
//!
//! This module provides:
//! - The ordered [`SortSpec`] mapping and its renderers
//! - Allow-list/defaults options
//! - The lenient `-foo,bar,+baz` parser, with the flavor chosen at runtime
//!   or fixed by the entry point

pub mod options;
pub mod parser;
pub mod spec;


pub use options::*;
pub use parser::*;
pub use spec::*;
