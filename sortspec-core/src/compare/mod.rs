//! Multi-key in-memory sorting
//!
//! This module provides:
//! - Path-based record access ([`SortRecord`], [`FieldPath`], [`FieldValue`])
//! - Per-key rules, declarative (`"+string"`, `"-date"`) or custom closures
//! - [`OrderingSpec`] and the comparator compiled from it

pub mod comparator;
pub mod ordering;
pub mod path;
pub mod record;
pub mod rule;
pub mod value;

#[cfg(test)]
mod tests;

pub use comparator::*;
pub use ordering::*;
pub use path::*;
pub use record::*;
pub use rule::*;
pub use value::*;
