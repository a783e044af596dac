//! Error type for the fallible constructors of this crate
//!
//! Parsing sort strings never fails. Errors only come from strict lookups:
//! flavor names, numeric directions, and declarative order rules.

use thiserror::Error;

/// Errors raised when a name or rule cannot be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Flavor name other than `mongo`, `sql` or `mysql`
    #[error("Unknown sort flavor: {0}")]
    UnknownFlavor(String),

    /// Numeric direction other than `1` or `-1`
    #[error("Invalid sort direction: {0}")]
    InvalidDirection(String),

    /// Order rule without a leading `+` or `-`
    #[error("Invalid order rule: {0}")]
    InvalidRule(String),

    /// Kind name other than `string`, `number`, `boolean` or `date`
    #[error("Unknown value kind: {0}")]
    UnknownValueKind(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SortError>;
