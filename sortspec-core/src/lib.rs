//! # sortspec core
//!
//! Two small pieces for ordering data from user input:
//!
//! - **Sort string parsing**: `-created_at,name,+id` becomes an ordered
//!   field → direction mapping, filtered by an optional allow-list and
//!   encoded for a document store (`1`/`-1`) or a SQL builder
//!   (`ASC`/`DESC`). Parsing never fails; malformed tokens are dropped.
//! - **Multi-key comparison**: an ordering spec of per-key rules
//!   (`"+string"`, `"-number"`, `"+date"`, `"-boolean"` or a closure) compiles
//!   into a single comparator for in-memory sorting.
//!
//! ## Modules
//!
//! - [`direction`]: logical directions, flavors and their encodings
//! - [`parse`]: the sort string parser and [`SortSpec`]
//! - [`compare`]: records, rules, [`OrderingSpec`] and the comparator
//!
//! ## Example
//!
//! ```
//! use sortspec_core::{
//!     OrderingSpec, SortOptions, ValueKind, parse_sort_mongo, sort_by_keys,
//! };
//! use serde_json::json;
//!
//! let spec = parse_sort_mongo(
//!     Some("-age,name,password"),
//!     &SortOptions::new().allow(["age", "name"]),
//! );
//! assert_eq!(spec.to_document(), json!({"age": -1, "name": 1}));
//!
//! let ordering = OrderingSpec::from_sort_spec(&spec, |field| match field {
//!     "age" => ValueKind::Number,
//!     _ => ValueKind::String,
//! });
//! let mut people = vec![
//!     json!({"name": "bo", "age": 30}),
//!     json!({"name": "al", "age": 30}),
//!     json!({"name": "cy", "age": 41}),
//! ];
//! sort_by_keys(&mut people, &ordering);
//! assert_eq!(people[0]["name"], "cy");
//! assert_eq!(people[1]["name"], "al");
//! ```

pub mod compare;
pub mod direction;
pub mod error;
pub mod parse;
pub mod prelude;

pub use compare::{
    CompareFn, Comparator, DeclarativeRule, FieldPath, FieldValue, OrderKey,
    OrderRule, OrderingSpec, SortRecord, ValueKind, compile_comparator,
    sort_by_keys, sorted_by_keys,
};
pub use direction::{
    DirectionToken, EncodedDirection, Flavor, MongoDirection, SortDirection,
    SqlDirection,
};
pub use error::{Result, SortError};
pub use parse::{
    AllowFields, ParseOptions, QuoteStyle, SortField, SortOptions, SortSpec,
    parse_sort, parse_sort_mongo, parse_sort_sql, parse_token,
};
