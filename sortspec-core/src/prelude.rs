//! Intentional crate surface for callers that parse and sort.

pub use crate::compare::{OrderingSpec, SortRecord, ValueKind, sort_by_keys};
pub use crate::direction::{Flavor, MongoDirection, SortDirection, SqlDirection};
pub use crate::parse::{
    ParseOptions, SortOptions, SortSpec, parse_sort, parse_sort_mongo,
    parse_sort_sql,
};
