//! Parser options

use super::spec::SortSpec;
use crate::direction::{DirectionToken, Flavor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of field names a sort string may reference
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowFields(HashSet<String>);

impl AllowFields {
    /// Empty set; allows nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `field` may be sorted on
    pub fn allows(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    /// Allow one more field; `false` if it was already allowed
    pub fn insert(&mut self, field: impl Into<String>) -> bool {
        self.0.insert(field.into())
    }

    /// Number of allowed fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AllowFields(iter.into_iter().map(Into::into).collect())
    }
}

/// Allow-list and defaults for the fixed-flavor parsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "D: Serialize",
    deserialize = "D: Deserialize<'de>"
))]
/// Options for the fixed-flavor parsers, generic over the encoding
pub struct SortOptions<D> {
    /// Fields outside this set are dropped. `None` allows every field.
    #[serde(default)]
    pub allow_fields: Option<AllowFields>,
    /// Returned verbatim for missing or empty input
    #[serde(default)]
    pub defaults: Option<SortSpec<D>>,
}

impl<D> Default for SortOptions<D> {
    fn default() -> Self {
        Self {
            allow_fields: None,
            defaults: None,
        }
    }
}

impl<D> SortOptions<D> {
    /// No allow-list and no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict parsing to `fields`
    pub fn allow<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.allow_fields = Some(fields.into_iter().collect());
        self
    }

    /// Spec returned for missing or empty input
    pub fn defaults(mut self, defaults: SortSpec<D>) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

/// Options for [`parse_sort`](super::parse_sort)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Fields outside this set are dropped. `None` allows every field.
    #[serde(default)]
    pub allow_fields: Option<AllowFields>,
    /// Returned verbatim for missing or empty input
    #[serde(default)]
    pub defaults: Option<SortSpec<DirectionToken>>,
    /// Encoding of the parsed directions
    #[serde(default)]
    pub flavor: Flavor,
}

impl ParseOptions {
    /// Mongo flavor, no allow-list and no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the direction encoding
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Restrict parsing to `fields`
    pub fn allow<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.allow_fields = Some(fields.into_iter().collect());
        self
    }

    /// Spec returned for missing or empty input
    pub fn defaults(mut self, defaults: SortSpec<DirectionToken>) -> Self {
        self.defaults = Some(defaults);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ParseOptions = serde_json::from_value(serde_json::json!({
            "allow_fields": ["name", "age"],
            "defaults": {"age": -1},
            "flavor": "mysql",
        }))
        .unwrap();

        assert_eq!(options.flavor, Flavor::Sql);
        let allow = options.allow_fields.unwrap();
        assert!(allow.allows("name"));
        assert!(!allow.allows("Name"));
        assert_eq!(options.defaults.unwrap().len(), 1);
    }

    #[test]
    fn test_empty_options_object() {
        let options: ParseOptions =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(options, ParseOptions::default());
    }
}
