//! Ordering specifications: ordered key → rule mappings

use super::path::FieldPath;
use super::rule::{DeclarativeRule, OrderRule};
use super::value::ValueKind;
use crate::direction::EncodedDirection;
use crate::error::Result;
use crate::parse::SortSpec;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt;

/// A key of an ordering spec with its pre-split path
pub struct OrderKey<T> {
    /// Path read off each record
    pub path: FieldPath,
    /// How the values at `path` are compared
    pub rule: OrderRule<T>,
}

impl<T> Clone for OrderKey<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            rule: self.rule.clone(),
        }
    }
}

impl<T> fmt::Debug for OrderKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderKey")
            .field("path", &self.path.as_str())
            .field("rule", &self.rule)
            .finish()
    }
}

/// Insertion-ordered mapping from key to [`OrderRule`]
///
/// The first key is the primary sort; each later key only breaks ties left
/// by the keys before it. Re-declaring a key replaces its rule in place.
pub struct OrderingSpec<T> {
    keys: IndexMap<String, OrderKey<T>>,
}

impl<T> OrderingSpec<T> {
    /// Empty spec; every pair compares equal
    pub fn new() -> Self {
        Self {
            keys: IndexMap::new(),
        }
    }

    /// Set the rule for `key`
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        rule: impl Into<OrderRule<T>>,
    ) {
        let key = key.into();
        let path = FieldPath::parse(&key);
        self.keys.insert(
            key,
            OrderKey {
                path,
                rule: rule.into(),
            },
        );
    }

    /// Add a rule for `key`
    pub fn by(
        mut self,
        key: impl Into<String>,
        rule: impl Into<OrderRule<T>>,
    ) -> Self {
        self.insert(key, rule);
        self
    }

    /// Add a declarative rule written as `"+string"`, `"-number"`, ...
    pub fn declare(
        mut self,
        key: impl Into<String>,
        rule: &str,
    ) -> Result<Self> {
        let rule: DeclarativeRule = rule.parse()?;
        self.insert(key, rule);
        Ok(self)
    }

    /// Add a custom comparison that decides every pair it sees
    pub fn custom(
        mut self,
        key: impl Into<String>,
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.insert(key, OrderRule::custom(compare));
        self
    }

    /// Build a spec from `(key, "+kind")` pairs
    pub fn from_declarations<K, S>(
        declarations: impl IntoIterator<Item = (K, S)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        S: AsRef<str>,
    {
        declarations
            .into_iter()
            .try_fold(Self::new(), |spec, (key, rule)| {
                spec.declare(key, rule.as_ref())
            })
    }

    /// Turn a parsed sort spec into declarative rules
    ///
    /// `kind_of` supplies the value kind for each field; field order and
    /// directions are kept.
    pub fn from_sort_spec<D: EncodedDirection>(
        spec: &SortSpec<D>,
        kind_of: impl Fn(&str) -> ValueKind,
    ) -> Self {
        let mut ordering = Self::new();
        for (field, direction) in spec {
            let rule =
                DeclarativeRule::new(direction.direction(), kind_of(field));
            ordering.insert(field.as_str(), rule);
        }
        ordering
    }

    /// Rule declared for `key`
    pub fn get(&self, key: &str) -> Option<&OrderRule<T>> {
        self.keys.get(key).map(|k| &k.rule)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is declared
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in tie-break order
    pub fn keys(&self) -> impl Iterator<Item = &OrderKey<T>> + '_ {
        self.keys.values()
    }

    /// Keys and rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderRule<T>)> + '_ {
        self.keys.iter().map(|(key, k)| (key.as_str(), &k.rule))
    }
}

impl<T> Default for OrderingSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrderingSpec<T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<T> fmt::Debug for OrderingSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
