//! Ordered field → direction mapping produced by the parser

use crate::direction::{
    DirectionToken, EncodedDirection, MongoDirection, SortDirection,
    SqlDirection,
};
use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Serialize};

/// A single field of a sort specification with its logical direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortField {
    /// Field name as it appeared in the sort string
    pub field: String,
    /// Logical direction, independent of flavor
    pub direction: SortDirection,
}

impl SortField {
    /// Field with a direction
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Insertion-ordered mapping from field name to encoded direction
///
/// Declaration order is tie-break precedence. Re-inserting a field replaces
/// its direction but keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec<D = DirectionToken> {
    fields: IndexMap<String, D>,
}

impl<D> Default for SortSpec<D> {
    fn default() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }
}

impl<D> SortSpec<D> {
    /// Empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction for `field`, returning the previous one
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        direction: D,
    ) -> Option<D> {
        self.fields.insert(field.into(), direction)
    }

    /// Direction for `field`
    pub fn get(&self, field: &str) -> Option<&D> {
        self.fields.get(field)
    }

    /// Whether `field` is part of the spec
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Position of `field` in declaration order
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.get_index_of(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there is nothing to sort by
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields and directions in declaration order
    pub fn iter(&self) -> Iter<'_, String, D> {
        self.fields.iter()
    }

    /// Field names in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Re-encode every direction, keeping field order
    pub fn map_directions<E>(
        &self,
        mut encode: impl FnMut(&D) -> E,
    ) -> SortSpec<E> {
        SortSpec {
            fields: self
                .fields
                .iter()
                .map(|(field, direction)| (field.clone(), encode(direction)))
                .collect(),
        }
    }
}

impl<D: EncodedDirection> SortSpec<D> {
    /// Logical view of the spec in declaration order
    pub fn directions(&self) -> Vec<SortField> {
        self.fields
            .iter()
            .map(|(field, direction)| {
                SortField::new(field.clone(), direction.direction())
            })
            .collect()
    }

    /// Re-encode every direction as `1` / `-1`
    pub fn to_mongo(&self) -> SortSpec<MongoDirection> {
        self.map_directions(|d| d.direction().into())
    }

    /// Re-encode every direction as `ASC` / `DESC`
    pub fn to_sql(&self) -> SortSpec<SqlDirection> {
        self.map_directions(|d| d.direction().into())
    }
}

impl SortSpec<MongoDirection> {
    /// Sort document for a document-store driver, e.g. `{"age": -1, "name": 1}`
    pub fn to_document(&self) -> serde_json::Value {
        let document: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(field, direction)| {
                (field.clone(), serde_json::Value::from(direction.as_i32()))
            })
            .collect();
        serde_json::Value::Object(document)
    }
}

/// Identifier quoting used when rendering `ORDER BY` clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `"table"."column"`
    #[default]
    Ansi,
    /// `` `table`.`column` ``
    Backtick,
}

impl QuoteStyle {
    fn quote_char(self) -> char {
        match self {
            QuoteStyle::Ansi => '"',
            QuoteStyle::Backtick => '`',
        }
    }

    /// Quote a dotted field name segment by segment
    pub fn quote(self, field: &str) -> String {
        let q = self.quote_char();
        let mut doubled = String::with_capacity(2);
        doubled.push(q);
        doubled.push(q);

        field
            .split('.')
            .map(|segment| format!("{q}{}{q}", segment.replace(q, &doubled)))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl SortSpec<SqlDirection> {
    /// Body of an `ORDER BY` clause, or `None` when there is nothing to
    /// order by
    pub fn order_by(&self, style: QuoteStyle) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }

        let mut out = String::new();
        for (i, (field, direction)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&style.quote(field));
            out.push(' ');
            out.push_str(direction.as_str());
        }
        Some(out)
    }
}

impl<D, K: Into<String>> FromIterator<(K, D)> for SortSpec<D> {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut spec = SortSpec::new();
        for (field, direction) in iter {
            spec.insert(field, direction);
        }
        spec
    }
}

impl<D> IntoIterator for SortSpec<D> {
    type Item = (String, D);
    type IntoIter = IntoIter<String, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a SortSpec<D> {
    type Item = (&'a String, &'a D);
    type IntoIter = Iter<'a, String, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
