//! Record access for declarative order rules

use super::path::FieldPath;
use super::value::FieldValue;

/// Anything whose fields can be read by path for sorting
///
/// A missing segment anywhere along the path means "no value", which makes
/// that key tie for the pair being compared.
pub trait SortRecord {
    /// Whether the record itself is absent (a null or `None` record)
    fn is_absent(&self) -> bool {
        false
    }

    /// Value stored at `path`, if any
    fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>>;
}

impl SortRecord for serde_json::Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>> {
        let mut current = self;
        for segment in path.segments() {
            current = match current {
                serde_json::Value::Object(map) => map.get(segment)?,
                serde_json::Value::Array(items) => {
                    items.get(segment.parse::<usize>().ok()?)?
                }
                _ => return None,
            };
        }
        FieldValue::from_json(current)
    }
}

impl<R: SortRecord> SortRecord for Option<R> {
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(|record| record.is_absent())
    }

    fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>> {
        self.as_ref()?.field(path)
    }
}

impl<R: SortRecord + ?Sized> SortRecord for &R {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>> {
        (**self).field(path)
    }
}

impl<R: SortRecord + ?Sized> SortRecord for Box<R> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>> {
        (**self).field(path)
    }
}
