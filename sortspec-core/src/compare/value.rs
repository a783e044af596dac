//! Field values and kind-specific ordering
//!
//! Values read off records are loosely typed. A declared [`ValueKind`]
//! decides how two values are ordered; values that do not fit the declared
//! kind cannot be ordered and tie.

use crate::error::SortError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Value found at a field path
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Text, compared by code point
    Str(Cow<'a, str>),
    /// Any JSON or Rust number, widened to `f64`
    Number(f64),
    /// `false` before `true`
    Bool(bool),
    /// Point in time
    Date(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Borrow a JSON scalar. Nulls, arrays and objects have no sortable value.
    pub fn from_json(value: &'a serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => {
                Some(FieldValue::Str(Cow::Borrowed(s.as_str())))
            }
            serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number),
            serde_json::Value::Bool(b) => Some(FieldValue::Bool(*b)),
            _ => None,
        }
    }

    /// The text, when this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The number, when this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The flag, when this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Milliseconds since the epoch
    ///
    /// Accepts dates, RFC 3339 strings, `YYYY-MM-DD` strings (midnight UTC)
    /// and numbers already holding epoch milliseconds.
    pub fn as_timestamp_millis(&self) -> Option<i64> {
        match self {
            FieldValue::Date(date) => Some(date.timestamp_millis()),
            FieldValue::Number(n) if n.is_finite() => Some(*n as i64),
            FieldValue::Str(s) => parse_date(s).map(|d| d.timestamp_millis()),
            _ => None,
        }
    }
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<String> for FieldValue<'_> {
    fn from(value: String) -> Self {
        FieldValue::Str(Cow::Owned(value))
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(Cow::Borrowed(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<f32> for FieldValue<'_> {
    fn from(value: f32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

/// Declared type of a sort key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Unicode code-point order
    #[default]
    String,
    /// Numeric order; `NaN` does not compare
    Number,
    /// `false` before `true`
    Boolean,
    /// Millisecond timestamp order
    Date,
}

impl ValueKind {
    /// Name used in rules and config files
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
        }
    }

    /// Ascending order of two values under this kind
    ///
    /// `None` when either value does not fit the kind or the numbers are
    /// not comparable (NaN).
    pub fn compare(
        self,
        a: &FieldValue<'_>,
        b: &FieldValue<'_>,
    ) -> Option<Ordering> {
        match self {
            ValueKind::String => Some(a.as_str()?.cmp(b.as_str()?)),
            ValueKind::Number => a.as_number()?.partial_cmp(&b.as_number()?),
            ValueKind::Boolean => Some(a.as_bool()?.cmp(&b.as_bool()?)),
            ValueKind::Date => {
                Some(a.as_timestamp_millis()?.cmp(&b.as_timestamp_millis()?))
            }
        }
    }
}

impl FromStr for ValueKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ValueKind::String),
            "number" => Ok(ValueKind::Number),
            "boolean" => Ok(ValueKind::Boolean),
            "date" => Ok(ValueKind::Date),
            other => Err(SortError::UnknownValueKind(other.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
