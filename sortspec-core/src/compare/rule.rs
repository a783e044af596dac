//! Per-key order rules

use super::value::ValueKind;
use crate::direction::SortDirection;
use crate::error::SortError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Caller-supplied comparison for a whole record pair
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Direction plus value kind, written `"+string"`, `"-number"`, `"+date"`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeclarativeRule {
    /// Applied to the ascending result
    pub direction: SortDirection,
    /// How the two values are read and ordered
    pub kind: ValueKind,
}

impl DeclarativeRule {
    /// Rule from its parts
    pub fn new(direction: SortDirection, kind: ValueKind) -> Self {
        Self { direction, kind }
    }

    /// Ascending rule for `kind`
    pub fn asc(kind: ValueKind) -> Self {
        Self::new(SortDirection::Ascending, kind)
    }

    /// Descending rule for `kind`
    pub fn desc(kind: ValueKind) -> Self {
        Self::new(SortDirection::Descending, kind)
    }
}

impl FromStr for DeclarativeRule {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = match s.chars().next() {
            Some('+') => SortDirection::Ascending,
            Some('-') => SortDirection::Descending,
            _ => return Err(SortError::InvalidRule(s.to_string())),
        };
        let kind = s[1..].parse()?;
        Ok(Self { direction, kind })
    }
}

impl TryFrom<String> for DeclarativeRule {
    type Error = SortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeclarativeRule> for String {
    fn from(rule: DeclarativeRule) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for DeclarativeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.prefix(), self.kind)
    }
}

/// How one key of an ordering spec compares two records
pub enum OrderRule<T> {
    /// Read the key's path off both records and compare by kind
    Declarative(DeclarativeRule),
    /// Decide the pair outright; later keys are not consulted
    Custom(CompareFn<T>),
}

impl<T> OrderRule<T> {
    /// Wrap a closure as a custom rule
    pub fn custom(
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        OrderRule::Custom(Arc::new(compare))
    }

    /// Ascending declarative rule
    pub fn asc(kind: ValueKind) -> Self {
        OrderRule::Declarative(DeclarativeRule::asc(kind))
    }

    /// Descending declarative rule
    pub fn desc(kind: ValueKind) -> Self {
        OrderRule::Declarative(DeclarativeRule::desc(kind))
    }

    /// Whether this rule is a closure
    pub fn is_custom(&self) -> bool {
        matches!(self, OrderRule::Custom(_))
    }
}

impl<T> Clone for OrderRule<T> {
    fn clone(&self) -> Self {
        match self {
            OrderRule::Declarative(rule) => OrderRule::Declarative(*rule),
            OrderRule::Custom(compare) => {
                OrderRule::Custom(Arc::clone(compare))
            }
        }
    }
}

impl<T> fmt::Debug for OrderRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderRule::Declarative(rule) => {
                f.debug_tuple("Declarative").field(rule).finish()
            }
            OrderRule::Custom(compare) => {
                let compare_type = std::any::type_name_of_val(&**compare);
                f.debug_tuple("Custom").field(&compare_type).finish()
            }
        }
    }
}

impl<T> From<DeclarativeRule> for OrderRule<T> {
    fn from(rule: DeclarativeRule) -> Self {
        OrderRule::Declarative(rule)
    }
}
