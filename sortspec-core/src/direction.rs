//! Sort directions and their per-flavor encodings
//!
//! A direction is a logical value, [`SortDirection`]. What ends up in a
//! parsed [`SortSpec`](crate::SortSpec) is an *encoding* of it chosen by the
//! output [`Flavor`]: document stores take `1`/`-1`, SQL builders take
//! `ASC`/`DESC`.

use crate::error::SortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Logical sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering
    #[inline]
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Whether this is [`SortDirection::Descending`]
    pub fn is_descending(self) -> bool {
        self == SortDirection::Descending
    }

    /// The prefix character used for this direction in sort strings
    pub fn prefix(self) -> char {
        match self {
            SortDirection::Ascending => '+',
            SortDirection::Descending => '-',
        }
    }
}

/// Output flavor selecting the direction encoding table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// `1` / `-1`
    #[default]
    Mongo,
    /// `"ASC"` / `"DESC"`
    #[serde(alias = "mysql")]
    Sql,
}

impl Flavor {
    /// Encode `direction` the way this flavor's drivers expect
    pub fn encode(self, direction: SortDirection) -> DirectionToken {
        match self {
            Flavor::Mongo => DirectionToken::Numeric(direction.into()),
            Flavor::Sql => DirectionToken::Keyword(direction.into()),
        }
    }

    /// Lowercase flavor name
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Mongo => "mongo",
            Flavor::Sql => "sql",
        }
    }

    /// Resolve a flavor name, falling back to [`Flavor::Mongo`] when the
    /// name is not recognized.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown sort flavor {:?}, using mongo", name);
            Flavor::Mongo
        })
    }
}

impl FromStr for Flavor {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" => Ok(Flavor::Mongo),
            "sql" | "mysql" => Ok(Flavor::Sql),
            _ => Err(SortError::UnknownFlavor(s.to_string())),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric direction used by document-store sort parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum MongoDirection {
    /// `1`
    Asc,
    /// `-1`
    Desc,
}

impl MongoDirection {
    /// `1` or `-1`
    pub fn as_i32(self) -> i32 {
        match self {
            MongoDirection::Asc => 1,
            MongoDirection::Desc => -1,
        }
    }

    /// Logical direction
    pub fn direction(self) -> SortDirection {
        match self {
            MongoDirection::Asc => SortDirection::Ascending,
            MongoDirection::Desc => SortDirection::Descending,
        }
    }
}

impl From<SortDirection> for MongoDirection {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => MongoDirection::Asc,
            SortDirection::Descending => MongoDirection::Desc,
        }
    }
}

impl From<MongoDirection> for i64 {
    fn from(direction: MongoDirection) -> Self {
        direction.as_i32() as i64
    }
}

impl TryFrom<i64> for MongoDirection {
    type Error = SortError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MongoDirection::Asc),
            -1 => Ok(MongoDirection::Desc),
            other => Err(SortError::InvalidDirection(other.to_string())),
        }
    }
}

/// Keyword direction used by SQL `ORDER BY` clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlDirection {
    /// `"ASC"`
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    /// `"DESC"`
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SqlDirection {
    /// `"ASC"` or `"DESC"`
    pub fn as_str(self) -> &'static str {
        match self {
            SqlDirection::Asc => "ASC",
            SqlDirection::Desc => "DESC",
        }
    }

    /// Logical direction
    pub fn direction(self) -> SortDirection {
        match self {
            SqlDirection::Asc => SortDirection::Ascending,
            SqlDirection::Desc => SortDirection::Descending,
        }
    }
}

impl From<SortDirection> for SqlDirection {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SqlDirection::Asc,
            SortDirection::Descending => SqlDirection::Desc,
        }
    }
}

impl fmt::Display for SqlDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction encoded by a flavor chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectionToken {
    /// Document store encoding
    Numeric(MongoDirection),
    /// SQL encoding
    Keyword(SqlDirection),
}

impl DirectionToken {
    /// Logical direction
    pub fn direction(self) -> SortDirection {
        match self {
            DirectionToken::Numeric(d) => d.direction(),
            DirectionToken::Keyword(d) => d.direction(),
        }
    }

    /// Flavor that produced this token
    pub fn flavor(self) -> Flavor {
        match self {
            DirectionToken::Numeric(_) => Flavor::Mongo,
            DirectionToken::Keyword(_) => Flavor::Sql,
        }
    }
}

impl From<MongoDirection> for DirectionToken {
    fn from(direction: MongoDirection) -> Self {
        DirectionToken::Numeric(direction)
    }
}

impl From<SqlDirection> for DirectionToken {
    fn from(direction: SqlDirection) -> Self {
        DirectionToken::Keyword(direction)
    }
}

/// Encodings a [`SortSpec`](crate::SortSpec) value can carry
///
/// Lets generic code recover the logical direction from any encoding.
pub trait EncodedDirection: Copy + fmt::Debug + Send + Sync + 'static {
    /// Logical direction this value encodes
    fn direction(self) -> SortDirection;
}

impl EncodedDirection for SortDirection {
    fn direction(self) -> SortDirection {
        self
    }
}

impl EncodedDirection for MongoDirection {
    fn direction(self) -> SortDirection {
        MongoDirection::direction(self)
    }
}

impl EncodedDirection for SqlDirection {
    fn direction(self) -> SortDirection {
        SqlDirection::direction(self)
    }
}

impl EncodedDirection for DirectionToken {
    fn direction(self) -> SortDirection {
        DirectionToken::direction(self)
    }
}
