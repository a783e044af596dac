//! Sort string parser
//!
//! Sort strings come from untrusted query parameters, so parsing never
//! fails: malformed tokens and fields outside the allow-list are dropped and
//! the caller always gets a well-formed (possibly empty) [`SortSpec`].

use super::options::{AllowFields, ParseOptions, SortOptions};
use super::spec::SortSpec;
use crate::direction::{
    DirectionToken, MongoDirection, SortDirection, SqlDirection,
};
use tracing::{debug, trace};

/// Split a single comma-free token into its field name and direction
///
/// Returns `None` for blank tokens and for a bare `-` or `+`.
pub fn parse_token(token: &str) -> Option<(&str, SortDirection)> {
    if token.trim().is_empty() {
        return None;
    }

    let (field, direction) = if let Some(rest) = token.strip_prefix('-') {
        (rest.trim(), SortDirection::Descending)
    } else if let Some(rest) = token.strip_prefix('+') {
        (rest.trim(), SortDirection::Ascending)
    } else {
        (token.trim(), SortDirection::Ascending)
    };

    if field.is_empty() {
        return None;
    }
    Some((field, direction))
}

fn parse_with<D: Clone>(
    input: Option<&str>,
    allow_fields: Option<&AllowFields>,
    defaults: Option<&SortSpec<D>>,
    encode: impl Fn(SortDirection) -> D,
) -> SortSpec<D> {
    let input = match input {
        Some(input) if !input.is_empty() => input,
        _ => {
            debug!("Empty sort input, using defaults");
            return defaults.cloned().unwrap_or_default();
        }
    };

    let mut result = SortSpec::new();
    for token in input.split(',') {
        let Some((field, direction)) = parse_token(token) else {
            trace!("Dropping sort token {:?}", token);
            continue;
        };

        if let Some(allow) = allow_fields
            && !allow.allows(field)
        {
            debug!("Sort field {:?} is not allowed, dropping", field);
            continue;
        }

        result.insert(field, encode(direction));
    }
    result
}

/// Parse a sort string with the flavor selected in `options`
///
/// ```
/// use sortspec_core::{Flavor, ParseOptions, parse_sort};
///
/// let spec = parse_sort(
///     Some("-created_at,name"),
///     &ParseOptions::new().flavor(Flavor::Sql),
/// );
/// assert_eq!(
///     serde_json::to_string(&spec).unwrap(),
///     r#"{"created_at":"DESC","name":"ASC"}"#
/// );
/// ```
pub fn parse_sort(
    input: Option<&str>,
    options: &ParseOptions,
) -> SortSpec<DirectionToken> {
    let flavor = options.flavor;
    parse_with(
        input,
        options.allow_fields.as_ref(),
        options.defaults.as_ref(),
        |direction| flavor.encode(direction),
    )
}

/// Parse a sort string into `1` / `-1` directions
pub fn parse_sort_mongo(
    input: Option<&str>,
    options: &SortOptions<MongoDirection>,
) -> SortSpec<MongoDirection> {
    parse_with(
        input,
        options.allow_fields.as_ref(),
        options.defaults.as_ref(),
        MongoDirection::from,
    )
}

/// Parse a sort string into `ASC` / `DESC` directions
pub fn parse_sort_sql(
    input: Option<&str>,
    options: &SortOptions<SqlDirection>,
) -> SortSpec<SqlDirection> {
    parse_with(
        input,
        options.allow_fields.as_ref(),
        options.defaults.as_ref(),
        SqlDirection::from,
    )
}
