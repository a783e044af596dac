//! The `parse` and `sort` commands

use anyhow::{Context, bail};
use serde_json::Value;
use sortspec_core::{
    OrderingSpec, QuoteStyle, SortSpec, parse_sort, sorted_by_keys,
};
use tracing::debug;

use super::context::SortContext;

/// Parse `sort` with the context's options.
pub fn parse_command(sort: &str, ctx: &SortContext) -> SortSpec {
    parse_sort(Some(sort), &ctx.options)
}

/// Render the `parse` command's output: the spec as JSON, or the body of an
/// `ORDER BY` clause when a quote style is given.
pub fn render_parse(
    sort: &str,
    ctx: &SortContext,
    order_by: Option<QuoteStyle>,
) -> anyhow::Result<String> {
    let spec = parse_command(sort, ctx);
    match order_by {
        Some(style) => Ok(spec.to_sql().order_by(style).unwrap_or_default()),
        None => {
            serde_json::to_string(&spec).context("failed to encode sort spec")
        }
    }
}

/// Sort the JSON array in `input` by `sort` and return it pretty printed.
pub fn sort_json(
    input: &str,
    sort: &str,
    ctx: &SortContext,
) -> anyhow::Result<String> {
    let records: Value =
        serde_json::from_str(input).context("input is not valid JSON")?;
    let Value::Array(records) = records else {
        bail!("input must be a JSON array of records");
    };

    let spec = parse_command(sort, ctx);
    let ordering = OrderingSpec::<Value>::from_sort_spec(&spec, |field| {
        ctx.kind_of(field)
    });
    debug!(
        records = records.len(),
        keys = ordering.len(),
        "Sorting records"
    );

    let sorted = sorted_by_keys(records, &ordering);
    serde_json::to_string_pretty(&sorted).context("failed to encode records")
}
