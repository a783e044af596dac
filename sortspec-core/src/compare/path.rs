//! Dotted field paths

use std::fmt;

/// A pre-split path into a record, e.g. `address.city` or `items[0].sku`
///
/// Segments are kept as strings; records decide whether a segment names an
/// object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Split `path` on dots and brackets
    ///
    /// An unclosed bracket is kept as part of the segment.
    pub fn parse(path: &str) -> Self {
        let mut segments = Vec::new();

        for part in path.split('.') {
            match part.find('[') {
                Some(open) if part.ends_with(']') => {
                    let head = &part[..open];
                    if !head.is_empty() {
                        segments.push(head.to_string());
                    }
                    for group in part[open..].split('[').skip(1) {
                        let index = group.strip_suffix(']').unwrap_or(group);
                        segments.push(index.to_string());
                    }
                }
                _ => segments.push(part.to_string()),
            }
        }

        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// The path as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Object keys and array indices, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the path has more than one segment
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        FieldPath::parse(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
