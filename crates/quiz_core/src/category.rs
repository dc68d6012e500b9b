//! Category specification parsing

use crate::path::{DocPath, Segment};

/// Parse a delimited category specification into paths.
///
/// Semicolons separate categories, dots separate path segments within a
/// category; surrounding whitespace on each category is trimmed.
/// Segments are opaque tokens at this layer: numeric-looking segments
/// stay keys and only become sequence indices at lookup time. Empty
/// input and empty segments pass through structurally.
pub fn parse_categories(spec: &str) -> Vec<DocPath> {
    spec.split(';')
        .map(|category| {
            category
                .trim()
                .split('.')
                .map(Segment::from)
                .collect()
        })
        .collect()
}
