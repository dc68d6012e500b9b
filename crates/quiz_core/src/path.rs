//! Deep-path lookup over nested JSON values

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step of a document path: a mapping key or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Index into a sequence
    Index(usize),
    /// Key into a mapping
    Key(String),
}

impl Segment {
    /// Create a key segment
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Create an index segment
    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Ordered sequence of segments locating a value inside nested data
pub type DocPath = Vec<Segment>;

/// Join a path back into its dotted form (for logs and display)
pub fn join_path(path: &[Segment]) -> String {
    let parts: Vec<String> = path.iter().map(|seg| seg.to_string()).collect();
    parts.join(".")
}

/// Look up a value by path, returning `default` when any step is absent.
///
/// The empty path returns `doc` itself. Values that are present but
/// "falsy" (empty string, 0, null, empty array) are still present; only
/// a missing key or out-of-range index yields the default. Keys that
/// parse as integers may index sequences and index segments look up
/// their decimal form in mappings, so untyped path tokens keep working
/// against either container.
pub fn resolve<'a>(doc: &'a Value, path: &[Segment], default: &'a Value) -> &'a Value {
    let mut current = doc;
    for segment in path {
        let next = match (current, segment) {
            (Value::Object(map), Segment::Key(key)) => map.get(key.as_str()),
            (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()),
            (Value::Array(items), Segment::Index(index)) => items.get(*index),
            (Value::Array(items), Segment::Key(key)) => {
                key.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return default,
        }
    }
    current
}

static NULL: Value = Value::Null;

/// Look up a string value by path
pub fn resolve_str<'a>(doc: &'a Value, path: &[Segment]) -> Option<&'a str> {
    resolve(doc, path, &NULL).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: &[&str]) -> DocPath {
        segments.iter().map(|s| Segment::key(*s)).collect()
    }

    #[test]
    fn test_empty_path_returns_doc() {
        let doc = json!({"a": 1});
        assert_eq!(resolve(&doc, &[], &NULL), &doc);

        let scalar = json!(42);
        assert_eq!(resolve(&scalar, &[], &NULL), &scalar);
    }

    #[test]
    fn test_nested_lookup() {
        let doc = json!({"a": {"b": 5}});
        let default = json!(-1);

        assert_eq!(resolve(&doc, &path(&["a", "b"]), &default), &json!(5));
        assert_eq!(resolve(&doc, &path(&["a", "c"]), &default), &default);
    }

    #[test]
    fn test_missing_intermediate_key() {
        let doc = json!({"a": {"b": {"c": 1}}});
        let default = json!("fallback");

        assert_eq!(resolve(&doc, &path(&["x", "b", "c"]), &default), &default);
        assert_eq!(resolve(&doc, &path(&["a", "x", "c"]), &default), &default);
    }

    #[test]
    fn test_non_composite_yields_default() {
        let doc = json!(7);
        let default = json!("d");
        assert_eq!(resolve(&doc, &path(&["a"]), &default), &default);
    }

    #[test]
    fn test_falsy_values_are_present() {
        let doc = json!({"empty": "", "zero": 0, "null": null, "list": []});
        let default = json!("default");

        assert_eq!(resolve(&doc, &path(&["empty"]), &default), &json!(""));
        assert_eq!(resolve(&doc, &path(&["zero"]), &default), &json!(0));
        assert_eq!(resolve(&doc, &path(&["null"]), &default), &Value::Null);
        assert_eq!(resolve(&doc, &path(&["list"]), &default), &json!([]));
    }

    #[test]
    fn test_index_segments() {
        let doc = json!({"items": ["a", "b", "c"]});
        let default = json!(null);

        let p = vec![Segment::key("items"), Segment::index(1)];
        assert_eq!(resolve(&doc, &p, &default), &json!("b"));

        let out_of_range = vec![Segment::key("items"), Segment::index(9)];
        assert_eq!(resolve(&doc, &out_of_range, &default), &default);
    }

    #[test]
    fn test_numeric_key_indexes_sequence() {
        let doc = json!({"items": ["a", "b", "c"]});
        let p = vec![Segment::key("items"), Segment::key("2")];
        assert_eq!(resolve(&doc, &p, &NULL), &json!("c"));
    }

    #[test]
    fn test_resolve_str() {
        let doc = json!({"quiz": {"easy": ["Who?", "What?"]}});
        let p = vec![Segment::key("quiz"), Segment::key("easy"), Segment::index(0)];

        assert_eq!(resolve_str(&doc, &p), Some("Who?"));
        assert_eq!(resolve_str(&doc, &path(&["quiz", "hard"])), None);
    }

    #[test]
    fn test_join_path() {
        let p = vec![Segment::key("quiz"), Segment::key("easy"), Segment::index(3)];
        assert_eq!(join_path(&p), "quiz.easy.3");
        assert_eq!(join_path(&[]), "");
    }
}
