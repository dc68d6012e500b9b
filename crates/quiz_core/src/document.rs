//! Entity-attached JSON document

use crate::error::Result;
use crate::path::{resolve, resolve_str, Segment};
use serde_json::{Map, Value};

/// Read-only nested document associated with an entity.
///
/// Components only ever read from a document; there is no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Create an empty document (empty JSON object)
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap an already-parsed value
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse JSON source, degrading to the empty document on failure.
    ///
    /// Malformed source is reported through the log and the empty
    /// document is used, so downstream lookups fall back to their
    /// defaults instead of propagating the failure.
    pub fn from_json(src: &str) -> Self {
        match serde_json::from_str(src) {
            Ok(root) => Self { root },
            Err(err) => {
                log::error!("Unable to parse document: {}", err);
                Self::empty()
            }
        }
    }

    /// Parse JSON source, surfacing the parse error
    pub fn try_from_json(src: &str) -> Result<Self> {
        Ok(Self {
            root: serde_json::from_str(src)?,
        })
    }

    /// The document root value
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a value by path with a caller-supplied default
    pub fn get<'a>(&'a self, path: &[Segment], default: &'a Value) -> &'a Value {
        resolve(&self.root, path, default)
    }

    /// Look up a string value by path
    pub fn get_str(&self, path: &[Segment]) -> Option<&str> {
        resolve_str(&self.root, path)
    }

    /// Length of the sequence at `path` (0 if absent or not a sequence)
    pub fn sequence_len(&self, path: &[Segment]) -> usize {
        static EMPTY: Value = Value::Array(Vec::new());
        match self.get(path, &EMPTY) {
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
