//! # quiz_core - Quiz Suite Core
//!
//! Foundational types shared by the quiz components:
//! - Deep-path lookup over nested JSON documents
//! - Category specification parsing
//! - The entity-attached document wrapper
//! - Shared error type and display-sink abstraction
//!
//! Lookups never fail: absence of data yields a caller-supplied default,
//! so the components built on top degrade instead of crashing.

pub mod category;
pub mod display;
pub mod document;
pub mod error;
pub mod path;

pub use category::*;
pub use display::*;
pub use document::*;
pub use error::*;
pub use path::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::category::parse_categories;
    pub use crate::display::DisplaySink;
    pub use crate::document::Document;
    pub use crate::error::{QuizError, Result};
    pub use crate::path::{join_path, resolve, resolve_str, DocPath, Segment};
}
