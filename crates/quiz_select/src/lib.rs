//! # quiz_select - Weighted Question Selection
//!
//! Picks the next question uniformly across several variable-length
//! categories by pretending the categories form one long flattened
//! array: an offset table of cumulative category lengths maps a flat
//! random index back to a (category, local index) pair. Categories with
//! more questions are proportionally more likely to be drawn from.

pub mod selector;

pub use selector::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::selector::QuestionSelector;
}
