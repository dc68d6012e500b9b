//! Error types for the quiz suite

use thiserror::Error;

/// Errors surfaced by the quiz components
#[derive(Debug, Error)]
pub enum QuizError {
    /// Source document failed to parse
    #[error("document parse failed: {0}")]
    BadDocument(#[from] serde_json::Error),
    /// Every configured category is empty
    #[error("no questions available (all categories empty)")]
    NoQuestions,
    /// Target entity lookup returned nothing
    #[error("target entity not found for '{0}'")]
    TargetMissing(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, QuizError>;
