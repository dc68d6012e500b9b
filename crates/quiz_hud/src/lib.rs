//! # quiz_hud - Quiz HUD Components
//!
//! This crate provides the HUD-facing quiz behaviors:
//!
//! - Question phrase display keyed by a document path
//! - "Next question" activation trigger
//! - Mixin-on attribute toggler
//! - A per-user rig wiring document, display, trigger and timer
//!
//! Components are explicit state objects; the host dispatches named
//! events into them and drives them through per-frame ticks. Entity
//! lookups are injected through the [`TargetLookup`] trait rather than
//! read from a scene-wide registry.

pub mod buffer;
pub mod mixin;
pub mod next_question;
pub mod question_display;
pub mod rig;

pub mod prelude {
    pub use crate::buffer::TextBuffer;
    pub use crate::mixin::{MixinOn, MixinOnConfig};
    pub use crate::next_question::{NextQuestionConfig, NextQuestionTrigger};
    pub use crate::question_display::QuestionDisplay;
    pub use crate::rig::{QuizRig, SharedSink, TargetLookup};
}

pub use prelude::*;
