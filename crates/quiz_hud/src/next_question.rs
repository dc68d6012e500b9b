//! Next-question activation trigger

use quiz_core::{DocPath, Document, Result};
use quiz_select::QuestionSelector;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Next-question trigger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NextQuestionConfig {
    /// Activation event name
    pub on: String,
}

impl Default for NextQuestionConfig {
    fn default() -> Self {
        Self {
            on: "click".to_string(),
        }
    }
}

/// Advances to a random question when its activation event fires.
///
/// Owns the question selector; the returned path is applied by the host
/// to the target's question display.
#[derive(Debug)]
pub struct NextQuestionTrigger {
    config: NextQuestionConfig,
    selector: QuestionSelector,
}

impl NextQuestionTrigger {
    /// Create a trigger with the default ("click") activation event
    pub fn new(category_spec: &str) -> Self {
        Self::with_config(category_spec, NextQuestionConfig::default())
    }

    /// Create a trigger with an explicit configuration
    pub fn with_config(category_spec: &str, config: NextQuestionConfig) -> Self {
        Self {
            config,
            selector: QuestionSelector::new(category_spec),
        }
    }

    /// The configuration
    pub fn config(&self) -> &NextQuestionConfig {
        &self.config
    }

    /// The owned selector
    pub fn selector(&self) -> &QuestionSelector {
        &self.selector
    }

    /// Mutable access to the selector (to invalidate its cache)
    pub fn selector_mut(&mut self) -> &mut QuestionSelector {
        &mut self.selector
    }

    /// On a matching event, select the next question from `doc`.
    ///
    /// Returns `Ok(None)` for non-matching events; selection failures
    /// (no questions available) surface as errors.
    pub fn handle_event<R: Rng>(
        &mut self,
        event: &str,
        doc: &Document,
        rng: &mut R,
    ) -> Result<Option<DocPath>> {
        if event != self.config.on {
            return Ok(None);
        }
        self.selector.select_next(doc, rng).map(Some)
    }
}
