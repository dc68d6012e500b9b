//! Per-user quiz rig

use crate::next_question::NextQuestionTrigger;
use crate::question_display::QuestionDisplay;
use parking_lot::Mutex;
use quiz_core::{DisplaySink, DocPath, Document, QuizError, Result};
use quiz_timer::{CountdownTimer, TimerConfig, TimerEvent};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a display sink
pub type SharedSink = Arc<Mutex<dyn DisplaySink>>;

/// Resolves the entity belonging to a user/creator identifier.
///
/// Injected into the rig explicitly; there is no scene-wide registry to
/// query. The lookup must return a stable reference for a given user.
pub trait TargetLookup {
    /// The document attached to the user's entity, if any
    fn document_for(&self, user_id: &str) -> Option<Arc<Document>>;
}

/// Wires one user's quiz components together: the entity document, the
/// question display, the next-question trigger and the countdown timer.
///
/// The target document is resolved lazily on the first question
/// advancement, matching the lazy category initialization of the
/// selector. A lookup miss at that point is an explicit
/// [`QuizError::TargetMissing`] rather than a failure deep inside path
/// resolution.
pub struct QuizRig {
    user_id: String,
    lookup: Arc<dyn TargetLookup>,
    document: Option<Arc<Document>>,
    display: QuestionDisplay,
    trigger: NextQuestionTrigger,
    timer: CountdownTimer,
    question_sink: Option<SharedSink>,
    timer_label: Option<SharedSink>,
}

impl QuizRig {
    /// Create a rig for one user
    pub fn new(
        user_id: impl Into<String>,
        lookup: Arc<dyn TargetLookup>,
        category_spec: &str,
        timer_config: TimerConfig,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            lookup,
            document: None,
            display: QuestionDisplay::new(),
            trigger: NextQuestionTrigger::new(category_spec),
            timer: CountdownTimer::new(timer_config),
            question_sink: None,
            timer_label: None,
        }
    }

    /// Attach the sink showing question phrases
    pub fn with_question_sink(mut self, sink: SharedSink) -> Self {
        self.question_sink = Some(sink);
        self
    }

    /// Attach the sink showing the countdown label
    pub fn with_timer_label(mut self, sink: SharedSink) -> Self {
        self.timer_label = Some(sink);
        self
    }

    /// The user this rig belongs to
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The countdown timer
    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// Mutable access to the countdown timer
    pub fn timer_mut(&mut self) -> &mut CountdownTimer {
        &mut self.timer
    }

    /// The next-question trigger
    pub fn trigger(&self) -> &NextQuestionTrigger {
        &self.trigger
    }

    /// Mutable access to the trigger (to invalidate the selector cache)
    pub fn trigger_mut(&mut self) -> &mut NextQuestionTrigger {
        &mut self.trigger
    }

    /// The currently displayed question path (empty before the first
    /// question)
    pub fn current_question(&self) -> &DocPath {
        self.display.path()
    }

    /// Dispatch a named host event into the rig's components
    pub fn handle_event(&mut self, event: &str) -> Result<()> {
        self.handle_event_with_rng(event, &mut rand::thread_rng())
    }

    /// Dispatch a named host event, drawing randomness from `rng`
    pub fn handle_event_with_rng<R: Rng>(&mut self, event: &str, rng: &mut R) -> Result<()> {
        self.timer.handle_event(event);

        // resolve the target only for the trigger's own event, so
        // unrelated events never fail on a missing target
        if event == self.trigger.config().on {
            let doc = self.resolve_document()?;
            if let Some(path) = self.trigger.handle_event(event, &doc, rng)? {
                self.display.set_path(path);
                self.refresh_display(&doc);
            }
        }
        Ok(())
    }

    /// Set the question path directly (as the host does when syncing an
    /// externally chosen question) and refresh the display
    pub fn set_question(&mut self, path: DocPath) -> Result<()> {
        let doc = self.resolve_document()?;
        self.display.set_path(path);
        self.refresh_display(&doc);
        Ok(())
    }

    /// Advance the rig by one host tick, returning any completion
    /// events the timer emitted
    pub fn tick(&mut self, time: f64, delta: f64) -> Vec<TimerEvent> {
        match &self.timer_label {
            Some(sink) => {
                let mut guard = sink.lock();
                self.timer.tick(time, delta, Some(&mut *guard));
            }
            None => self.timer.tick(time, delta, None),
        }
        self.timer.drain_events()
    }

    fn resolve_document(&mut self) -> Result<Arc<Document>> {
        if let Some(doc) = &self.document {
            return Ok(doc.clone());
        }
        let doc = self
            .lookup
            .document_for(&self.user_id)
            .ok_or_else(|| QuizError::TargetMissing(self.user_id.clone()))?;
        self.document = Some(doc.clone());
        Ok(doc)
    }

    fn refresh_display(&mut self, doc: &Document) {
        let shown = match &self.question_sink {
            Some(sink) => self.display.apply(doc, &mut *sink.lock()),
            None => self.display.phrase(doc).is_some(),
        };
        if shown {
            self.timer.start();
        }
    }
}

// Manual Debug implementation (skip lookup and sinks)
impl fmt::Debug for QuizRig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizRig")
            .field("user_id", &self.user_id)
            .field("current_question", self.display.path())
            .field("timer_phase", &self.timer.phase())
            .finish()
    }
}
