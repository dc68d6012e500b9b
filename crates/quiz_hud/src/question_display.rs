//! Question phrase display

use quiz_core::{join_path, DisplaySink, DocPath, Document};

/// Displays the phrase found at the current question path.
///
/// The path is an attribute set by the host (normally from the
/// next-question trigger); [`apply`] resolves it against the entity's
/// document and pushes the phrase to the display sink. It reports
/// whether a phrase was shown, which the host uses to start the
/// creator's countdown.
///
/// [`apply`]: QuestionDisplay::apply
#[derive(Debug, Default)]
pub struct QuestionDisplay {
    path: DocPath,
}

impl QuestionDisplay {
    /// Create with an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// The current question path
    pub fn path(&self) -> &DocPath {
        &self.path
    }

    /// Set the question path attribute
    pub fn set_path(&mut self, path: DocPath) {
        self.path = path;
    }

    /// Resolve the phrase at the current path from `doc`. An empty path
    /// or an empty phrase yields None: there is nothing to ask yet.
    pub fn phrase<'a>(&self, doc: &'a Document) -> Option<&'a str> {
        if self.path.is_empty() {
            return None;
        }
        doc.get_str(&self.path).filter(|phrase| !phrase.is_empty())
    }

    /// Push the current phrase to `sink`. Returns true when a phrase
    /// was shown (the signal to start the question countdown).
    pub fn apply(&self, doc: &Document, sink: &mut dyn DisplaySink) -> bool {
        match self.phrase(doc) {
            Some(phrase) => {
                log::debug!("Showing question {}", join_path(&self.path));
                sink.display(phrase);
                true
            }
            None => false,
        }
    }
}
