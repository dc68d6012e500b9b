//! In-memory display sink

use quiz_core::DisplaySink;

/// Display sink that records what was shown, for tests and demos
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
    history: Vec<String>,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Everything displayed so far, in order
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl DisplaySink for TextBuffer {
    fn display(&mut self, text: &str) {
        self.text = text.to_string();
        self.history.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_history() {
        let mut buffer = TextBuffer::new();
        buffer.display("first");
        buffer.display("second");

        assert_eq!(buffer.text(), "second");
        assert_eq!(buffer.history(), &["first".to_string(), "second".to_string()]);
    }
}
