//! Display sink abstraction

/// Render target for phrases and timer labels.
///
/// The actual rendering (text component, DOM node, terminal) is the
/// host's concern; components only push formatted text.
pub trait DisplaySink {
    /// Show the given text, replacing whatever was shown before
    fn display(&mut self, text: &str);
}

impl DisplaySink for String {
    fn display(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
