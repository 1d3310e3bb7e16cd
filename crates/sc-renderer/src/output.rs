//! Shortcode output types.

/// Output from a shortcode handler.
///
/// # Example
///
/// ```
/// use sc_renderer::ShortcodeOutput;
///
/// let output = ShortcodeOutput::html("<kbd>Ctrl+C</kbd>");
/// assert!(matches!(output, ShortcodeOutput::Html(_)));
///
/// // Decline: the tag is emitted as written in the source
/// let output = ShortcodeOutput::Skip;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortcodeOutput {
    /// Final markup. It is inserted as-is and never re-scanned.
    Html(String),
    /// Don't handle this occurrence (pass through unchanged).
    Skip,
}

impl ShortcodeOutput {
    /// Create an HTML output.
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
