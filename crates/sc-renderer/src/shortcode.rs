//! Shortcode handler trait.

use crate::{DefaultsError, RenderContext, ShortcodeAttrs, ShortcodeOutput};

/// Handler for a bracket shortcode: `[name attrs]content[/name]` or `[name attrs/]`.
///
/// Handlers are pure functions of their inputs: merged attributes, the
/// already-rendered content of their children, and the capabilities in the
/// [`RenderContext`]. They are shared across threads, so they take `&self`.
///
/// # Example
///
/// ```
/// use sc_renderer::{
///     RenderContext, Shortcode, ShortcodeAttrs, ShortcodeOutput, escape_html,
/// };
///
/// struct Kbd;
///
/// impl Shortcode for Kbd {
///     fn name(&self) -> &str { "kbd" }
///
///     fn render(
///         &self,
///         _attrs: &ShortcodeAttrs,
///         content: &str,
///         _ctx: &RenderContext<'_>,
///     ) -> ShortcodeOutput {
///         ShortcodeOutput::html(format!("<kbd>{}</kbd>", escape_html(content)))
///     }
/// }
/// ```
pub trait Shortcode: Send + Sync {
    /// Tag name matched case-sensitively against `[name ...]`.
    fn name(&self) -> &str;

    /// Stock default attributes used by `RegistryConfig::default()`.
    fn default_attrs(&self) -> ShortcodeAttrs {
        ShortcodeAttrs::new()
    }

    /// Check configured default attributes before any rendering happens.
    fn validate_defaults(&self, _defaults: &ShortcodeAttrs) -> Result<(), DefaultsError> {
        Ok(())
    }

    /// Render one occurrence.
    ///
    /// `attrs` already has the configured defaults merged in. `content` is the
    /// rendered output of the children (empty for self-closing tags).
    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput;
}
