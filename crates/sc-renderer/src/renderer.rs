//! Shortcode rendering.
//!
//! Rendering is a bottom-up fold over the tree: children first, then the
//! node's handler. Handler output is final and never re-scanned.

use crate::tree::{self, Node, ShortcodeNode};
use crate::{
    PathResolver, RandomSource, Registry, RenderContext, ShortcodeOutput, SiteResolver,
    ThreadRandom,
};

/// Expand every shortcode in `input`.
///
/// Unknown and disabled shortcodes are emitted as written, with recognized
/// shortcodes inside them still expanded. Malformed markup never fails.
///
/// # Example
///
/// ```
/// use sc_renderer::{Registry, RenderContext, SiteResolver, ThreadRandom, render};
///
/// let registry = Registry::builtin();
/// let resolver = SiteResolver::new("https://example.com/");
/// let ctx = RenderContext::new(&resolver, &ThreadRandom);
///
/// let html = render("[highlight]new[/highlight] and [unknown]x[/unknown]", &registry, &ctx);
/// assert_eq!(html, r#"<span class=" highlight">new</span> and [unknown]x[/unknown]"#);
/// ```
#[must_use]
pub fn render(input: &str, registry: &Registry, ctx: &RenderContext<'_>) -> String {
    if !input.contains('[') {
        return input.to_owned();
    }

    let nodes = tree::parse(input);
    let mut out = String::with_capacity(input.len());
    for node in &nodes {
        render_into(node, registry, ctx, &mut out);
    }
    out
}

/// Render a single node and its subtree.
#[must_use]
pub fn render_node(node: &Node, registry: &Registry, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    render_into(node, registry, ctx, &mut out);
    out
}

fn render_into(node: &Node, registry: &Registry, ctx: &RenderContext<'_>, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Shortcode(shortcode) => {
            let mut content = String::new();
            for child in &shortcode.children {
                render_into(child, registry, ctx, &mut content);
            }

            let Some(entry) = registry.resolve(&shortcode.name).filter(|e| e.is_enabled()) else {
                tracing::debug!(name = %shortcode.name, "Passing through unrecognized or disabled shortcode");
                push_literal(shortcode, &content, out);
                return;
            };

            let attrs = shortcode.attrs.merged_with_defaults(entry.defaults());
            match entry.handler().render(&attrs, &content, ctx) {
                ShortcodeOutput::Html(html) => out.push_str(&html),
                ShortcodeOutput::Skip => {
                    tracing::debug!(name = %shortcode.name, "Shortcode declined, passing through");
                    push_literal(shortcode, &content, out);
                }
            }
        }
    }
}

/// Emit a shortcode as written, around its rendered content.
fn push_literal(shortcode: &ShortcodeNode, content: &str, out: &mut String) {
    out.push_str(&shortcode.open_tag);
    if let Some(close_tag) = &shortcode.close_tag {
        out.push_str(content);
        out.push_str(close_tag);
    }
}

/// Registry plus owned capabilities, for callers rendering many texts.
///
/// # Example
///
/// ```
/// use sc_renderer::{Registry, ShortcodeRenderer, SiteResolver};
///
/// let renderer = ShortcodeRenderer::new(Registry::builtin())
///     .with_resolver(SiteResolver::new("https://example.com/"));
///
/// assert_eq!(
///     renderer.render("[link path=\"docs\"]Docs[/link]"),
///     r#"<a href="https://example.com/docs" title="Docs">Docs</a>"#
/// );
/// ```
pub struct ShortcodeRenderer {
    registry: Registry,
    resolver: Box<dyn PathResolver>,
    random: Box<dyn RandomSource>,
}

impl ShortcodeRenderer {
    /// Create a renderer resolving paths against `/` with thread-local randomness.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            resolver: Box::new(SiteResolver::default()),
            random: Box::new(ThreadRandom),
        }
    }

    /// Set the path resolver.
    #[must_use]
    pub fn with_resolver<R: PathResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Set the randomness source.
    #[must_use]
    pub fn with_random<R: RandomSource + 'static>(mut self, random: R) -> Self {
        self.random = Box::new(random);
        self
    }

    /// The registry used for lookups.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Expand every shortcode in `input`.
    #[must_use]
    pub fn render(&self, input: &str) -> String {
        let ctx = RenderContext::new(self.resolver.as_ref(), self.random.as_ref());
        render(input, &self.registry, &ctx)
    }
}
