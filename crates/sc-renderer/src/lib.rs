//! Bracket shortcode engine.
//!
//! Expands WordPress-style shortcodes embedded in text or HTML:
//!
//! ```text
//! [name attr="value" flag]content[/name]
//! [name attr=value /]
//! ```
//!
//! # Architecture
//!
//! Input goes through three stages:
//! - [`scan`]: splits text into literal runs and open/close tag tokens
//! - [`parse`]: builds a tree with an explicit stack, so unbalanced markup
//!   degrades to literal text instead of failing
//! - [`render`]: folds the tree bottom-up, calling the [`Shortcode`] handler
//!   registered for each tag with its already-rendered children
//!
//! Handlers live in a [`Registry`], built from a [`RegistryConfig`] that can
//! disable shortcodes and supply default attributes. Side capabilities (path
//! resolution and randomness) are passed in through a [`RenderContext`].
//!
//! # Example
//!
//! ```
//! use sc_renderer::{Registry, ShortcodeRenderer, SiteResolver};
//!
//! let renderer = ShortcodeRenderer::new(Registry::builtin())
//!     .with_resolver(SiteResolver::new("https://example.com/"));
//!
//! let html = renderer.render(r#"[button path="docs" class="cta"]Read[/button]"#);
//! assert_eq!(
//!     html,
//!     r#"<a href="https://example.com/docs" class="cta button" title="Read"><span>Read</span></a>"#
//! );
//! ```

mod attrs;
mod context;
mod error;
mod html;
mod output;
mod registry;
mod renderer;
mod scanner;
mod shortcode;
pub mod shortcodes;
mod tree;

pub use attrs::{FLAG_VALUE, ShortcodeAttrs};
pub use context::{
    FRONT_PAGE, PathResolver, RandomSource, RenderContext, SiteResolver, ThreadRandom,
};
pub use error::{DefaultsError, RegistryError, ResolveError};
pub use html::escape_html;
pub use output::ShortcodeOutput;
pub use registry::{
    HandlerSpec, RegisteredShortcode, Registry, RegistryConfig, ShortcodeSettings,
};
pub use renderer::{ShortcodeRenderer, render, render_node};
pub use scanner::{Token, scan};
pub use shortcode::Shortcode;
pub use tree::{MAX_DEPTH, Node, ShortcodeNode, build_tree, parse};
