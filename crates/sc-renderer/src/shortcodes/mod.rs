//! Built-in shortcode handlers.
//!
//! | Tag | Output |
//! |---|---|
//! | `button` | `<a … class="… button" … title="…"><span>content</span></a>` |
//! | `link` | `<a href="…" … title="…">content</a>` |
//! | `img` | `<img src="…" class="… img" alt="…">` |
//! | `item` | `<div>`/`<span>` wrapper |
//! | `clear` | `<div>`/`<span>` wrapper with `clearfix` |
//! | `dropcap` | `<span class="… dropcap">` |
//! | `highlight` | `<span class="… highlight">` |
//! | `quote` | `<span class="… quote">` with optional author |
//! | `random` | random alphanumeric text |
//! | `block` | configurable container element |

mod anchor;
mod image;
mod random;
mod span;
mod wrapper;

pub use anchor::{Button, Link};
pub use image::Image;
pub use random::{DEFAULT_LENGTH, MAX_LENGTH, Random};
pub use span::{Dropcap, Highlight, Quote};
pub use wrapper::{BLOCK_ELEMENTS, Block, Clear, Item};

use crate::Shortcode;

/// Names of the built-in shortcodes, in their stock configuration order.
pub const BUILTIN_NAMES: [&str; 10] = [
    "link",
    "random",
    "img",
    "clear",
    "dropcap",
    "item",
    "highlight",
    "button",
    "quote",
    "block",
];

/// Look up a built-in handler by name.
#[must_use]
pub fn builtin(name: &str) -> Option<Box<dyn Shortcode>> {
    let handler: Box<dyn Shortcode> = match name {
        "button" => Box::new(Button),
        "link" => Box::new(Link),
        "img" => Box::new(Image),
        "item" => Box::new(Item),
        "clear" => Box::new(Clear),
        "dropcap" => Box::new(Dropcap),
        "highlight" => Box::new(Highlight),
        "quote" => Box::new(Quote),
        "random" => Box::new(Random),
        "block" => Box::new(Block),
        _ => return None,
    };
    Some(handler)
}

/// Wrapper element selected by a `type` attribute: `s`/`span` or `div`.
fn wrapper_element(kind: Option<&str>) -> &'static str {
    match kind {
        Some("s" | "span") => "span",
        _ => "div",
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for handler tests.

    use crate::{
        RandomSource, RenderContext, ResolveError, Shortcode, ShortcodeAttrs, ShortcodeOutput,
    };

    pub(crate) const SITE: &str = "http://localhost/";

    pub(crate) fn resolve(path: &str) -> Result<String, ResolveError> {
        match path {
            "" | "<front>" => Ok(SITE.to_owned()),
            p if p.contains("://") => Ok(p.to_owned()),
            p => Ok(format!("{SITE}{}", p.trim_start_matches('/'))),
        }
    }

    /// Repeats `x`, so lengths are easy to check.
    pub(crate) struct FixedRandom;

    impl RandomSource for FixedRandom {
        fn next_string(&self, length: usize) -> String {
            "x".repeat(length)
        }
    }

    /// Render a handler with attributes parsed from source.
    pub(crate) fn render(handler: &dyn Shortcode, attrs: &str, content: &str) -> ShortcodeOutput {
        let resolver = resolve;
        let ctx = RenderContext::new(&resolver, &FixedRandom);
        let attrs = ShortcodeAttrs::parse(attrs).merged_with_defaults(&handler.default_attrs());
        handler.render(&attrs, content, &ctx)
    }

    pub(crate) fn html(handler: &dyn Shortcode, attrs: &str, content: &str) -> String {
        match render(handler, attrs, content) {
            ShortcodeOutput::Html(html) => html,
            ShortcodeOutput::Skip => panic!("handler {} declined", handler.name()),
        }
    }
}
