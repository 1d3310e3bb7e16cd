//! `button` and `link` shortcodes.

use crate::context::FRONT_PAGE;
use crate::html::{StartTag, strip_tags, suffixed_class};
use crate::{RenderContext, Shortcode, ShortcodeAttrs, ShortcodeOutput};

const BUTTON_CONSUMED: &[&str] = &["path", "class", "id", "style", "title"];
const LINK_CONSUMED: &[&str] = &["url", "path", "class", "id", "style", "title"];

/// `[button path="…" class="…"]Label[/button]`
///
/// Emits `<a href class=" button" id style … title><span>Label</span></a>`.
/// Without `path` the button points at the site root.
pub struct Button;

impl Shortcode for Button {
    fn name(&self) -> &str {
        "button"
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let href = ctx.resolve_path(attrs.get("path").unwrap_or(FRONT_PAGE));
        let class = suffixed_class(attrs.get("class"), "button");
        let start = anchor_start(&href, Some(&class), attrs, BUTTON_CONSUMED, content);
        ShortcodeOutput::html(format!("{start}<span>{content}</span></a>"))
    }
}

/// `[link url="…"|path="…" class="…"]Label[/link]`
///
/// `url` is used verbatim and wins over `path`, which is resolved.
pub struct Link;

impl Shortcode for Link {
    fn name(&self) -> &str {
        "link"
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let href = attrs.get("url").map_or_else(
            || ctx.resolve_path(attrs.get("path").unwrap_or(FRONT_PAGE)),
            str::to_owned,
        );
        let start = anchor_start(&href, attrs.get("class"), attrs, LINK_CONSUMED, content);
        ShortcodeOutput::html(format!("{start}{content}</a>"))
    }
}

/// Opening `<a>` with href, class, id, style, the remaining attributes, and
/// finally title (explicit or the label text).
fn anchor_start(
    href: &str,
    class: Option<&str>,
    attrs: &ShortcodeAttrs,
    consumed: &[&str],
    content: &str,
) -> String {
    let title = attrs
        .get("title")
        .map_or_else(|| strip_tags(content).trim().to_owned(), str::to_owned);

    StartTag::new("a")
        .attr("href", href)
        .attr_opt("class", class)
        .attr_opt("id", attrs.get("id"))
        .attr_opt("style", attrs.get("style"))
        .attrs(attrs.remaining(consumed))
        .attr("title", &title)
        .finish()
}
