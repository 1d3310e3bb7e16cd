//! Container shortcodes: `item`, `clear`, `block`.

use super::wrapper_element;
use crate::html::{StartTag, suffixed_class};
use crate::{DefaultsError, RenderContext, Shortcode, ShortcodeAttrs, ShortcodeOutput};

const TYPED_CONSUMED: &[&str] = &["type", "class"];
const BLOCK_CONSUMED: &[&str] = &["tag", "type", "class"];

/// Elements a `block` may render as.
///
/// ```
/// use sc_renderer::shortcodes::BLOCK_ELEMENTS;
///
/// assert!(BLOCK_ELEMENTS.contains(&"section"));
/// assert!(!BLOCK_ELEMENTS.contains(&"script"));
/// ```
pub const BLOCK_ELEMENTS: &[&str] = &[
    "div",
    "span",
    "section",
    "article",
    "aside",
    "header",
    "footer",
    "nav",
    "main",
    "p",
    "blockquote",
    "figure",
    "figcaption",
];

/// `[item type="s" class="…"]body[/item]`
///
/// `<div>` wrapper, or `<span>` when `type` is `s`/`span`.
pub struct Item;

impl Shortcode for Item {
    fn name(&self) -> &str {
        "item"
    }

    fn default_attrs(&self) -> ShortcodeAttrs {
        ShortcodeAttrs::new().with("type", "d")
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let element = wrapper_element(attrs.get("type"));
        ShortcodeOutput::html(wrap(element, attrs.get("class"), attrs, TYPED_CONSUMED, content))
    }
}

/// `[clear type="s"]body[/clear]`
///
/// Like `item`, with `clearfix` appended to the class.
pub struct Clear;

impl Shortcode for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn default_attrs(&self) -> ShortcodeAttrs {
        ShortcodeAttrs::new().with("type", "d")
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let element = wrapper_element(attrs.get("type"));
        let class = suffixed_class(attrs.get("class"), "clearfix");
        ShortcodeOutput::html(wrap(element, Some(&class), attrs, TYPED_CONSUMED, content))
    }
}

/// `[block tag="section" class="…"]body[/block]`
///
/// Generic container. `tag` is one of [`BLOCK_ELEMENTS`] or the `s`/`d`
/// shorthands; anything else renders as `div`. A `type` of `s`/`span`/`d`/`div`
/// takes precedence over `tag`, as on `item`.
pub struct Block;

impl Shortcode for Block {
    fn name(&self) -> &str {
        "block"
    }

    fn default_attrs(&self) -> ShortcodeAttrs {
        ShortcodeAttrs::new().with("tag", "div")
    }

    fn validate_defaults(&self, defaults: &ShortcodeAttrs) -> Result<(), DefaultsError> {
        match defaults.get("tag") {
            Some(tag) if block_element(tag).is_none() => Err(DefaultsError::new(
                "tag",
                format!("unsupported element {tag:?}"),
            )),
            _ => Ok(()),
        }
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let element = match (attrs.get("type"), attrs.get("tag")) {
            (Some(kind @ ("s" | "span" | "d" | "div")), _) => wrapper_element(Some(kind)),
            (_, None) => "div",
            (_, Some(tag)) => block_element(tag).unwrap_or_else(|| {
                tracing::warn!(tag, "Unsupported block element, using div");
                "div"
            }),
        };
        ShortcodeOutput::html(wrap(element, attrs.get("class"), attrs, BLOCK_CONSUMED, content))
    }
}

fn block_element(tag: &str) -> Option<&'static str> {
    match tag {
        "s" => Some("span"),
        "d" => Some("div"),
        _ => BLOCK_ELEMENTS
            .iter()
            .find(|element| element.eq_ignore_ascii_case(tag))
            .copied(),
    }
}

fn wrap(
    element: &str,
    class: Option<&str>,
    attrs: &ShortcodeAttrs,
    consumed: &[&str],
    content: &str,
) -> String {
    let start = StartTag::new(element)
        .attr_opt("class", class)
        .attrs(attrs.remaining(consumed))
        .finish();
    format!("{start}{content}</{element}>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcodes::testing::html;
    use pretty_assertions::assert_eq;

    const BODY: &str = "<div>Other elements</div>";

    #[test]
    fn test_item() {
        assert_eq!(
            html(&Item, r#"class="item-class-here""#, "Item body here"),
            r#"<div class="item-class-here">Item body here</div>"#
        );
    }

    #[test]
    fn test_item_span() {
        assert_eq!(
            html(&Item, r#"type="s" class="item-class-here""#, "Item body here"),
            r#"<span class="item-class-here">Item body here</span>"#
        );
    }

    #[test]
    fn test_item_styles() {
        assert_eq!(
            html(
                &Item,
                r##"class="item-class-here" type="d" style="background-color:#F00""##,
                "Item body here"
            ),
            r##"<div class="item-class-here" style="background-color:#F00">Item body here</div>"##
        );
        assert_eq!(
            html(
                &Item,
                r##"class="item-class-here" type="s" style="background-color:#F00""##,
                "Item body here"
            ),
            r##"<span class="item-class-here" style="background-color:#F00">Item body here</span>"##
        );
    }

    #[test]
    fn test_item_without_class() {
        assert_eq!(html(&Item, "", "x"), "<div>x</div>");
    }

    #[test]
    fn test_clear() {
        assert_eq!(
            html(&Clear, "", BODY),
            r#"<div class=" clearfix"><div>Other elements</div></div>"#
        );
        assert_eq!(
            html(&Clear, r#"type="d""#, BODY),
            r#"<div class=" clearfix"><div>Other elements</div></div>"#
        );
    }

    #[test]
    fn test_clear_span() {
        for kind in ["s", "span"] {
            assert_eq!(
                html(&Clear, &format!(r#"type="{kind}""#), BODY),
                r#"<span class=" clearfix"><div>Other elements</div></span>"#
            );
        }
    }

    #[test]
    fn test_clear_custom_attrs() {
        assert_eq!(
            html(
                &Clear,
                r##"type="d" class="custom-class" id="theLabel" style="background-color: #F00;""##,
                BODY
            ),
            r##"<div class="custom-class clearfix" id="theLabel" style="background-color: #F00;"><div>Other elements</div></div>"##
        );
    }

    #[test]
    fn test_block_default() {
        assert_eq!(html(&Block, "", "x"), "<div>x</div>");
    }

    #[test]
    fn test_block_tag_and_attrs() {
        assert_eq!(
            html(&Block, r#"id="intro" tag="section" class="wide""#, "x"),
            r#"<section class="wide" id="intro">x</section>"#
        );
        assert_eq!(html(&Block, "tag=s", "x"), "<span>x</span>");
    }

    #[test]
    fn test_block_type_shorthand() {
        assert_eq!(html(&Block, "type=s", "x"), "<span>x</span>");
        assert_eq!(
            html(&Block, r#"tag="section" type="div" id="a""#, "x"),
            r#"<div id="a">x</div>"#
        );
        assert_eq!(html(&Block, "type=other", "x"), "<div>x</div>");
    }

    #[test]
    fn test_block_unsupported_tag_falls_back() {
        assert_eq!(html(&Block, "tag=script", "x"), "<div>x</div>");
    }

    #[test]
    fn test_block_validate_defaults() {
        assert!(Block.validate_defaults(&Block.default_attrs()).is_ok());
        let err = Block
            .validate_defaults(&ShortcodeAttrs::new().with("tag", "iframe"))
            .unwrap_err();
        assert_eq!(err.key, "tag");
    }
}
