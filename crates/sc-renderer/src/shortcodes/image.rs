//! `img` shortcode.

use crate::html::{StartTag, suffixed_class};
use crate::{RenderContext, Shortcode, ShortcodeAttrs, ShortcodeOutput};

const CONSUMED: &[&str] = &["src", "class", "alt"];

/// `[img src="…" alt="…" /]`
///
/// Emits `<img src class=" img" alt …>`. Declines when `src` is missing.
pub struct Image;

impl Shortcode for Image {
    fn name(&self) -> &str {
        "img"
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        _content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let Some(src) = attrs.get("src") else {
            return ShortcodeOutput::Skip;
        };

        let tag = StartTag::new("img")
            .attr("src", src)
            .attr("class", &suffixed_class(attrs.get("class"), "img"))
            .attr("alt", attrs.get("alt").unwrap_or_default())
            .attrs(attrs.remaining(CONSUMED))
            .finish();
        ShortcodeOutput::html(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcodes::testing::{html, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_img() {
        assert_eq!(
            html(&Image, r#"src="/abc.jpg" alt="Test image""#, ""),
            r#"<img src="/abc.jpg" class=" img" alt="Test image">"#
        );
    }

    #[test]
    fn test_img_custom_class() {
        assert_eq!(
            html(&Image, r#"src="/abc.jpg" class="custom-class" alt="Test image""#, ""),
            r#"<img src="/abc.jpg" class="custom-class img" alt="Test image">"#
        );
    }

    #[test]
    fn test_img_fixed_order_and_extras() {
        assert_eq!(
            html(&Image, r#"width=10 alt="A" src="/a.png""#, ""),
            r#"<img src="/a.png" class=" img" alt="A" width="10">"#
        );
    }

    #[test]
    fn test_img_empty_alt() {
        assert_eq!(
            html(&Image, r#"src="/a.png""#, ""),
            r#"<img src="/a.png" class=" img" alt="">"#
        );
    }

    #[test]
    fn test_img_without_src_declines() {
        assert_eq!(render(&Image, r#"alt="A""#, ""), ShortcodeOutput::Skip);
    }
}
