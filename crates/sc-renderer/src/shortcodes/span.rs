//! Inline `<span>` shortcodes: `dropcap`, `highlight`, `quote`.

use crate::html::{StartTag, escape_html, suffixed_class};
use crate::{RenderContext, Shortcode, ShortcodeAttrs, ShortcodeOutput};

/// `[dropcap]T[/dropcap]` → `<span class=" dropcap">T</span>`
pub struct Dropcap;

impl Shortcode for Dropcap {
    fn name(&self) -> &str {
        "dropcap"
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        ShortcodeOutput::html(class_span(attrs, "dropcap", content))
    }
}

/// `[highlight]text[/highlight]` → `<span class=" highlight">text</span>`
pub struct Highlight;

impl Shortcode for Highlight {
    fn name(&self) -> &str {
        "highlight"
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        ShortcodeOutput::html(class_span(attrs, "highlight", content))
    }
}

/// `[quote author="…"]text[/quote]`
///
/// The body is padded with one space on each side. With an author, a
/// `quote-author` span is placed before the body.
pub struct Quote;

impl Shortcode for Quote {
    fn name(&self) -> &str {
        "quote"
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        _ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let author = attrs.get("author").map_or_else(String::new, |author| {
            format!(
                r#" <span class="quote-author">{} wrote: </span>"#,
                escape_html(author)
            )
        });
        let body = format!("{author} {content} ");
        ShortcodeOutput::html(class_span(attrs, "quote", &body))
    }
}

fn class_span(attrs: &ShortcodeAttrs, class: &str, content: &str) -> String {
    let start = StartTag::new("span")
        .attr("class", &suffixed_class(attrs.get("class"), class))
        .finish();
    format!("{start}{content}</span>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcodes::testing::html;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dropcap() {
        assert_eq!(
            html(&Dropcap, "", "text"),
            r#"<span class=" dropcap">text</span>"#
        );
        assert_eq!(
            html(&Dropcap, r#"class="custom-class""#, "text"),
            r#"<span class="custom-class dropcap">text</span>"#
        );
    }

    #[test]
    fn test_highlight() {
        assert_eq!(
            html(&Highlight, "", "highlighted text"),
            r#"<span class=" highlight">highlighted text</span>"#
        );
        assert_eq!(
            html(&Highlight, r#"class="custom-class""#, "highlighted text"),
            r#"<span class="custom-class highlight">highlighted text</span>"#
        );
    }

    #[test]
    fn test_span_ignores_other_attrs() {
        assert_eq!(
            html(&Highlight, r#"id="x" style="s""#, "t"),
            r#"<span class=" highlight">t</span>"#
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            html(&Quote, "", "This is by no one"),
            r#"<span class=" quote"> This is by no one </span>"#
        );
        assert_eq!(
            html(&Quote, r#"class="test-quote""#, "This is by no one"),
            r#"<span class="test-quote quote"> This is by no one </span>"#
        );
    }

    #[test]
    fn test_quote_author() {
        assert_eq!(
            html(&Quote, r#"class="test-quote" author="ryan""#, "This is by ryan"),
            r#"<span class="test-quote quote"> <span class="quote-author">ryan wrote: </span> This is by ryan </span>"#
        );
    }

    #[test]
    fn test_quote_author_escaped() {
        assert_eq!(
            html(&Quote, r#"author="<b>""#, "x"),
            r#"<span class=" quote"> <span class="quote-author">&lt;b&gt; wrote: </span> x </span>"#
        );
    }
}
