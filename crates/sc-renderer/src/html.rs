//! HTML emission helpers shared by the built-in shortcodes.

use std::fmt::Write;

/// Escape text for use in HTML content or a double-quoted attribute.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Remove markup tags, keeping only text. Used for `title` fallbacks.
pub(crate) fn strip_tags(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Build a class value by appending a fixed class to the custom one.
///
/// The separator space is always emitted, so a missing custom class yields
/// `" suffix"`.
pub(crate) fn suffixed_class(custom: Option<&str>, suffix: &str) -> String {
    format!("{} {suffix}", custom.unwrap_or_default())
}

/// Start-tag builder with attributes emitted in call order.
pub(crate) struct StartTag {
    out: String,
}

impl StartTag {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            out: format!("<{name}"),
        }
    }

    pub(crate) fn attr(mut self, name: &str, value: &str) -> Self {
        write!(self.out, r#" {name}="{}""#, escape_html(value)).unwrap();
        self
    }

    pub(crate) fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub(crate) fn attrs<'a>(self, attrs: impl Iterator<Item = (&'a str, &'a str)>) -> Self {
        attrs.fold(self, |tag, (name, value)| tag.attr(name, value))
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push('>');
        self.out
    }
}
