//! Shortcode attribute parsing.
//!
//! Parses the `key="value" key=bare flag` portion of an opening tag.

/// Value stored for flag attributes written without `=value`.
pub const FLAG_VALUE: &str = "1";

/// Ordered attribute mapping of a single shortcode tag.
///
/// Keys are unique. When a key repeats, the last value wins but the key keeps
/// the position of its first occurrence. Values are raw strings, not escaped.
///
/// # Example
///
/// ```
/// use sc_renderer::ShortcodeAttrs;
///
/// let attrs = ShortcodeAttrs::parse(r#"path="/about us" class=wide hidden"#);
/// assert_eq!(attrs.get("path"), Some("/about us"));
/// assert_eq!(attrs.get("class"), Some("wide"));
/// assert_eq!(attrs.get("hidden"), Some("1"));
/// assert_eq!(attrs.get("title"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeAttrs {
    entries: Vec<(String, String)>,
}

impl ShortcodeAttrs {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the attribute source between a tag name and its closing bracket.
    ///
    /// Never fails: stray `=` signs are skipped and an unterminated quote
    /// takes the remainder of the input as its value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut attrs = Self::new();
        let mut remaining = input.trim_start();

        while !remaining.is_empty() {
            let key_len = remaining
                .find(|c: char| c.is_whitespace() || c == '=')
                .unwrap_or(remaining.len());

            if key_len == 0 {
                // `=` with no key in front of it
                remaining = remaining[1..].trim_start();
                continue;
            }

            let key = &remaining[..key_len];
            let after_key = remaining[key_len..].trim_start();

            if let Some(after_eq) = after_key.strip_prefix('=') {
                let (value, rest) = parse_value(after_eq.trim_start());
                attrs.insert(key, value);
                remaining = rest.trim_start();
            } else {
                attrs.insert(key, FLAG_VALUE);
                remaining = after_key;
            }
        }

        attrs
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present (flags included).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert or replace an attribute.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterate over `(key, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the attributes whose keys are not in `consumed`.
    pub fn remaining<'a>(
        &'a self,
        consumed: &'a [&'a str],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.iter().filter(move |(k, _)| !consumed.contains(k))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `defaults` under these attributes.
    ///
    /// Own attributes keep their source order and override defaults; keys only
    /// present in `defaults` follow in default order.
    #[must_use]
    pub fn merged_with_defaults(&self, defaults: &Self) -> Self {
        let mut merged = self.clone();
        for (key, value) in defaults.iter() {
            if !merged.contains(key) {
                merged.entries.push((key.to_owned(), value.to_owned()));
            }
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ShortcodeAttrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Parse a quoted or bare value. Returns the value and the unparsed rest.
fn parse_value(s: &str) -> (String, &str) {
    let Some(quote) = s.chars().next().filter(|&c| c == '"' || c == '\'') else {
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        return (s[..end].to_owned(), &s[end..]);
    };

    let body = &s[1..];
    let mut value = String::new();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, next)) if next == quote || next == '\\' => value.push(next),
                Some((_, next)) => {
                    value.push('\\');
                    value.push(next);
                }
                None => value.push('\\'),
            }
        } else if c == quote {
            return (value, &body[i + 1..]);
        } else {
            value.push(c);
        }
    }

    // Unterminated quote: the rest of the tag is the value
    (value, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let attrs = ShortcodeAttrs::parse("");
        assert!(attrs.is_empty());
        let attrs = ShortcodeAttrs::parse("   \t ");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_double_quoted_value() {
        let attrs = ShortcodeAttrs::parse(r#"class="custom-class""#);
        assert_eq!(attrs.get("class"), Some("custom-class"));
    }

    #[test]
    fn test_single_quoted_value() {
        let attrs = ShortcodeAttrs::parse("title='Hello World'");
        assert_eq!(attrs.get("title"), Some("Hello World"));
    }

    #[test]
    fn test_unquoted_value() {
        let attrs = ShortcodeAttrs::parse("length=10");
        assert_eq!(attrs.get("length"), Some("10"));
    }

    #[test]
    fn test_quoted_value_with_punctuation() {
        let attrs = ShortcodeAttrs::parse(r#"style="a=b; c: [d]" alt="x y""#);
        assert_eq!(attrs.get("style"), Some("a=b; c: [d]"));
        assert_eq!(attrs.get("alt"), Some("x y"));
    }

    #[test]
    fn test_escaped_quote() {
        let attrs = ShortcodeAttrs::parse(r#"title="say \"hi\"" next=1"#);
        assert_eq!(attrs.get("title"), Some(r#"say "hi""#));
        assert_eq!(attrs.get("next"), Some("1"));
    }

    #[test]
    fn test_escaped_backslash_and_unknown_escape() {
        let attrs = ShortcodeAttrs::parse(r#"a="c:\\dir" b="\n""#);
        assert_eq!(attrs.get("a"), Some(r"c:\dir"));
        assert_eq!(attrs.get("b"), Some(r"\n"));
    }

    #[test]
    fn test_flag_attribute() {
        let attrs = ShortcodeAttrs::parse("hidden class=x");
        assert_eq!(attrs.get("hidden"), Some(FLAG_VALUE));
        assert!(attrs.contains("hidden"));
        assert_eq!(attrs.get("class"), Some("x"));
    }

    #[test]
    fn test_trailing_flag() {
        let attrs = ShortcodeAttrs::parse("class=x hidden");
        assert_eq!(attrs.get("hidden"), Some(FLAG_VALUE));
    }

    #[test]
    fn test_empty_value_is_not_absent() {
        let attrs = ShortcodeAttrs::parse(r#"alt="""#);
        assert_eq!(attrs.get("alt"), Some(""));
        assert!(attrs.contains("alt"));
        assert!(!attrs.contains("src"));
    }

    #[test]
    fn test_whitespace_around_equals() {
        let attrs = ShortcodeAttrs::parse(r#"class = "a"   id= b"#);
        assert_eq!(attrs.get("class"), Some("a"));
        assert_eq!(attrs.get("id"), Some("b"));
    }

    #[test]
    fn test_unterminated_quote_takes_rest() {
        let attrs = ShortcodeAttrs::parse(r#"class="a b title=c"#);
        assert_eq!(attrs.get("class"), Some("a b title=c"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_stray_equals_skipped() {
        let attrs = ShortcodeAttrs::parse("= =x a=1");
        assert_eq!(attrs.get("a"), Some("1"));
        assert_eq!(attrs.get("x"), Some(FLAG_VALUE));
    }

    #[test]
    fn test_source_order_preserved() {
        let attrs = ShortcodeAttrs::parse("c=3 a=1 b=2");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    // Repeated keys: last value wins, first position kept.
    #[test]
    fn test_repeated_key_last_wins() {
        let attrs = ShortcodeAttrs::parse("class=first id=x class=second");
        assert_eq!(attrs.get("class"), Some("second"));
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "id"]);
    }

    #[test]
    fn test_merge_defaults() {
        let attrs = ShortcodeAttrs::parse("style=s type=span");
        let defaults = ShortcodeAttrs::new().with("type", "d").with("class", "base");
        let merged = attrs.merged_with_defaults(&defaults);

        assert_eq!(merged.get("type"), Some("span"));
        assert_eq!(merged.get("class"), Some("base"));
        let keys: Vec<_> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["style", "type", "class"]);
    }

    #[test]
    fn test_remaining() {
        let attrs = ShortcodeAttrs::parse("class=a id=b data-x=c");
        let rest: Vec<_> = attrs.remaining(&["class", "id"]).collect();
        assert_eq!(rest, vec![("data-x", "c")]);
    }

    #[test]
    fn test_from_iterator() {
        let attrs: ShortcodeAttrs = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(attrs.get("a"), Some("3"));
        assert_eq!(attrs.len(), 2);
    }
}
