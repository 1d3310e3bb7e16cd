//! Shortcode tag scanning.
//!
//! Splits raw text into literal runs and `[name ...]`, `[name .../]`, `[/name]`
//! tags. Scanning is purely lexical: newlines are ordinary characters.

use crate::attrs::ShortcodeAttrs;

/// A lexical token produced by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text between tags. Adjacent literal characters are coalesced.
    Text(String),
    /// Opening tag: `[name attrs]` or self-closing `[name attrs /]`.
    Open {
        name: String,
        attrs: ShortcodeAttrs,
        self_closing: bool,
        /// Exact source text of the tag.
        raw: String,
    },
    /// Closing tag: `[/name]`.
    Close {
        name: String,
        /// Exact source text of the tag.
        raw: String,
    },
}

/// Scan text into a token stream in document order.
///
/// A `[` that does not begin a well-formed tag is literal text.
#[must_use]
pub fn scan(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('[') {
        let start = pos + offset;
        text.push_str(&input[pos..start]);

        if let Some((token, len)) = parse_tag(&input[start..]) {
            if !text.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut text)));
            }
            tokens.push(token);
            pos = start + len;
        } else {
            text.push('[');
            pos = start + 1;
        }
    }

    text.push_str(&input[pos..]);
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }

    tokens
}

/// Check if a character may appear in a shortcode name.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Check if a whole string is a valid shortcode name.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

fn name_len(s: &str) -> usize {
    s.find(|c: char| !is_name_char(c)).unwrap_or(s.len())
}

/// Parse a tag at the start of `s` (which begins with `[`).
///
/// Returns the token and the number of bytes consumed.
fn parse_tag(s: &str) -> Option<(Token, usize)> {
    let after_bracket = &s[1..];

    if let Some(after_slash) = after_bracket.strip_prefix('/') {
        let len = name_len(after_slash);
        if len == 0 {
            return None;
        }
        let rest = &after_slash[len..];
        let trimmed = rest.trim_start();
        if !trimmed.starts_with(']') {
            return None;
        }
        let consumed = 2 + len + (rest.len() - trimmed.len()) + 1;
        let token = Token::Close {
            name: after_slash[..len].to_owned(),
            raw: s[..consumed].to_owned(),
        };
        return Some((token, consumed));
    }

    let len = name_len(after_bracket);
    if len == 0 {
        return None;
    }
    let rest = &after_bracket[len..];
    if !rest.starts_with(|c: char| c.is_whitespace() || c == '/' || c == ']') {
        return None;
    }

    let end = find_tag_end(rest)?;
    let inner = &rest[..end];
    let consumed = 1 + len + end + 1;

    let (attrs_src, self_closing) = match inner.trim_end().strip_suffix('/') {
        Some(attrs_src) => (attrs_src, true),
        None => (inner, false),
    };

    let token = Token::Open {
        name: after_bracket[..len].to_owned(),
        attrs: ShortcodeAttrs::parse(attrs_src),
        self_closing,
        raw: s[..consumed].to_owned(),
    };
    Some((token, consumed))
}

/// Find the byte offset of the `]` closing a tag, skipping quoted values.
///
/// A quote only opens a value when it follows `=`. A quoted value may not
/// span a newline or the start of another tag; if it does, or is never
/// closed, the first `]` wins.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_eq = false;
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            } else if c == '\n' || (c == '[' && starts_tag(&s[i + 1..])) {
                break;
            }
            continue;
        }

        match c {
            ']' => return Some(i),
            '"' | '\'' if after_eq => {
                quote = Some(c);
                continue;
            }
            _ => {}
        }

        if !c.is_whitespace() {
            after_eq = c == '=';
        }
    }

    s.find(']')
}

/// Check whether the text after a `[` could begin an open or close tag.
fn starts_tag(s: &str) -> bool {
    s.strip_prefix('/')
        .unwrap_or(s)
        .starts_with(is_name_char)
}
