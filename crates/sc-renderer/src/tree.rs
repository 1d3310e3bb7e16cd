//! Shortcode tree building.
//!
//! Matches open and close tokens with an explicit stack. Unbalanced markup
//! never fails: stray close tags and unclosed open tags degrade to text.

use crate::attrs::ShortcodeAttrs;
use crate::scanner::{Token, scan};

/// Deepest shortcode nesting built into the tree.
///
/// Paired open tags beyond this depth, and their matching close tags, are
/// kept as literal text. Rendering and dropping the tree recurse per level.
pub const MAX_DEPTH: usize = 256;

/// A node of the shortcode tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text.
    Text(String),
    /// A matched shortcode (paired or self-closing).
    Shortcode(ShortcodeNode),
}

/// A shortcode occurrence with its parsed attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeNode {
    /// Tag name, case preserved.
    pub name: String,
    /// Attributes in source order.
    pub attrs: ShortcodeAttrs,
    /// Child nodes in source order. Always empty for self-closing tags.
    pub children: Vec<Node>,
    /// Exact source text of the opening tag.
    pub open_tag: String,
    /// Exact source text of the closing tag, `None` for self-closing tags.
    pub close_tag: Option<String>,
}

impl ShortcodeNode {
    /// Check whether the node came from a `[name .../]` tag.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.close_tag.is_none()
    }
}

/// Parse text into a shortcode tree.
#[must_use]
pub fn parse(input: &str) -> Vec<Node> {
    build_tree(scan(input))
}

/// Build a tree from a token stream.
#[must_use]
pub fn build_tree(tokens: Vec<Token>) -> Vec<Node> {
    let mut builder = TreeBuilder::default();

    for token in tokens {
        match token {
            Token::Text(text) => push_text(builder.current(), text),
            Token::Open {
                name,
                attrs,
                self_closing: true,
                raw,
            } => {
                let node = ShortcodeNode {
                    name,
                    attrs,
                    children: Vec::new(),
                    open_tag: raw,
                    close_tag: None,
                };
                builder.current().push(Node::Shortcode(node));
            }
            Token::Open {
                name,
                attrs,
                self_closing: false,
                raw,
            } => builder.open(name, attrs, raw),
            Token::Close { name, raw } => builder.close(&name, raw),
        }
    }

    builder.finish()
}

/// An open tag still waiting for its close tag.
struct Frame {
    name: String,
    attrs: ShortcodeAttrs,
    open_tag: String,
    children: Vec<Node>,
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Frame>,
    /// Names of open tags kept as text because the stack was full.
    too_deep: Vec<String>,
}

impl TreeBuilder {
    fn open(&mut self, name: String, attrs: ShortcodeAttrs, raw: String) {
        if self.stack.len() >= MAX_DEPTH {
            if self.too_deep.is_empty() {
                tracing::debug!(
                    name = %name,
                    max_depth = MAX_DEPTH,
                    "Shortcode nesting too deep, keeping tags as text"
                );
            }
            push_text(self.current(), raw);
            self.too_deep.push(name);
            return;
        }
        self.stack.push(Frame {
            name,
            attrs,
            open_tag: raw,
            children: Vec::new(),
        });
    }

    fn current(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn close(&mut self, name: &str, raw: String) {
        if let Some(idx) = self.too_deep.iter().rposition(|open| open == name) {
            self.too_deep.truncate(idx);
            push_text(self.current(), raw);
            return;
        }
        // Literal opens only ever sit inside the top frame
        self.too_deep.clear();

        let Some(idx) = self.stack.iter().rposition(|frame| frame.name == name) else {
            tracing::debug!(name, "Stray closing shortcode tag kept as text");
            push_text(self.current(), raw);
            return;
        };

        while self.stack.len() > idx + 1 {
            self.flush_top();
        }

        let Some(frame) = self.stack.pop() else {
            return;
        };
        let node = ShortcodeNode {
            name: frame.name,
            attrs: frame.attrs,
            children: frame.children,
            open_tag: frame.open_tag,
            close_tag: Some(raw),
        };
        self.current().push(Node::Shortcode(node));
    }

    /// Splice an unclosed frame into its parent as text plus children.
    fn flush_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        tracing::debug!(name = %frame.name, "Unclosed shortcode tag kept as text");

        let parent = self.current();
        push_text(parent, frame.open_tag);
        for child in frame.children {
            match child {
                Node::Text(text) => push_text(parent, text),
                node @ Node::Shortcode(_) => parent.push(node),
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.stack.is_empty() {
            self.flush_top();
        }
        self.root
    }
}

/// Append text, merging with a trailing text node.
fn push_text(nodes: &mut Vec<Node>, text: String) {
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(&text);
    } else {
        nodes.push(Node::Text(text));
    }
}
