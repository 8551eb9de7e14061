//! Lenient parser from markup fragments to detached node trees.
//!
//! The view core performs no schema validation: malformed markup produces a
//! best-effort tree rather than an error, so parsing is infallible. Handled
//! syntax: nested elements, quoted and bare attributes, self-closing tags,
//! void elements, comments (skipped). Text runs are kept verbatim, including
//! whitespace-only runs, since the reconciler's text guard inspects them.

use crate::dom::{Element, Node, NodeRef, VOID_TAGS};

/// Parse a markup fragment into a detached list of sibling nodes.
#[must_use]
pub fn parse_fragment(input: &str) -> Vec<NodeRef> {
    Parser::new(input).run()
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    // Elements still waiting for their closing tag, innermost last.
    stack: Vec<Element>,
    // Completed top-level siblings.
    output: Vec<NodeRef>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
            stack: Vec::new(),
            output: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<NodeRef> {
        while self.pos < self.bytes.len() {
            if self.peek() == b'<' {
                self.markup();
            } else {
                self.text();
            }
        }
        // Unclosed tags: close them all at end of input.
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.output
    }

    fn peek(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.bytes[self.pos..].starts_with(prefix.as_bytes())
    }

    fn text(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len() && self.peek() != b'<' {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .unwrap_or_default()
            .to_string();
        if !text.is_empty() {
            self.emit(Node::Text(text).into_ref());
        }
    }

    fn markup(&mut self) {
        if self.starts_with("<!--") {
            self.skip_comment();
        } else if self.starts_with("</") {
            self.closing_tag();
        } else if self.bytes.len() > self.pos + 1
            && (self.bytes[self.pos + 1].is_ascii_alphabetic() || self.bytes[self.pos + 1] == b'!')
        {
            self.opening_tag();
        } else {
            // A stray '<' that opens nothing: treat it as text.
            self.emit(Node::Text("<".to_string()).into_ref());
            self.pos += 1;
        }
    }

    fn skip_comment(&mut self) {
        self.pos += 4;
        while self.pos < self.bytes.len() && !self.starts_with("-->") {
            self.pos += 1;
        }
        self.pos = (self.pos + 3).min(self.bytes.len());
    }

    fn closing_tag(&mut self) {
        self.pos += 2;
        let name = self.tag_name();
        while self.pos < self.bytes.len() && self.peek() != b'>' {
            self.pos += 1;
        }
        if self.pos < self.bytes.len() {
            self.pos += 1; // '>'
        }
        // Pop to the matching open element; a close with no match is ignored.
        if self.stack.iter().any(|el| el.tag() == name) {
            while let Some(top) = self.stack.last() {
                let done = top.tag() == name;
                self.close_top();
                if done {
                    break;
                }
            }
        }
    }

    fn opening_tag(&mut self) {
        self.pos += 1; // '<'
        if self.peek() == b'!' {
            // Doctype or similar: skip to '>'.
            while self.pos < self.bytes.len() && self.peek() != b'>' {
                self.pos += 1;
            }
            self.pos = (self.pos + 1).min(self.bytes.len());
            return;
        }
        let name = self.tag_name();
        let mut element = Element::new(name.clone());
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            if self.pos >= self.bytes.len() {
                break;
            }
            match self.peek() {
                b'>' => {
                    self.pos += 1;
                    break;
                }
                b'/' => {
                    self_closing = true;
                    self.pos += 1;
                }
                _ => {
                    let (attr, value) = self.attribute();
                    if !attr.is_empty() {
                        element.set_attribute(attr, value);
                    } else {
                        self.pos += 1;
                    }
                }
            }
        }

        if self_closing || VOID_TAGS.contains(&name.as_str()) {
            self.emit(Node::Element(element).into_ref());
        } else {
            self.stack.push(element);
        }
    }

    fn tag_name(&mut self) -> String {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.peek();
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    fn attribute(&mut self) -> (String, String) {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.peek();
            if b.is_ascii_whitespace() || b == b'=' || b == b'>' || b == b'/' {
                break;
            }
            self.pos += 1;
        }
        let name = std::str::from_utf8(&self.bytes[start..self.pos])
            .unwrap_or_default()
            .to_string();

        self.skip_whitespace();
        if self.pos >= self.bytes.len() || self.peek() != b'=' {
            // Bare attribute.
            return (name, String::new());
        }
        self.pos += 1; // '='
        self.skip_whitespace();

        let value = if self.pos < self.bytes.len() && (self.peek() == b'"' || self.peek() == b'\'')
        {
            let quote = self.peek();
            self.pos += 1;
            let start = self.pos;
            while self.pos < self.bytes.len() && self.peek() != quote {
                self.pos += 1;
            }
            let value = std::str::from_utf8(&self.bytes[start..self.pos])
                .unwrap_or_default()
                .to_string();
            self.pos = (self.pos + 1).min(self.bytes.len());
            value
        } else {
            let start = self.pos;
            while self.pos < self.bytes.len() {
                let b = self.peek();
                if b.is_ascii_whitespace() || b == b'>' || b == b'/' {
                    break;
                }
                self.pos += 1;
            }
            std::str::from_utf8(&self.bytes[start..self.pos])
                .unwrap_or_default()
                .to_string()
        };
        (name, value)
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn emit(&mut self, node: NodeRef) {
        if let Some(parent) = self.stack.last_mut() {
            parent.push_child(node);
        } else {
            self.output.push(node);
        }
    }

    fn close_top(&mut self) {
        if let Some(el) = self.stack.pop() {
            self.emit(Node::Element(el).into_ref());
        }
    }
}
