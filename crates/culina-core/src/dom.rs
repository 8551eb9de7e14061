//! Headless markup tree model.
//!
//! Rendered output lives in a tree of [`Node`]s behind shared mutable handles
//! ([`NodeRef`]). The handles matter: the reconciler snapshots a flat element
//! sequence before patching, and a node detached mid-walk (by a text patch on
//! its ancestor) must still be reachable through the snapshot, exactly like a
//! captured `NodeList` over a live document.
//!
//! [`Document`] stands in for the hosting page: a set of named containers
//! that components mount into. Looking up a container that does not exist is
//! a fatal configuration error surfaced at construction time.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::error::ViewError;
use crate::parse::parse_fragment;

/// Shared handle to a tree node.
pub type NodeRef = Rc<RefCell<Node>>;

/// Elements that never carry children and serialize without a closing tag.
pub(crate) const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A single node in a markup tree: an element or a run of text.
#[derive(Debug, Clone)]
pub enum Node {
    /// An element with a tag, attributes, and children.
    Element(Element),
    /// A text run, kept verbatim (whitespace included).
    Text(String),
}

impl Node {
    /// Wrap this node in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> NodeRef {
        Rc::new(RefCell::new(self))
    }

    /// Borrow the element payload, if this is an element node.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Mutably borrow the element payload, if this is an element node.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Structural equality: same kind, tag, attribute set, and descendants.
    ///
    /// Text runs compare exactly (whitespace significant). Attribute order is
    /// ignored; child order is not.
    #[must_use]
    pub fn deep_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => a.deep_equal(b),
            _ => false,
        }
    }

    fn serialize_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(el) => el.serialize_into(out),
        }
    }
}

/// An element: tag name, ordered attributes, ordered children.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeRef>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in first-seen order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Set an attribute, overwriting in place or appending.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Child nodes in order.
    #[must_use]
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Append a child node.
    pub fn push_child(&mut self, child: NodeRef) {
        self.children.push(child);
    }

    /// Replace all children.
    pub fn set_children(&mut self, children: Vec<NodeRef>) {
        self.children = children;
    }

    /// Text of this element's *direct* text children only, concatenated.
    ///
    /// Descendant element text is ignored. This is the value the
    /// reconciler's whitespace guard inspects.
    #[must_use]
    pub fn own_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let Node::Text(text) = &*child.borrow() {
                out.push_str(text);
            }
        }
        out
    }

    /// All descendant text flattened in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match &*child.borrow() {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Replace every child with a single text run (or nothing, when empty).
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text).into_ref());
        }
    }

    /// Structural equality; see [`Node::deep_equal`].
    #[must_use]
    pub fn deep_equal(&self, other: &Self) -> bool {
        if self.tag != other.tag
            || self.attributes.len() != other.attributes.len()
            || self.children.len() != other.children.len()
        {
            return false;
        }
        let attrs_match = self
            .attributes
            .iter()
            .all(|(k, v)| other.attribute(k) == Some(v.as_str()));
        if !attrs_match {
            return false;
        }
        self.children
            .iter()
            .zip(&other.children)
            .all(|(a, b)| a.borrow().deep_equal(&b.borrow()))
    }

    /// Serialize this element (tag, attributes, children) back to markup.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }

    fn serialize_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.borrow().serialize_into(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Flat, depth-first, document-order sequence of every element node under
/// (and including) the given siblings.
///
/// Matches `querySelectorAll("*")` over a fragment or a container's
/// descendants: the container/fragment root itself is never part of the
/// sequence.
#[must_use]
pub fn element_sequence(nodes: &[NodeRef]) -> Vec<NodeRef> {
    let mut out = Vec::new();
    for node in nodes {
        collect_elements(node, &mut out);
    }
    out
}

fn collect_elements(node: &NodeRef, out: &mut Vec<NodeRef>) {
    let children = match &*node.borrow() {
        Node::Element(el) => el.children.clone(),
        Node::Text(_) => return,
    };
    out.push(Rc::clone(node));
    for child in &children {
        collect_elements(child, out);
    }
}

/// A mount point in the hosting document. Cloning yields another handle to
/// the same live element.
#[derive(Debug, Clone)]
pub struct Container {
    element: Rc<RefCell<Element>>,
}

impl Container {
    /// Create a standalone container (used directly in tests; applications
    /// get theirs from a [`Document`]).
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            element: Rc::new(RefCell::new(Element::new(tag))),
        }
    }

    /// Remove all content.
    pub fn clear(&self) {
        self.element.borrow_mut().children.clear();
    }

    /// Clear and insert the given markup as the sole content.
    pub fn set_markup(&self, markup: &str) {
        let children = parse_fragment(markup);
        self.element.borrow_mut().set_children(children);
    }

    /// Serialize the current content.
    #[must_use]
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in self.element.borrow().children() {
            child.borrow().serialize_into(&mut out);
        }
        out
    }

    /// Current child nodes (top level only).
    #[must_use]
    pub fn child_nodes(&self) -> Vec<NodeRef> {
        self.element.borrow().children().to_vec()
    }

    /// Flat document-order sequence of every element under this container.
    #[must_use]
    pub fn descendant_elements(&self) -> Vec<NodeRef> {
        element_sequence(self.element.borrow().children())
    }

    /// Number of elements under this container (all depths).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.descendant_elements().len()
    }

    /// Do two handles refer to the same live element?
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.element, &other.element)
    }
}

/// Headless stand-in for the hosting page: named containers by selector.
#[derive(Debug, Default)]
pub struct Document {
    containers: HashMap<String, Container>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container under a selector and return a handle to it.
    pub fn add_container(&mut self, selector: impl Into<String>) -> Container {
        let container = Container::new("div");
        self.containers.insert(selector.into(), container.clone());
        container
    }

    /// Look up a container by selector.
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingContainer`] when no container matches the
    /// selector.
    pub fn query(&self, selector: &str) -> Result<Container, ViewError> {
        self.containers
            .get(selector)
            .cloned()
            .ok_or_else(|| ViewError::MissingContainer(selector.to_string()))
    }
}
