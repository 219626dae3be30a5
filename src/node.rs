use std::collections::BTreeMap;

use crate::htmlstring::HtmlString;

/// A parsed element, such as `<div class="a">...</div>`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Element {
    /// The tag name, exactly as tokenized — no case folding.
    pub name: HtmlString,

    /// This element's attributes. Duplicate names collapse to the last
    /// value seen, which is why this is a map rather than the token layer's
    /// order-preserving `Vec`.
    pub attributes: BTreeMap<HtmlString, HtmlString>,

    /// Child nodes, in document order.
    pub children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(name: HtmlString) -> Self {
        Element {
            name,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }
}

/// A node in the parsed tree: either an [`Element`] or a run of text.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Node {
    /// An element and its subtree.
    Element(Element),
    /// A non-empty run of text. Empty runs are never constructed.
    Text(HtmlString),
}

impl Node {
    /// The element this node wraps, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// The text this node wraps, if it is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&HtmlString> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}
