//! Owned markup tree.
//!
//! Both parsers (`roxmltree` for standalone SVG, `kuchiki` for HTML documents) are converted into
//! this model so the transformer, the batch replacer and the printers only deal with one shape
//! of tree. Attribute order is preserved as parsed.

mod parse;
mod write;

use indexmap::IndexMap;

pub use write::{escape_attr_into, escape_text_into};

pub type Attributes = IndexMap<String, String>;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Tag name of a Drawable Root.
pub const SVG_TAG: &str = "svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets `name`, keeping its original position when it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Element children, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn is_drawable_root(&self) -> bool {
        self.name == SVG_TAG
    }

    /// Drops every attribute and child, keeping the tag name.
    pub fn clear(&mut self) {
        self.attributes.clear();
        self.children.clear();
    }
}

/// A parsed markup document: the nodes found at the top level (doctype, comments, `<html>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn body(&self) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .flat_map(crate::walk::descendants)
            .find(|el| el.name == "body")
    }
}
