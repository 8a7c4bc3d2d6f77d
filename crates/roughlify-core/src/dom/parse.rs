use super::{Document, Element, Node, SVG_TAG};
use crate::error::{Error, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::{NodeData, NodeRef};

const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

impl Element {
    /// Parses standalone SVG markup (well-formed XML) and returns its first `<svg>` element.
    pub fn parse_svg(text: &str) -> Result<Element> {
        let doc = roxmltree::Document::parse(text)?;
        let root = doc
            .descendants()
            .find(|n| n.has_tag_name(SVG_TAG))
            .ok_or(Error::NoDrawableRoot)?;

        let mut element = build_xml_element(root);
        // Namespace declarations are not attributes in roxmltree; restore them on the root so
        // the output keeps its `xmlns`/`xmlns:xlink` metadata.
        let mut declarations = Vec::new();
        for ns in root.namespaces() {
            match ns.name() {
                Some("xml") => {}
                Some(prefix) => declarations.push((format!("xmlns:{prefix}"), ns.uri())),
                None => declarations.push(("xmlns".to_string(), ns.uri())),
            }
        }
        for (i, (key, uri)) in declarations.into_iter().enumerate() {
            if !element.attributes.contains_key(&key) {
                element.attributes.shift_insert(i, key, uri.to_string());
            }
        }
        Ok(element)
    }
}

fn xml_attr_name(node: roxmltree::Node<'_, '_>, attr: &roxmltree::Attribute<'_, '_>) -> String {
    let Some(uri) = attr.namespace() else {
        return attr.name().to_string();
    };
    let prefix = match uri {
        XML_NAMESPACE => Some("xml"),
        XLINK_NAMESPACE => Some("xlink"),
        _ => node.lookup_prefix(uri),
    };
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", attr.name()),
        _ => attr.name().to_string(),
    }
}

fn build_xml_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element
            .attributes
            .insert(xml_attr_name(node, &attr), attr.value().to_string());
    }
    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(build_xml_element(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.children.push(Node::Text(text.to_string()));
            }
        } else if child.is_comment() {
            if let Some(text) = child.text() {
                element.children.push(Node::Comment(text.to_string()));
            }
        }
    }
    element
}

impl Document {
    /// Parses HTML (or SVG treated as HTML, the way browsers load inline SVG) into an owned tree.
    ///
    /// kuchiki keeps attributes in a sorted map, so every element of the result lists its
    /// attributes in name order (namespaced ones after the plain ones), not in source order.
    /// Values are unchanged. Use [`Element::parse_svg`] when source order matters.
    pub fn parse_html(text: &str) -> Document {
        let document = kuchiki::parse_html().one(text);
        Document {
            children: document.children().filter_map(|n| build_html_node(&n)).collect(),
        }
    }
}

fn build_html_node(node: &NodeRef) -> Option<Node> {
    match node.data() {
        NodeData::Element(data) => {
            let mut element = Element::new(&*data.name.local);
            for (name, attr) in data.attributes.borrow().map.iter() {
                let key = match &attr.prefix {
                    Some(prefix) => format!("{prefix}:{}", name.local),
                    None => name.local.to_string(),
                };
                element.attributes.insert(key, attr.value.clone());
            }
            element.children = node
                .children()
                .filter_map(|child| build_html_node(&child))
                .collect();
            Some(Node::Element(element))
        }
        NodeData::Text(text) => Some(Node::Text(text.borrow().clone())),
        NodeData::Comment(text) => Some(Node::Comment(text.borrow().clone())),
        NodeData::Doctype(doctype) => Some(Node::Doctype(doctype.name.clone())),
        NodeData::ProcessingInstruction(_) | NodeData::Document(_) | NodeData::DocumentFragment => {
            None
        }
    }
}
