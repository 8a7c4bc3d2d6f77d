//! Deterministic markup pretty printer.
//!
//! Formatting rules:
//! - two-space indentation, one block element per line;
//! - whitespace-only text between elements is dropped;
//! - content mixing text and elements stays on one line (inline formatting context), with runs
//!   of ASCII whitespace collapsed; other whitespace such as U+00A0 is content;
//! - an opening tag longer than [`PRINT_WIDTH`] puts one attribute per line, with the closing
//!   bracket on the last attribute line;
//! - childless SVG elements are self-closed, HTML void elements are printed as `<br />`;
//! - `script`, `style` and `textarea` content is raw text, `pre` content is printed verbatim.

use crate::dom::{Document, Element, Node, SVG_TAG, escape_attr_into, escape_text_into};

pub const PRINT_WIDTH: usize = 80;

const INDENT: &str = "  ";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

const PREFORMATTED: &str = "pre";

pub fn print_document(document: &Document) -> String {
    print_nodes(&document.children)
}

pub fn print_nodes(nodes: &[Node]) -> String {
    let mut printer = Printer::default();
    for node in nodes {
        printer.node(node, 0, false);
    }
    printer.out
}

pub fn print_element(element: &Element) -> String {
    let mut printer = Printer::default();
    printer.element(element, 0, false);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn node(&mut self, node: &Node, depth: usize, foreign: bool) {
        match node {
            Node::Element(el) => self.element(el, depth, foreign),
            Node::Text(text) => {
                let mut inline = String::new();
                write_inline_text(&mut inline, text, false);
                let inline = trim_ascii(&inline);
                if !inline.is_empty() {
                    self.line(depth, inline);
                }
            }
            Node::Comment(text) => self.line(depth, &format!("<!--{text}-->")),
            Node::Doctype(name) => self.line(depth, &format!("<!doctype {name}>")),
        }
    }

    fn element(&mut self, el: &Element, depth: usize, foreign: bool) {
        let foreign = foreign || el.name == SVG_TAG;
        let name = el.name.as_str();

        if !foreign && VOID_ELEMENTS.contains(&name) {
            self.open_tag(el, depth, " />", foreign);
            self.out.push('\n');
            return;
        }

        if !foreign && (RAW_TEXT_ELEMENTS.contains(&name) || name == PREFORMATTED) {
            let raw = name == "script" || name == "style";
            self.open_tag(el, depth, ">", foreign);
            // The parser drops one newline right after `<pre>`/`<textarea>`; keep a leading one.
            if !raw && starts_with_newline(&el.children) {
                self.out.push('\n');
            }
            for child in &el.children {
                match child {
                    Node::Text(text) if raw => self.out.push_str(text),
                    _ => write_inline(&mut self.out, child, foreign, true),
                }
            }
            self.close_tag(name);
            return;
        }

        let children: Vec<&Node> = el.children.iter().filter(|n| !is_blank(n)).collect();
        if children.is_empty() {
            if foreign {
                self.open_tag(el, depth, " />", foreign);
                self.out.push('\n');
            } else {
                self.open_tag(el, depth, ">", foreign);
                self.close_tag(name);
            }
            return;
        }

        if children.iter().any(|n| matches!(n, Node::Text(_))) {
            let mut content = String::new();
            for child in &el.children {
                write_inline(&mut content, child, foreign, false);
            }
            let content = trim_ascii(&content);
            let start = self.out.len();
            let multiline = self.open_tag(el, depth, ">", foreign);
            let width = self.out.len() - start + content.len() + name.len() + 3;
            if !multiline && width <= PRINT_WIDTH {
                self.out.push_str(content);
                self.close_tag(name);
            } else {
                self.out.push('\n');
                self.line(depth + 1, content);
                self.indent(depth);
                self.close_tag(name);
            }
            return;
        }

        self.open_tag(el, depth, ">", foreign);
        self.out.push('\n');
        for child in children {
            self.node(child, depth + 1, foreign);
        }
        self.indent(depth);
        self.close_tag(name);
    }

    /// Writes the indented opening tag ending in `end`. Returns `true` when the attributes were
    /// wrapped one per line.
    fn open_tag(&mut self, el: &Element, depth: usize, end: &str, foreign: bool) -> bool {
        let attrs = attribute_list(el, foreign);
        let flat_width = depth * INDENT.len()
            + 1
            + el.name.len()
            + attrs.iter().map(|a| a.len() + 1).sum::<usize>()
            + end.len();
        self.indent(depth);
        self.out.push('<');
        self.out.push_str(&el.name);

        if attrs.is_empty() || flat_width <= PRINT_WIDTH {
            for attr in &attrs {
                self.out.push(' ');
                self.out.push_str(attr);
            }
            self.out.push_str(end);
            return false;
        }

        let last = attrs.len() - 1;
        for (i, attr) in attrs.iter().enumerate() {
            self.out.push('\n');
            self.indent(depth + 1);
            self.out.push_str(attr);
            if i == last {
                self.out.push_str(end);
            }
        }
        true
    }

    fn close_tag(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push_str(">\n");
    }
}

fn attribute_list(el: &Element, foreign: bool) -> Vec<String> {
    el.attributes
        .iter()
        .map(|(key, value)| {
            let mut attr = key.clone();
            if foreign || !value.is_empty() {
                attr.push_str("=\"");
                escape_attr_into(&mut attr, value);
                attr.push('"');
            }
            attr
        })
        .collect()
}

/// Single-line serialization of `node`. With `verbatim`, text is kept as is; otherwise runs
/// of ASCII whitespace become one space.
fn write_inline(out: &mut String, node: &Node, foreign: bool, verbatim: bool) {
    match node {
        Node::Text(text) => write_inline_text(out, text, verbatim),
        Node::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::Doctype(_) => {}
        Node::Element(el) => {
            let foreign = foreign || el.name == SVG_TAG;
            let name = el.name.as_str();
            out.push('<');
            out.push_str(name);
            for attr in attribute_list(el, foreign) {
                out.push(' ');
                out.push_str(&attr);
            }
            if !foreign && VOID_ELEMENTS.contains(&name) {
                out.push_str(" />");
                return;
            }
            if foreign && el.children.is_empty() {
                out.push_str(" />");
                return;
            }
            out.push('>');
            let raw = !foreign && (name == "script" || name == "style");
            let verbatim = verbatim || (!foreign && (name == PREFORMATTED || name == "textarea"));
            for child in &el.children {
                match child {
                    Node::Text(text) if raw => out.push_str(text),
                    _ => write_inline(out, child, foreign, verbatim),
                }
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn write_inline_text(out: &mut String, text: &str, verbatim: bool) {
    if verbatim {
        escape_text_into(out, text);
        return;
    }
    let mut in_space = false;
    let mut run = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_whitespace() {
            if !in_space {
                run.push(' ');
            }
            in_space = true;
        } else {
            run.push(ch);
            in_space = false;
        }
    }
    escape_text_into(out, &run);
}

fn starts_with_newline(children: &[Node]) -> bool {
    matches!(children.first(), Some(Node::Text(text)) if text.starts_with('\n'))
}

fn trim_ascii(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}

fn is_blank(node: &Node) -> bool {
    matches!(node, Node::Text(text) if trim_ascii(text).is_empty())
}
