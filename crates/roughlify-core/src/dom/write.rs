use super::{Element, Node};

fn escape_into(out: &mut String, text: &str, quotes: bool) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' if quotes => "&quot;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

pub fn escape_text_into(out: &mut String, text: &str) {
    escape_into(out, text, false);
}

pub fn escape_attr_into(out: &mut String, text: &str) {
    escape_into(out, text, true);
}

pub(crate) fn write_open_tag(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.name);
    for (key, value) in &el.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_attr_into(out, value);
        out.push('"');
    }
}

fn write_xml(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(text) => escape_text_into(out, text),
        Node::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::Doctype(name) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
    }
}

impl Element {
    /// Compact XML serialization, children inline, childless elements self-closed.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_element(out: &mut String, el: &Element) {
    write_open_tag(out, el);
    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &el.children {
        write_xml(out, child);
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text_and_quotes_in_attributes() {
        let el = Element::new("text")
            .with_attr("title", r#"a "b" & c"#)
            .with_child(Node::Text("1 < 2 & 3 > 2".to_string()));
        assert_eq!(
            el.to_svg_string(),
            r#"<text title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3 &gt; 2</text>"#
        );
    }

    #[test]
    fn childless_elements_are_self_closed() {
        let el = Element::new("svg")
            .with_attr("viewBox", "0 0 1 1")
            .with_child(Element::new("g").with_child(Element::new("path").with_attr("d", "M0 0")));
        assert_eq!(
            el.to_svg_string(),
            r#"<svg viewBox="0 0 1 1"><g><path d="M0 0"/></g></svg>"#
        );
    }
}
