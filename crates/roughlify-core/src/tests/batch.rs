use super::*;

fn count_sketches(el: &Element) -> usize {
    crate::walk::descendants(el).filter(|e| e.name == "sketch").count()
}

#[test]
fn drawable_roots_are_replaced_in_place() {
    let mut doc = Document::parse_html(
        r#"<!DOCTYPE html><html><body><p>before</p><svg viewBox="0 0 1 1"><circle cx="0" cy="0" r="1"/></svg><p>after</p></body></html>"#,
    );
    let replaced = transform_document(&mut doc, &StyleOptions::default(), RecordingSketcher::default);
    assert_eq!(replaced, 1);

    let body = doc.body().unwrap();
    let names: Vec<&str> = body.child_elements().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["p", "svg", "p"]);
    let root = body.child_elements().nth(1).unwrap();
    assert_eq!(root.attr("viewBox"), Some("0 0 1 1"));
    assert_eq!(count_sketches(root), 1);
    assert!(root.child_elements().all(|e| e.name == "sketch"));
}

#[test]
fn roots_at_different_depths_are_each_replaced_with_a_fresh_sketcher() {
    let mut doc = Document::parse_html(
        r#"<html><body><svg><rect width="1" height="1"/></svg><div><section><svg><line x1="0" y1="0" x2="1" y2="1"/><path d="M0 0"/></svg></section></div></body></html>"#,
    );
    let mut made = 0;
    let replaced = transform_document(&mut doc, &StyleOptions::default(), || {
        made += 1;
        RecordingSketcher::default()
    });
    assert_eq!(replaced, 2);
    assert_eq!(made, 2);

    let roots: Vec<&Element> = doc
        .children
        .iter()
        .filter_map(Node::as_element)
        .flat_map(crate::walk::descendants)
        .filter(|e| e.is_drawable_root())
        .collect();
    assert_eq!(roots.len(), 2);
    assert_eq!(count_sketches(roots[0]), 1);
    assert_eq!(count_sketches(roots[1]), 2);
    // Indices restart at zero: each root had its own sketcher.
    assert_eq!(roots[1].child_elements().next().unwrap().attr("index"), Some("0"));
}

#[test]
fn nested_roots_are_content_of_the_outer_root() {
    let mut doc = Document::parse_html(
        r#"<html><body><svg><circle cx="0" cy="0" r="1"/><svg><rect width="1" height="1"/></svg></svg></body></html>"#,
    );
    let replaced = transform_document(&mut doc, &StyleOptions::default(), RecordingSketcher::default);
    assert_eq!(replaced, 1);
    let root = doc.body().unwrap().child_elements().next().unwrap();
    assert_eq!(root.children.len(), 2);
    assert!(root.child_elements().all(|e| e.name == "sketch"));
}

#[test]
fn documents_without_roots_are_left_alone() {
    let mut doc = Document::parse_html("<html><body><p>nothing to draw</p></body></html>");
    let before = doc.clone();
    assert_eq!(
        transform_document(&mut doc, &StyleOptions::default(), RecordingSketcher::default),
        0
    );
    assert_eq!(doc, before);
}

#[test]
fn body_scope_prints_only_the_body_content() {
    let doc = Document::parse_html(
        r#"<!DOCTYPE html><html><head><title>t</title></head><body><svg><circle cx="0" cy="0" r="1"/></svg></body></html>"#,
    );
    let out = roughlify_document(
        doc.clone(),
        &StyleOptions::default(),
        RecordingSketcher::default,
        Scope::Body,
    );
    assert_eq!(out, "<svg>\n  <sketch call=\"circle\" index=\"0\" />\n</svg>\n");

    let full = roughlify_document(
        doc,
        &StyleOptions::default(),
        RecordingSketcher::default,
        Scope::Document,
    );
    assert!(full.starts_with("<!doctype html>\n<html>\n  <head>\n    <title>t</title>\n"));
    assert!(full.contains("    <svg>\n      <sketch call=\"circle\" index=\"0\" />\n    </svg>\n"));
}

#[test]
fn body_scope_falls_back_to_the_whole_document() {
    let doc = Document {
        children: vec![
            Element::new("svg")
                .with_child(Element::new("circle").with_attr("cx", "0").with_attr("cy", "0").with_attr("r", "1"))
                .into(),
        ],
    };
    let out = roughlify_document(
        doc,
        &StyleOptions::default(),
        RecordingSketcher::default,
        Scope::Body,
    );
    assert_eq!(out, "<svg>\n  <sketch call=\"circle\" index=\"0\" />\n</svg>\n");
}

fn body_markup(body: &str) -> String {
    let doc = Document::parse_html(&format!("<!DOCTYPE html><html><body>{body}</body></html>"));
    roughlify_document(
        doc,
        &StyleOptions::default(),
        RecordingSketcher::default,
        Scope::Body,
    )
}

#[test]
fn preformatted_blocks_survive_next_to_replaced_roots() {
    let out = body_markup(
        "<pre><code>let x = 1;\nlet y = 2;</code></pre><svg><circle cx=\"0\" cy=\"0\" r=\"1\"/></svg>",
    );
    assert_eq!(
        out,
        "<pre><code>let x = 1;\nlet y = 2;</code></pre>\n<svg>\n  <sketch call=\"circle\" index=\"0\" />\n</svg>\n"
    );
}

#[test]
fn non_breaking_spaces_are_not_collapsed() {
    let out = body_markup("<p>a&nbsp;b</p><p>&nbsp;</p>");
    assert_eq!(out, "<p>a\u{a0}b</p>\n<p>\u{a0}</p>\n");
}

#[test]
fn inline_markup_keeps_its_spacing() {
    let out = body_markup("<p>Hello <b>world</b>, bye</p>");
    assert_eq!(out, "<p>Hello <b>world</b>, bye</p>\n");
}
