//! Whole-document transformation: every Drawable Root is replaced by its sketchy copy.

use crate::dom::{Document, Node};
use crate::options::StyleOptions;
use crate::pretty;
use crate::sketch::Sketcher;
use crate::transform::transform;

/// What part of a transformed document gets serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Doctype, `<html>` and everything in it.
    #[default]
    Document,
    /// Only the content of `<body>`; the whole document when there is no body.
    Body,
}

/// Replaces every outermost `<svg>` element of `document` in place (same parent, same index)
/// with its transformation. Each root gets a fresh sketcher from `make_sketcher`. An `<svg>`
/// nested in another is content of the outer root and is not replaced on its own.
///
/// Returns the number of replaced roots.
pub fn transform_document<S, F>(
    document: &mut Document,
    options: &StyleOptions,
    mut make_sketcher: F,
) -> usize
where
    S: Sketcher,
    F: FnMut() -> S,
{
    let mut replaced = 0usize;
    let mut pending: Vec<&mut [Node]> = vec![document.children.as_mut_slice()];
    while let Some(nodes) = pending.pop() {
        for node in nodes {
            let Node::Element(el) = node else {
                continue;
            };
            if !el.is_drawable_root() {
                pending.push(el.children.as_mut_slice());
                continue;
            }
            let mut sketcher = make_sketcher();
            *el = transform(el, options, &mut sketcher);
            replaced += 1;
            tracing::debug!(root = replaced, "replaced drawable root");
        }
    }
    replaced
}

/// Transforms `document` and pretty-prints the requested [`Scope`].
pub fn roughlify_document<S, F>(
    mut document: Document,
    options: &StyleOptions,
    make_sketcher: F,
    scope: Scope,
) -> String
where
    S: Sketcher,
    F: FnMut() -> S,
{
    transform_document(&mut document, options, make_sketcher);
    match scope {
        Scope::Body => match document.body() {
            Some(body) => pretty::print_nodes(&body.children),
            None => pretty::print_document(&document),
        },
        Scope::Document => pretty::print_document(&document),
    }
}
