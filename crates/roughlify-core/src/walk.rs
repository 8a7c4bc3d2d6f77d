//! Pre-order, depth-first traversal over element nodes.
//!
//! Uses an explicit stack so arbitrarily deep documents cannot overflow the call stack.

use crate::dom::{Element, Node};

/// Calls `visit` on `root` and then every descendant element, in document order.
pub fn walk<'a>(root: &'a Element, mut visit: impl FnMut(&'a Element)) {
    for el in descendants(root) {
        visit(el);
    }
}

/// Iterator form of [`walk`]; yields `root` first.
pub fn descendants(root: &Element) -> Descendants<'_> {
    Descendants { stack: vec![root] }
}

#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack
            .extend(el.children.iter().rev().filter_map(Node::as_element));
        Some(el)
    }
}
