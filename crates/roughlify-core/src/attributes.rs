//! Attribute extraction.

use crate::dom::{Attributes, Element};

/// `stroke-width` -> `strokeWidth`. Every `-` followed by a character is replaced by that
/// character upper-cased; a trailing `-` is kept.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(ch) = chars.next() {
        if ch != '-' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) => out.extend(next.to_uppercase()),
            None => out.push('-'),
        }
    }
    out
}

/// Every attribute of `element` and no others. With `camelize`, names are converted with
/// [`to_camel_case`] so they line up with style option keys; otherwise they are kept verbatim.
pub fn extract(element: &Element, camelize: bool) -> Attributes {
    element
        .attributes
        .iter()
        .map(|(name, value)| {
            let name = if camelize {
                to_camel_case(name)
            } else {
                name.clone()
            };
            (name, value.clone())
        })
        .collect()
}
