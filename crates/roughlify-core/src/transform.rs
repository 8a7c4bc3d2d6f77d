//! Single-root transformation.

use crate::dispatch::dispatch;
use crate::dom::Element;
use crate::options::StyleOptions;
use crate::sketch::Sketcher;
use crate::walk::walk;

/// Builds a sketchy copy of `input`: a new root with the same tag and verbatim attributes,
/// holding the rendered output of every primitive in document order. `input` is not touched.
pub fn transform(input: &Element, options: &StyleOptions, sketcher: &mut dyn Sketcher) -> Element {
    let mut output = Element::new(input.name.clone());
    transform_into(input, &mut output, options, sketcher);
    output
}

/// Like [`transform`], rendering into a caller-owned root which is cleared first. The root keeps
/// its tag name; attributes and children are replaced.
pub fn transform_into(
    input: &Element,
    output: &mut Element,
    options: &StyleOptions,
    sketcher: &mut dyn Sketcher,
) {
    output.clear();
    output.attributes = crate::attributes::extract(input, false);
    walk(input, |el| dispatch(el, options, sketcher, output));
}
