//! Shape dispatch: tag name -> decoder -> render call.

pub use crate::geometry::ShapeKind;

use crate::dom::Element;
use crate::options::StyleOptions;
use crate::sketch::Sketcher;

/// Renders `element` into `out` if it is a supported, well-formed primitive. Anything else is a
/// no-op; structural elements are reached by the walker on its own.
///
/// Residual attributes act as per-element style hints; every option set in `options` overrides
/// them.
pub fn dispatch(
    element: &Element,
    options: &StyleOptions,
    sketcher: &mut dyn Sketcher,
    out: &mut Element,
) {
    let Some(kind) = ShapeKind::from_tag(&element.name) else {
        return;
    };
    let Some(decoded) = kind.decode(element) else {
        return;
    };
    let merged = StyleOptions::from_attributes(&decoded.residual).merge(options);
    for node in decoded.geometry.sketch(sketcher, &merged) {
        out.append(node);
    }
}
