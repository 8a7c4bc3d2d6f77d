#![forbid(unsafe_code)]

//! `roughlify` turns clean vector graphics into a hand-drawn, "sketchy" style.
//!
//! # Features
//!
//! - `render` (default): bind the pipeline to the RoughJS-style renderer (`roughlify::render`)

pub use roughlify_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use roughlify_render::{Drawable, RoughSvg, Shape};

    use roughlify_core::{Document, Element, Result, Scope, StyleOptions};

    /// Editor entry point: roughens one standalone SVG document and returns compact SVG text.
    ///
    /// Fails only when the input is not well-formed XML or has no `<svg>` element.
    pub fn roughlify_svg(svg_text: &str, options: &StyleOptions) -> Result<String> {
        let input = Element::parse_svg(svg_text)?;
        let mut sketcher = RoughSvg::new();
        let output = roughlify_core::transform(&input, options, &mut sketcher);
        Ok(output.to_svg_string())
    }

    /// Batch entry point: parses HTML (or SVG loaded as HTML), replaces every drawable root and
    /// pretty-prints the requested scope.
    pub fn roughlify_markup(markup: &str, options: &StyleOptions, scope: Scope) -> Result<String> {
        let document = Document::parse_html(markup);
        Ok(roughlify_core::roughlify_document(
            document,
            options,
            RoughSvg::new,
            scope,
        ))
    }
}

#[cfg(feature = "render")]
pub use render::{roughlify_markup, roughlify_svg};
