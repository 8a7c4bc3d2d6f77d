#![forbid(unsafe_code)]

//! Default hand-drawn renderer for `roughlify`.
//!
//! [`RoughSvg`] implements [`Sketcher`] on top of `roughr` and emits one `<g>` per shape,
//! holding `<path>` elements the way RoughJS' SVG canvas does.

pub mod generator;
pub mod options;
pub mod svg;

use roughlify_core::{Element, Point, Sketcher, StyleOptions};

pub use generator::{Drawable, Shape};

/// RoughJS-style SVG renderer.
///
/// One instance is bound to one output root. The PRNG state is reset for every shape, so
/// with an explicit `seed` each shape is reproducible on its own.
#[derive(Debug, Default, Clone)]
pub struct RoughSvg {
    drawn: usize,
}

impl RoughSvg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes rendered so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    fn emit(&mut self, drawable: Drawable, style: &StyleOptions) -> Vec<Element> {
        self.drawn += 1;
        tracing::trace!(
            shape = ?drawable.shape,
            sets = drawable.sets.len(),
            "sketched shape"
        );
        vec![svg::drawable_to_group(&drawable, style)]
    }
}

impl Sketcher for RoughSvg {
    fn path(&mut self, d: &str, options: &StyleOptions) -> Vec<Element> {
        self.emit(generator::path(d, options), options)
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, options: &StyleOptions) -> Vec<Element> {
        self.emit(generator::line(x1, y1, x2, y2, options), options)
    }

    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, options: &StyleOptions) -> Vec<Element> {
        self.emit(generator::ellipse(cx, cy, diameter, diameter, options), options)
    }

    fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &StyleOptions,
    ) -> Vec<Element> {
        self.emit(generator::rectangle(x, y, width, height, options), options)
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        options: &StyleOptions,
    ) -> Vec<Element> {
        self.emit(generator::ellipse(cx, cy, width, height, options), options)
    }

    fn polygon(&mut self, points: &[Point], options: &StyleOptions) -> Vec<Element> {
        self.emit(generator::polygon(points, options), options)
    }

    fn linear_path(&mut self, points: &[Point], options: &StyleOptions) -> Vec<Element> {
        self.emit(generator::linear_path(points, options), options)
    }
}
