//! The render primitive seam.

use crate::dom::Element;
use crate::geometry::Point;
use crate::options::StyleOptions;

/// Converts one decoded primitive plus style options into hand-drawn output nodes.
///
/// Implementations are bound to one output root for the duration of a transformation; the
/// returned nodes are moved into that root in order. `options` has already been merged
/// (element residual attributes under the global options).
pub trait Sketcher {
    fn path(&mut self, d: &str, options: &StyleOptions) -> Vec<Element>;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, options: &StyleOptions) -> Vec<Element>;

    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, options: &StyleOptions) -> Vec<Element>;

    fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &StyleOptions,
    ) -> Vec<Element>;

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        options: &StyleOptions,
    ) -> Vec<Element>;

    /// Closed outline through `points`.
    fn polygon(&mut self, points: &[Point], options: &StyleOptions) -> Vec<Element>;

    /// Open outline through `points`.
    fn linear_path(&mut self, points: &[Point], options: &StyleOptions) -> Vec<Element>;
}
