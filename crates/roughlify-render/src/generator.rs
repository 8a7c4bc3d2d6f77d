//! RoughJS generator semantics on top of the `roughr` renderer.
//!
//! Each call produces a [`Drawable`]: the op sets of one shape in paint order (fill first,
//! then outline), before any SVG is written.

use crate::options::{DEFAULT_FILL_SHAPE_ROUGHNESS_GAIN, to_roughr};
use roughlify_core::{FillStyle, Point, StyleOptions};
use euclid::default::Point2D;
use roughr::core::{OpSet, OpSetType, OpType, Options};

/// Shape a drawable was generated from; decides a few SVG writer details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Path,
    Line,
    Rectangle,
    Ellipse,
    Polygon,
    LinearPath,
}

#[derive(Debug, Clone)]
pub struct Drawable {
    pub shape: Shape,
    pub sets: Vec<OpSet<f64>>,
}

impl Drawable {
    fn empty(shape: Shape) -> Self {
        Self {
            shape,
            sets: Vec::new(),
        }
    }
}

type Polygon = Vec<Point2D<f64>>;

fn points2d(points: &[Point]) -> Polygon {
    points.iter().map(|p| Point2D::new(p.x, p.y)).collect()
}

fn is_solid(options: &StyleOptions) -> bool {
    options.fill_style == Some(FillStyle::Solid)
}

/// `solidFillPolygon` or `patternFillPolygons`, depending on the fill style.
fn fill_polygons(polygons: Vec<Polygon>, style: &StyleOptions, o: &mut Options) -> OpSet<f64> {
    if is_solid(style) {
        roughr::renderer::solid_fill_polygon(&polygons, o)
    } else {
        roughr::renderer::pattern_fill_polygons(polygons, o)
    }
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, style: &StyleOptions) -> Drawable {
    let Some(mut o) = to_roughr(style) else {
        return Drawable::empty(Shape::Line);
    };
    Drawable {
        shape: Shape::Line,
        sets: vec![roughr::renderer::line::<f64>(x1, y1, x2, y2, &mut o)],
    }
}

pub fn rectangle(x: f64, y: f64, width: f64, height: f64, style: &StyleOptions) -> Drawable {
    let Some(mut o) = to_roughr(style) else {
        return Drawable::empty(Shape::Rectangle);
    };
    let outline = roughr::renderer::rectangle::<f64>(x, y, width, height, &mut o);
    let mut sets = Vec::with_capacity(2);
    if style.has_fill() {
        let corners = vec![
            Point2D::new(x, y),
            Point2D::new(x + width, y),
            Point2D::new(x + width, y + height),
            Point2D::new(x, y + height),
        ];
        sets.push(fill_polygons(vec![corners], style, &mut o));
    }
    if style.has_stroke() {
        sets.push(outline);
    }
    Drawable {
        shape: Shape::Rectangle,
        sets,
    }
}

/// Ellipse centered on `(cx, cy)`.
pub fn ellipse(cx: f64, cy: f64, width: f64, height: f64, style: &StyleOptions) -> Drawable {
    let Some(mut o) = to_roughr(style) else {
        return Drawable::empty(Shape::Ellipse);
    };
    let outline = roughr::renderer::ellipse::<f64>(cx, cy, width, height, &mut o);
    let mut sets = Vec::with_capacity(2);
    if style.has_fill() {
        if is_solid(style) {
            let mut shape = roughr::renderer::ellipse::<f64>(cx, cy, width, height, &mut o);
            shape.op_set_type = OpSetType::FillPath;
            sets.push(shape);
        } else {
            let points = estimated_ellipse_points(cx, cy, width, height, style);
            sets.push(fill_polygons(vec![points], style, &mut o));
        }
    }
    if style.has_stroke() {
        sets.push(outline);
    }
    Drawable {
        shape: Shape::Ellipse,
        sets,
    }
}

/// Polygon approximating an ellipse outline, with RoughJS' step count.
fn estimated_ellipse_points(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    style: &StyleOptions,
) -> Polygon {
    let step_count = style.curve_step_count.unwrap_or(9.0);
    let (rx, ry) = (width.abs() / 2.0, height.abs() / 2.0);
    let psq = (std::f64::consts::TAU * ((rx * rx + ry * ry) / 2.0).sqrt()).sqrt();
    let steps = step_count.max(step_count / 200f64.sqrt() * psq).ceil().max(3.0) as usize;
    let increment = std::f64::consts::TAU / steps as f64;
    (0..steps)
        .map(|i| {
            let angle = i as f64 * increment;
            Point2D::new(cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect()
}

pub fn polygon(points: &[Point], style: &StyleOptions) -> Drawable {
    let points = points2d(points);
    let Some(mut o) = to_roughr(style) else {
        return Drawable::empty(Shape::Polygon);
    };
    let outline = roughr::renderer::polygon::<f64>(&points, &mut o);
    let mut sets = Vec::with_capacity(2);
    if style.has_fill() {
        sets.push(fill_polygons(vec![points], style, &mut o));
    }
    if style.has_stroke() {
        sets.push(outline);
    }
    Drawable {
        shape: Shape::Polygon,
        sets,
    }
}

pub fn linear_path(points: &[Point], style: &StyleOptions) -> Drawable {
    let Some(mut o) = to_roughr(style) else {
        return Drawable::empty(Shape::LinearPath);
    };
    Drawable {
        shape: Shape::LinearPath,
        sets: vec![roughr::renderer::linear_path::<f64>(&points2d(points), false, &mut o)],
    }
}

/// Newlines become spaces and `- ` is joined to the number it signs.
fn normalize_path_data(d: &str) -> String {
    d.replace('\n', " ").replace("- ", "-")
}

/// RoughJS `generator.path`: the outline is sketched from the path itself, the fill from the
/// point sets the path flattens to.
pub fn path(d: &str, style: &StyleOptions) -> Drawable {
    let mut sets = Vec::with_capacity(2);
    let d = normalize_path_data(d);
    if d.trim().is_empty() {
        return Drawable::empty(Shape::Path);
    }

    let Some(mut o) = to_roughr(style) else {
        return Drawable::empty(Shape::Path);
    };
    let roughness = style.roughness.unwrap_or(1.0);
    let simplification = style.simplification.unwrap_or(0.0);
    let simplified = simplification > 0.0 && simplification < 1.0;
    let distance = if simplified {
        4.0 - 4.0 * simplification
    } else {
        (1.0 + roughness) / 2.0
    };
    let point_sets =
        roughr::points_on_path::points_on_path::<f64>(d.clone(), Some(1.0), Some(distance));
    let shape = roughr::renderer::svg_path::<f64>(d.clone(), &mut o);

    if style.has_fill() {
        if is_solid(style) && point_sets.len() == 1 {
            let gain = style
                .fill_shape_roughness_gain
                .unwrap_or(DEFAULT_FILL_SHAPE_ROUGHNESS_GAIN);
            let mut fill_opts = o.clone();
            fill_opts.disable_multi_stroke = Some(true);
            fill_opts.roughness = Some(if roughness != 0.0 {
                (roughness + gain) as f32
            } else {
                0.0
            });
            let mut fill = roughr::renderer::svg_path::<f64>(d.clone(), &mut fill_opts);
            fill.op_set_type = OpSetType::FillPath;
            fill.ops = merged_shape(fill.ops);
            sets.push(fill);
        } else {
            sets.push(fill_polygons(point_sets.clone(), style, &mut o));
        }
    }

    if style.has_stroke() {
        if simplified {
            for set in &point_sets {
                sets.push(roughr::renderer::linear_path::<f64>(set, false, &mut o));
            }
        } else {
            sets.push(shape);
        }
    }

    Drawable {
        shape: Shape::Path,
        sets,
    }
}

/// Keeps the first move and drops every later one, so a multi-stroke outline fills as a
/// single shape.
fn merged_shape(ops: Vec<roughr::core::Op<f64>>) -> Vec<roughr::core::Op<f64>> {
    ops.into_iter()
        .enumerate()
        .filter(|(idx, op)| *idx == 0 || op.op != OpType::Move)
        .map(|(_, op)| op)
        .collect()
}
