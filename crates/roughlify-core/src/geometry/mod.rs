//! Geometry decoders: one per supported primitive kind.
//!
//! A decoder reads the camelized attributes of an element, takes the fields its kind owns and
//! leaves everything else as residual attributes. Elements missing a required field (absent,
//! empty or not a finite number) are dropped rather than failing the document.

mod points;
mod rounded_rect;

pub use points::{Point, parse_points};
pub use rounded_rect::{corner_radii, rounded_rect_path};

use crate::attributes::extract;
use crate::dom::{Attributes, Element};
use crate::number::parse_number;
use crate::options::StyleOptions;
use crate::sketch::Sketcher;

/// The supported primitive kinds, keyed by SVG tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Path,
    Line,
    Circle,
    Rect,
    Ellipse,
    Polygon,
    Polyline,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Path,
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Rect,
        ShapeKind::Ellipse,
        ShapeKind::Polygon,
        ShapeKind::Polyline,
    ];

    pub fn from_tag(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == name)
    }

    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Path => "path",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Polyline => "polyline",
        }
    }

    pub fn decode(self, element: &Element) -> Option<Decoded> {
        let mut attrs = extract(element, true);
        let geometry = match self {
            ShapeKind::Path => decode_path(&mut attrs),
            ShapeKind::Line => decode_line(&mut attrs),
            ShapeKind::Circle => decode_circle(&mut attrs),
            ShapeKind::Rect => decode_rect(&mut attrs),
            ShapeKind::Ellipse => decode_ellipse(&mut attrs),
            ShapeKind::Polygon => {
                take_points(&mut attrs).map(|points| Geometry::Polygon { points })
            }
            ShapeKind::Polyline => {
                take_points(&mut attrs).map(|points| Geometry::Polyline { points })
            }
        };
        match geometry {
            Some(geometry) => Some(Decoded {
                geometry,
                residual: attrs,
            }),
            None => {
                tracing::debug!(tag = self.tag(), "skipping shape with missing or invalid geometry");
                None
            }
        }
    }
}

/// Decoded positional data of one element, in the units the render primitive expects
/// (diameters rather than radii).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Path { d: String },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { cx: f64, cy: f64, diameter: f64 },
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    Ellipse { cx: f64, cy: f64, width: f64, height: f64 },
    Polygon { points: Vec<Point> },
    Polyline { points: Vec<Point> },
}

impl Geometry {
    /// Hands the record to the matching render call.
    pub fn sketch(&self, sketcher: &mut dyn Sketcher, options: &StyleOptions) -> Vec<Element> {
        match self {
            Geometry::Path { d } => sketcher.path(d, options),
            Geometry::Line { x1, y1, x2, y2 } => sketcher.line(*x1, *y1, *x2, *y2, options),
            Geometry::Circle { cx, cy, diameter } => sketcher.circle(*cx, *cy, *diameter, options),
            Geometry::Rectangle {
                x,
                y,
                width,
                height,
            } => sketcher.rectangle(*x, *y, *width, *height, options),
            Geometry::Ellipse {
                cx,
                cy,
                width,
                height,
            } => sketcher.ellipse(*cx, *cy, *width, *height, options),
            Geometry::Polygon { points } => sketcher.polygon(points, options),
            Geometry::Polyline { points } => sketcher.linear_path(points, options),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub geometry: Geometry,
    /// Attributes not consumed as geometry, camelized.
    pub residual: Attributes,
}

/// Removes every listed field, then checks them all. Fields are consumed even when the element
/// turns out to be malformed, which is harmless since the residual is dropped with it.
fn take_numbers<const N: usize>(attrs: &mut Attributes, names: [&str; N]) -> Option<[f64; N]> {
    let raw = names.map(|name| attrs.shift_remove(name));
    let mut out = [0.0; N];
    for (slot, value) in out.iter_mut().zip(raw) {
        *slot = parse_number(&value?)?;
    }
    Some(out)
}

fn take_non_empty(attrs: &mut Attributes, name: &str) -> Option<String> {
    attrs
        .shift_remove(name)
        .filter(|value| !value.trim().is_empty())
}

fn take_points(attrs: &mut Attributes) -> Option<Vec<Point>> {
    parse_points(&take_non_empty(attrs, "points")?)
}

fn decode_path(attrs: &mut Attributes) -> Option<Geometry> {
    take_non_empty(attrs, "d").map(|d| Geometry::Path { d })
}

fn decode_line(attrs: &mut Attributes) -> Option<Geometry> {
    let [x1, y1, x2, y2] = take_numbers(attrs, ["x1", "y1", "x2", "y2"])?;
    Some(Geometry::Line { x1, y1, x2, y2 })
}

fn decode_circle(attrs: &mut Attributes) -> Option<Geometry> {
    let [cx, cy, r] = take_numbers(attrs, ["cx", "cy", "r"])?;
    Some(Geometry::Circle {
        cx,
        cy,
        diameter: r * 2.0,
    })
}

fn decode_ellipse(attrs: &mut Attributes) -> Option<Geometry> {
    let [cx, cy, rx, ry] = take_numbers(attrs, ["cx", "cy", "rx", "ry"])?;
    Some(Geometry::Ellipse {
        cx,
        cy,
        width: rx * 2.0,
        height: ry * 2.0,
    })
}

fn decode_rect(attrs: &mut Attributes) -> Option<Geometry> {
    let rx = attrs.shift_remove("rx");
    let ry = attrs.shift_remove("ry");
    let mut offset = |name: &str| match attrs.shift_remove(name) {
        Some(raw) if !raw.trim().is_empty() => parse_number(&raw),
        _ => Some(0.0),
    };
    let x = offset("x")?;
    let y = offset("y")?;
    let [width, height] = take_numbers(attrs, ["width", "height"])?;

    if let Some(d) = rounded_rect_path(x, y, width, height, rx.as_deref(), ry.as_deref()) {
        return Some(Geometry::Path { d });
    }
    Some(Geometry::Rectangle {
        x,
        y,
        width,
        height,
    })
}
