//! Drawable -> SVG nodes, the way RoughJS' SVG canvas writes them.

use crate::generator::{Drawable, Shape};
use crate::options::{DEFAULT_STROKE, DEFAULT_STROKE_WIDTH};
use roughlify_core::Element;
use roughlify_core::StyleOptions;
use roughlify_core::number::{fmt_js, push_js};
use roughr::core::{OpSet, OpSetType, OpType};

/// RoughJS `opsToPath`: `M`, `C` and `L` commands, numbers in JS `Number.toString` form.
pub fn ops_to_path(opset: &OpSet<f64>) -> String {
    let mut out = String::new();
    let mut buf = ryu_js::Buffer::new();
    for op in &opset.ops {
        let (cmd, arity) = match op.op {
            OpType::Move => ('M', 2),
            OpType::BCurveTo => ('C', 6),
            OpType::LineTo => ('L', 2),
        };
        out.push(cmd);
        for (i, v) in op.data.iter().take(arity).enumerate() {
            match i {
                0 => {}
                i if i % 2 == 0 => out.push_str(", "),
                _ => out.push(' '),
            }
            push_js(&mut out, *v, &mut buf);
        }
        out.push(' ');
    }
    out.trim_end().to_string()
}

fn join_dash(values: &[f64]) -> String {
    values.iter().map(|v| fmt_js(*v)).collect::<Vec<_>>().join(" ")
}

/// One `<g>` holding a `<path>` per op set, in paint order.
pub fn drawable_to_group(drawable: &Drawable, style: &StyleOptions) -> Element {
    let mut group = Element::new("g");
    for set in &drawable.sets {
        let d = ops_to_path(set);
        let path = match set.op_set_type {
            OpSetType::Path => outline_path(d, style),
            OpSetType::FillPath => fill_path(d, drawable.shape, style),
            OpSetType::FillSketch => fill_sketch(d, style),
        };
        group.append(path);
    }
    group
}

fn stroke_width(style: &StyleOptions) -> f64 {
    style.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH)
}

fn outline_path(d: String, style: &StyleOptions) -> Element {
    let mut path = Element::new("path")
        .with_attr("d", d)
        .with_attr("stroke", style.stroke.as_deref().unwrap_or(DEFAULT_STROKE))
        .with_attr("stroke-width", fmt_js(stroke_width(style)))
        .with_attr("fill", "none");
    if let Some(dash) = &style.stroke_line_dash {
        path.set_attr("stroke-dasharray", join_dash(dash));
    }
    if let Some(offset) = style.stroke_line_dash_offset.filter(|v| *v != 0.0) {
        path.set_attr("stroke-dashoffset", fmt_js(offset));
    }
    path
}

fn fill_path(d: String, shape: Shape, style: &StyleOptions) -> Element {
    let mut path = Element::new("path")
        .with_attr("d", d)
        .with_attr("stroke", "none")
        .with_attr("stroke-width", "0")
        .with_attr("fill", style.fill.as_deref().unwrap_or_default());
    if shape == Shape::Polygon {
        path.set_attr("fill-rule", "evenodd");
    }
    path
}

fn fill_sketch(d: String, style: &StyleOptions) -> Element {
    let weight = match style.fill_weight {
        Some(w) if w >= 0.0 => w,
        _ => stroke_width(style) / 2.0,
    };
    let mut path = Element::new("path")
        .with_attr("d", d)
        .with_attr("stroke", style.fill.as_deref().unwrap_or_default())
        .with_attr("stroke-width", fmt_js(weight))
        .with_attr("fill", "none");
    if let Some(dash) = &style.fill_line_dash {
        path.set_attr("stroke-dasharray", join_dash(dash));
    }
    if let Some(offset) = style.fill_line_dash_offset.filter(|v| *v != 0.0) {
        path.set_attr("stroke-dashoffset", fmt_js(offset));
    }
    path
}
