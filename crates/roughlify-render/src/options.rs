//! Style options -> `roughr` options.

use roughlify_core::{FillStyle, StyleOptions};

/// RoughJS default for `fillShapeRoughnessGain`.
pub const DEFAULT_FILL_SHAPE_ROUGHNESS_GAIN: f64 = 0.8;

/// RoughJS default stroke color.
pub const DEFAULT_STROKE: &str = "#000";

pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

pub(crate) fn fill_style(style: FillStyle) -> roughr::core::FillStyle {
    match style {
        FillStyle::Solid => roughr::core::FillStyle::Solid,
        FillStyle::Hachure => roughr::core::FillStyle::Hachure,
        FillStyle::Zigzag => roughr::core::FillStyle::ZigZag,
        FillStyle::CrossHatch => roughr::core::FillStyle::CrossHatch,
        FillStyle::Dots => roughr::core::FillStyle::Dots,
        FillStyle::Dashed => roughr::core::FillStyle::Dashed,
        FillStyle::ZigzagLine => roughr::core::FillStyle::ZigZagLine,
    }
}

/// RoughJS default bowing; the `roughr` builder defaults to a stronger curve.
pub const DEFAULT_BOWING: f64 = 1.0;

/// Builds fresh `roughr` options for one shape call, so the PRNG state never leaks between
/// shapes: an explicit seed reproduces the same strokes, seed `0`/absent draws fresh randomness.
///
/// Colors stay out of the `roughr` options; the SVG writer takes them from `StyleOptions`.
pub(crate) fn to_roughr(options: &StyleOptions) -> Option<roughr::core::Options> {
    let f = |v: f64| v as f32;
    let mut builder = roughr::core::OptionsBuilder::default();
    builder
        .bowing(f(options.bowing.unwrap_or(DEFAULT_BOWING)))
        .fill_style(fill_style(options.fill_style.unwrap_or_default()));

    if let Some(v) = options.max_randomness_offset {
        builder.max_randomness_offset(f(v));
    }
    if let Some(v) = options.roughness {
        builder.roughness(f(v));
    }
    if let Some(seed) = options.seed {
        builder.seed(seed);
    }
    if let Some(v) = options.stroke_width {
        builder.stroke_width(f(v));
    }
    if let Some(v) = options.curve_fitting {
        builder.curve_fitting(f(v));
    }
    if let Some(v) = options.curve_tightness {
        builder.curve_tightness(f(v));
    }
    if let Some(v) = options.curve_step_count {
        builder.curve_step_count(f(v));
    }
    if let Some(v) = options.fill_weight {
        builder.fill_weight(f(v));
    }
    if let Some(v) = options.hachure_angle {
        builder.hachure_angle(f(v));
    }
    if let Some(v) = options.hachure_gap {
        builder.hachure_gap(f(v));
    }
    if let Some(v) = options.simplification {
        builder.simplification(f(v));
    }
    if let Some(v) = options.dash_offset {
        builder.dash_offset(f(v));
    }
    if let Some(v) = options.dash_gap {
        builder.dash_gap(f(v));
    }
    if let Some(v) = options.zigzag_offset {
        builder.zigzag_offset(f(v));
    }
    if let Some(dash) = &options.stroke_line_dash {
        builder.stroke_line_dash(dash.clone());
    }
    if let Some(v) = options.stroke_line_dash_offset {
        builder.stroke_line_dash_offset(v);
    }
    if let Some(dash) = &options.fill_line_dash {
        builder.fill_line_dash(dash.clone());
    }
    if let Some(v) = options.fill_line_dash_offset {
        builder.fill_line_dash_offset(v);
    }
    if let Some(v) = options.disable_multi_stroke {
        builder.disable_multi_stroke(v);
    }
    if let Some(v) = options.disable_multi_stroke_fill {
        builder.disable_multi_stroke_fill(v);
    }
    if let Some(v) = options.preserve_vertices {
        builder.preserve_vertices(v);
    }

    match builder.build() {
        Ok(o) => Some(o),
        Err(err) => {
            tracing::debug!(%err, "invalid roughr options");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_keep_roughr_defaults() {
        let o = to_roughr(&StyleOptions::default()).unwrap();
        let d = roughr::core::Options::default();
        assert_eq!(o.roughness, d.roughness);
        assert_eq!(o.bowing, d.bowing);
        assert_eq!(o.bowing, Some(DEFAULT_BOWING as f32));
        assert_eq!(o.seed, d.seed);
        assert_eq!(o.hachure_angle, d.hachure_angle);
        assert_eq!(o.fill_style, Some(roughr::core::FillStyle::Hachure));
    }

    #[test]
    fn set_keys_are_forwarded() {
        let o = to_roughr(&StyleOptions {
            roughness: Some(2.5),
            seed: Some(7),
            fill_style: Some(FillStyle::CrossHatch),
            stroke_line_dash: Some(vec![4.0, 2.0]),
            disable_multi_stroke: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(o.roughness, Some(2.5));
        assert_eq!(o.seed, Some(7));
        assert_eq!(o.fill_style, Some(roughr::core::FillStyle::CrossHatch));
        assert_eq!(o.stroke_line_dash, Some(vec![4.0, 2.0]));
        assert_eq!(o.disable_multi_stroke, Some(true));
    }
}
