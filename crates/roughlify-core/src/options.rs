//! Style options: the global configuration of one transformation, and the per-element hints
//! recovered from residual attributes.

use crate::dom::Attributes;
use crate::number::{parse_number, parse_number_list};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fill styles understood by the rough renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    Solid,
    #[default]
    Hachure,
    Zigzag,
    CrossHatch,
    Dots,
    Dashed,
    ZigzagLine,
}

impl FillStyle {
    pub const ALL: [FillStyle; 7] = [
        FillStyle::Solid,
        FillStyle::Hachure,
        FillStyle::Zigzag,
        FillStyle::CrossHatch,
        FillStyle::Dots,
        FillStyle::Dashed,
        FillStyle::ZigzagLine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FillStyle::Solid => "solid",
            FillStyle::Hachure => "hachure",
            FillStyle::Zigzag => "zigzag",
            FillStyle::CrossHatch => "cross-hatch",
            FillStyle::Dots => "dots",
            FillStyle::Dashed => "dashed",
            FillStyle::ZigzagLine => "zigzag-line",
        }
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fill style `{0}`")]
pub struct UnknownFillStyle(pub String);

impl FromStr for FillStyle {
    type Err = UnknownFillStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FillStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFillStyle(s.to_string()))
    }
}

/// Every key is optional: `None` means "fall back to the per-element attribute, then to the
/// renderer default". Key names on the wire are the rough.js camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_randomness_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_fitting: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_tightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_step_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_style: Option<FillStyle>,
    /// Width of sketch fill lines; half the stroke width when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_weight: Option<f64>,
    /// Degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hachure_angle: Option<f64>,
    /// Four times the stroke width when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hachure_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplification: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zigzag_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_line_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_line_dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_line_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_line_dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_multi_stroke: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_multi_stroke_fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_vertices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_shape_roughness_gain: Option<f64>,
}

impl StyleOptions {
    /// The editor's reset preset.
    pub fn editor_defaults() -> Self {
        Self {
            roughness: Some(1.0),
            bowing: Some(1.0),
            seed: Some(43),
            stroke_width: Some(1.0),
            fill_style: Some(FillStyle::Solid),
            hachure_angle: Some(-41.0),
            simplification: Some(0.0),
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads style hints from camelized residual attributes. Unknown keys are ignored, and so
    /// are values that do not parse for their key.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let mut out = Self::default();
        for (key, value) in attrs {
            if !out.apply(key, value) {
                tracing::trace!(key = %key, value = %value, "ignoring style attribute");
            }
        }
        out
    }

    /// Sets one option from its camelCase key. Returns `false` when the key is unknown or the
    /// value does not parse.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        fn num(slot: &mut Option<f64>, value: &str) -> bool {
            match parse_number(value) {
                Some(v) => {
                    *slot = Some(v);
                    true
                }
                None => false,
            }
        }
        fn flag(slot: &mut Option<bool>, value: &str) -> bool {
            match value.trim() {
                "true" | "" => *slot = Some(true),
                "false" => *slot = Some(false),
                _ => return false,
            }
            true
        }
        fn list(slot: &mut Option<Vec<f64>>, value: &str) -> bool {
            match parse_number_list(value) {
                Some(v) => {
                    *slot = Some(v);
                    true
                }
                None => false,
            }
        }

        match key {
            "maxRandomnessOffset" => num(&mut self.max_randomness_offset, value),
            "roughness" => num(&mut self.roughness, value),
            "bowing" => num(&mut self.bowing, value),
            "seed" => match value.trim().parse::<u64>() {
                Ok(seed) => {
                    self.seed = Some(seed);
                    true
                }
                Err(_) => false,
            },
            "stroke" => {
                self.stroke = Some(value.to_string());
                true
            }
            "strokeWidth" => num(&mut self.stroke_width, value),
            "curveFitting" => num(&mut self.curve_fitting, value),
            "curveTightness" => num(&mut self.curve_tightness, value),
            "curveStepCount" => num(&mut self.curve_step_count, value),
            "fill" => {
                self.fill = Some(value.to_string());
                true
            }
            "fillStyle" => match value.parse::<FillStyle>() {
                Ok(style) => {
                    self.fill_style = Some(style);
                    true
                }
                Err(_) => false,
            },
            "fillWeight" => num(&mut self.fill_weight, value),
            "hachureAngle" => num(&mut self.hachure_angle, value),
            "hachureGap" => num(&mut self.hachure_gap, value),
            "simplification" => num(&mut self.simplification, value),
            "dashOffset" => num(&mut self.dash_offset, value),
            "dashGap" => num(&mut self.dash_gap, value),
            "zigzagOffset" => num(&mut self.zigzag_offset, value),
            "strokeLineDash" => list(&mut self.stroke_line_dash, value),
            "strokeLineDashOffset" => num(&mut self.stroke_line_dash_offset, value),
            "fillLineDash" => list(&mut self.fill_line_dash, value),
            "fillLineDashOffset" => num(&mut self.fill_line_dash_offset, value),
            "disableMultiStroke" => flag(&mut self.disable_multi_stroke, value),
            "disableMultiStrokeFill" => flag(&mut self.disable_multi_stroke_fill, value),
            "preserveVertices" => flag(&mut self.preserve_vertices, value),
            "fillShapeRoughnessGain" => num(&mut self.fill_shape_roughness_gain, value),
            _ => false,
        }
    }

    /// `self` overlaid with every key set in `over`: keys present in `over` always win, keys
    /// absent from `over` never clear a value of `self`.
    pub fn merge(&self, over: &StyleOptions) -> StyleOptions {
        StyleOptions {
            max_randomness_offset: over.max_randomness_offset.or(self.max_randomness_offset),
            roughness: over.roughness.or(self.roughness),
            bowing: over.bowing.or(self.bowing),
            seed: over.seed.or(self.seed),
            stroke: over.stroke.clone().or_else(|| self.stroke.clone()),
            stroke_width: over.stroke_width.or(self.stroke_width),
            curve_fitting: over.curve_fitting.or(self.curve_fitting),
            curve_tightness: over.curve_tightness.or(self.curve_tightness),
            curve_step_count: over.curve_step_count.or(self.curve_step_count),
            fill: over.fill.clone().or_else(|| self.fill.clone()),
            fill_style: over.fill_style.or(self.fill_style),
            fill_weight: over.fill_weight.or(self.fill_weight),
            hachure_angle: over.hachure_angle.or(self.hachure_angle),
            hachure_gap: over.hachure_gap.or(self.hachure_gap),
            simplification: over.simplification.or(self.simplification),
            dash_offset: over.dash_offset.or(self.dash_offset),
            dash_gap: over.dash_gap.or(self.dash_gap),
            zigzag_offset: over.zigzag_offset.or(self.zigzag_offset),
            stroke_line_dash: over
                .stroke_line_dash
                .clone()
                .or_else(|| self.stroke_line_dash.clone()),
            stroke_line_dash_offset: over.stroke_line_dash_offset.or(self.stroke_line_dash_offset),
            fill_line_dash: over
                .fill_line_dash
                .clone()
                .or_else(|| self.fill_line_dash.clone()),
            fill_line_dash_offset: over.fill_line_dash_offset.or(self.fill_line_dash_offset),
            disable_multi_stroke: over.disable_multi_stroke.or(self.disable_multi_stroke),
            disable_multi_stroke_fill: over
                .disable_multi_stroke_fill
                .or(self.disable_multi_stroke_fill),
            preserve_vertices: over.preserve_vertices.or(self.preserve_vertices),
            fill_shape_roughness_gain: over
                .fill_shape_roughness_gain
                .or(self.fill_shape_roughness_gain),
        }
    }

    /// A fill is drawn only when a color is set and it is not `none`/`transparent`.
    pub fn has_fill(&self) -> bool {
        self.fill.as_deref().is_some_and(|fill| {
            let fill = fill.trim();
            !fill.is_empty()
                && !fill.eq_ignore_ascii_case("none")
                && !fill.eq_ignore_ascii_case("transparent")
        })
    }

    /// The outline is skipped only for an explicit `stroke="none"`.
    pub fn has_stroke(&self) -> bool {
        !self
            .stroke
            .as_deref()
            .is_some_and(|stroke| stroke.trim().eq_ignore_ascii_case("none"))
    }
}
