use clap::Parser;
use roughlify::{FillStyle, StyleOptions};
use std::path::PathBuf;

/// Make your SVG rough.
///
/// Every `<svg>` found in the input is replaced by a hand-drawn version. Style flags have no
/// built-in defaults: a flag that is not given never overrides the attributes of the drawing.
#[derive(clap::Parser, Debug, Clone)]
#[command(name = "roughlify", author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// SVG or HTML file to roughlify (could be an URL).
    pub(crate) input: String,
    /// Output file. Defaults to the input name with `.rough` inserted before the extension.
    #[arg(short = 'o', long)]
    pub(crate) output: Option<PathBuf>,
    /// JSON file with style options (camelCase keys). Command-line flags win over it.
    #[arg(short = 'c', long)]
    pub(crate) config: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) style: StyleArgs,
}

/// A comma separated list of numbers (example: `5,5`).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NumberList(pub(crate) Vec<f64>);

fn parse_number_list(raw: &str) -> Result<NumberList, String> {
    raw.split(',')
        .map(|p| {
            let p: String = p.chars().filter(|c| *c != ' ').collect();
            p.parse::<f64>()
                .map_err(|_| format!("'{p}' is not a number"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(NumberList)
}

#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct StyleArgs {
    /// Stroke color.
    #[arg(short = 's', long)]
    pub(crate) stroke: Option<String>,
    /// Fill color.
    #[arg(short = 'f', long)]
    pub(crate) fill: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) max_randomness_offset: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) roughness: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) bowing: Option<f64>,
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    #[arg(long)]
    pub(crate) stroke_width: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) curve_fitting: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) curve_tightness: Option<f64>,
    #[arg(long)]
    pub(crate) curve_step_count: Option<f64>,
    #[arg(long, value_enum)]
    pub(crate) fill_style: Option<FillStyle>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) fill_weight: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) hachure_angle: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) hachure_gap: Option<f64>,
    #[arg(long)]
    pub(crate) simplification: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) dash_offset: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) dash_gap: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) zigzag_offset: Option<f64>,
    /// Stroke dash pattern (example: '5,5').
    #[arg(long, value_parser = parse_number_list)]
    pub(crate) stroke_line_dash: Option<NumberList>,
    #[arg(long, alias = "stroke-line-offset", allow_negative_numbers = true)]
    pub(crate) stroke_line_dash_offset: Option<f64>,
    /// Fill dash pattern (example: '5,5').
    #[arg(long, value_parser = parse_number_list)]
    pub(crate) fill_line_dash: Option<NumberList>,
    #[arg(long, alias = "fill-line-offset", allow_negative_numbers = true)]
    pub(crate) fill_line_dash_offset: Option<f64>,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(crate) disable_multi_stroke: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(crate) disable_multi_stroke_fill: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(crate) preserve_vertices: bool,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) fill_shape_roughness_gain: Option<f64>,
}

impl StyleArgs {
    /// Only the flags that were given; unset switches stay `None`.
    pub(crate) fn to_options(&self) -> StyleOptions {
        let set = |flag: bool| flag.then_some(true);
        StyleOptions {
            max_randomness_offset: self.max_randomness_offset,
            roughness: self.roughness,
            bowing: self.bowing,
            seed: self.seed,
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
            curve_fitting: self.curve_fitting,
            curve_tightness: self.curve_tightness,
            curve_step_count: self.curve_step_count,
            fill: self.fill.clone(),
            fill_style: self.fill_style,
            fill_weight: self.fill_weight,
            hachure_angle: self.hachure_angle,
            hachure_gap: self.hachure_gap,
            simplification: self.simplification,
            dash_offset: self.dash_offset,
            dash_gap: self.dash_gap,
            zigzag_offset: self.zigzag_offset,
            stroke_line_dash: self.stroke_line_dash.clone().map(|l| l.0),
            stroke_line_dash_offset: self.stroke_line_dash_offset,
            fill_line_dash: self.fill_line_dash.clone().map(|l| l.0),
            fill_line_dash_offset: self.fill_line_dash_offset,
            disable_multi_stroke: set(self.disable_multi_stroke),
            disable_multi_stroke_fill: set(self.disable_multi_stroke_fill),
            preserve_vertices: set(self.preserve_vertices),
            fill_shape_roughness_gain: self.fill_shape_roughness_gain,
        }
    }
}

pub(crate) fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("roughlify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn absent_flags_stay_unset() {
        let cli = parse_from(&["drawing.svg"]);
        assert_eq!(cli.input, "drawing.svg");
        assert_eq!(cli.style.to_options(), StyleOptions::default());
    }

    #[test]
    fn style_flags_map_to_options() {
        let cli = parse_from(&[
            "--roughness",
            "2.5",
            "--hachure-angle",
            "-60",
            "--fill-style",
            "cross-hatch",
            "--stroke-line-dash",
            "5, 5",
            "--fill-line-offset",
            "3",
            "-s",
            "red",
            "--disable-multi-stroke",
            "page.html",
        ]);
        let options = cli.style.to_options();
        assert_eq!(options.roughness, Some(2.5));
        assert_eq!(options.hachure_angle, Some(-60.0));
        assert_eq!(options.fill_style, Some(FillStyle::CrossHatch));
        assert_eq!(options.stroke_line_dash, Some(vec![5.0, 5.0]));
        assert_eq!(options.fill_line_dash_offset, Some(3.0));
        assert_eq!(options.stroke.as_deref(), Some("red"));
        assert_eq!(options.disable_multi_stroke, Some(true));
        assert_eq!(options.preserve_vertices, None);
        assert_eq!(cli.input, "page.html");
    }

    #[test]
    fn rejects_unknown_fill_styles_and_bad_lists() {
        let args = |extra: &[&str]| {
            Cli::try_parse_from(
                ["roughlify", "a.svg"]
                    .into_iter()
                    .chain(extra.iter().copied()),
            )
        };
        assert!(args(&["--fill-style", "crayon"]).is_err());
        assert!(args(&["--stroke-line-dash", "5,x"]).is_err());
    }
}
