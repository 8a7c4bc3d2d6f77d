use crate::*;

mod batch;

/// One recorded render call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub geometry: Geometry,
    pub options: StyleOptions,
}

/// Records every render call and emits one `<sketch>` placeholder per call. The placeholder tag
/// is not a supported primitive, so re-running a transformation on its output renders nothing.
#[derive(Debug, Default)]
pub(crate) struct RecordingSketcher {
    pub calls: Vec<Call>,
}

impl RecordingSketcher {
    fn record(&mut self, geometry: Geometry, options: &StyleOptions) -> Vec<Element> {
        let kind = match &geometry {
            Geometry::Path { .. } => "path",
            Geometry::Line { .. } => "line",
            Geometry::Circle { .. } => "circle",
            Geometry::Rectangle { .. } => "rectangle",
            Geometry::Ellipse { .. } => "ellipse",
            Geometry::Polygon { .. } => "polygon",
            Geometry::Polyline { .. } => "linear_path",
        };
        let index = self.calls.len();
        self.calls.push(Call {
            geometry,
            options: options.clone(),
        });
        vec![
            Element::new("sketch")
                .with_attr("call", kind)
                .with_attr("index", index.to_string()),
        ]
    }
}

impl Sketcher for RecordingSketcher {
    fn path(&mut self, d: &str, options: &StyleOptions) -> Vec<Element> {
        self.record(Geometry::Path { d: d.to_string() }, options)
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, options: &StyleOptions) -> Vec<Element> {
        self.record(Geometry::Line { x1, y1, x2, y2 }, options)
    }

    fn circle(&mut self, cx: f64, cy: f64, diameter: f64, options: &StyleOptions) -> Vec<Element> {
        self.record(Geometry::Circle { cx, cy, diameter }, options)
    }

    fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &StyleOptions,
    ) -> Vec<Element> {
        self.record(
            Geometry::Rectangle {
                x,
                y,
                width,
                height,
            },
            options,
        )
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        options: &StyleOptions,
    ) -> Vec<Element> {
        self.record(
            Geometry::Ellipse {
                cx,
                cy,
                width,
                height,
            },
            options,
        )
    }

    fn polygon(&mut self, points: &[Point], options: &StyleOptions) -> Vec<Element> {
        self.record(
            Geometry::Polygon {
                points: points.to_vec(),
            },
            options,
        )
    }

    fn linear_path(&mut self, points: &[Point], options: &StyleOptions) -> Vec<Element> {
        self.record(
            Geometry::Polyline {
                points: points.to_vec(),
            },
            options,
        )
    }
}

pub(crate) fn svg(text: &str) -> Element {
    Element::parse_svg(text).unwrap()
}

/// Transforms `input` with a fresh recorder and returns both the output root and the calls.
pub(crate) fn record(input: &Element, options: &StyleOptions) -> (Element, Vec<Call>) {
    let mut sketcher = RecordingSketcher::default();
    let output = transform(input, options, &mut sketcher);
    (output, sketcher.calls)
}
