use roughlify_core::{Element, StyleOptions, transform};
use roughlify_render::RoughSvg;

const SHAPES: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">
  <path d="M10 10 L90 10 L90 90 Z"/>
  <line x1="0" y1="0" x2="100" y2="100"/>
  <circle cx="50" cy="50" r="20"/>
  <rect x="10" y="10" width="80" height="40"/>
  <rect x="10" y="60" width="80" height="40" rx="8"/>
  <ellipse cx="100" cy="100" rx="30" ry="10"/>
  <polygon points="0,0 40,40 80,0"/>
  <polyline points="0,0 40,40 80,0"/>
</svg>"#;

fn seeded(seed: u64) -> StyleOptions {
    StyleOptions {
        seed: Some(seed),
        ..Default::default()
    }
}

fn render(svg: &str, options: &StyleOptions) -> (Element, String) {
    let input = Element::parse_svg(svg).unwrap();
    let mut sketcher = RoughSvg::new();
    let output = transform(&input, options, &mut sketcher);
    let text = output.to_svg_string();
    (output, text)
}

#[test]
fn every_shape_becomes_a_group_of_paths() {
    let (output, text) = render(SHAPES, &seeded(7));
    let doc = roxmltree::Document::parse(&text).unwrap();
    let root = doc.root_element();
    assert_eq!(root.attribute("viewBox"), Some("0 0 200 200"));

    let groups: Vec<_> = root.children().filter(|n| n.is_element()).collect();
    assert_eq!(groups.len(), 8);
    for g in &groups {
        assert_eq!(g.tag_name().name(), "g");
        let paths: Vec<_> = g.children().filter(|n| n.has_tag_name("path")).collect();
        assert!(!paths.is_empty());
        for p in paths {
            let d = p.attribute("d").unwrap();
            assert!(d.starts_with('M'), "{d}");
            assert_eq!(p.attribute("fill"), Some("none"));
            assert_eq!(p.attribute("stroke"), Some("#000"));
            assert_eq!(p.attribute("stroke-width"), Some("1"));
        }
    }
    assert_eq!(output.child_elements().count(), 8);
}

#[test]
fn explicit_seed_is_reproducible() {
    let (_, a) = render(SHAPES, &seeded(42));
    let (_, b) = render(SHAPES, &seeded(42));
    let (_, c) = render(SHAPES, &seeded(43));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn solid_fill_is_painted_before_the_outline() {
    let options = StyleOptions {
        fill: Some("#ff0000".into()),
        fill_style: Some(roughlify_core::FillStyle::Solid),
        ..seeded(3)
    };
    let (_, text) = render(
        r#"<svg><polygon points="0,0 40,40 80,0"/></svg>"#,
        &options,
    );
    let doc = roxmltree::Document::parse(&text).unwrap();
    let paths: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("path")).collect();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].attribute("fill"), Some("#ff0000"));
    assert_eq!(paths[0].attribute("stroke"), Some("none"));
    assert_eq!(paths[0].attribute("fill-rule"), Some("evenodd"));
    assert_eq!(paths[1].attribute("fill"), Some("none"));
}

#[test]
fn hachure_fill_strokes_with_the_fill_color() {
    let (_, text) = render(
        r##"<svg><circle cx="50" cy="50" r="40" fill="#00f" stroke="none"/></svg>"##,
        &StyleOptions {
            fill_weight: Some(2.0),
            ..seeded(5)
        },
    );
    let doc = roxmltree::Document::parse(&text).unwrap();
    let paths: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("path")).collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].attribute("stroke"), Some("#00f"));
    assert_eq!(paths[0].attribute("stroke-width"), Some("2"));
    assert_eq!(paths[0].attribute("fill"), Some("none"));
}

#[test]
fn global_stroke_overrides_element_stroke() {
    let (_, text) = render(
        r#"<svg><line x1="0" y1="0" x2="10" y2="10" stroke="red" stroke-width="4"/></svg>"#,
        &StyleOptions {
            stroke: Some("blue".into()),
            stroke_line_dash: Some(vec![5.0, 5.0]),
            ..seeded(9)
        },
    );
    let doc = roxmltree::Document::parse(&text).unwrap();
    let path = doc.descendants().find(|n| n.has_tag_name("path")).unwrap();
    assert_eq!(path.attribute("stroke"), Some("blue"));
    assert_eq!(path.attribute("stroke-width"), Some("4"));
    assert_eq!(path.attribute("stroke-dasharray"), Some("5 5"));
}

#[test]
fn rendered_paths_are_primitives_again() {
    let (first, _) = render(
        r#"<svg><rect width="10" height="10"/></svg>"#,
        &seeded(11),
    );
    let first_paths = roughlify_core::walk::descendants(&first)
        .filter(|el| el.name == "path")
        .count();
    assert!(first_paths >= 1);

    let mut sketcher = RoughSvg::new();
    let second = transform(&first, &seeded(11), &mut sketcher);
    assert_eq!(sketcher.drawn(), first_paths);
    assert_eq!(second.child_elements().count(), first_paths);
}
