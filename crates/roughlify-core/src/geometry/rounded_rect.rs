use crate::number::{js_number_to_string, parse_number};

/// Resolves one corner radius: a plain number, or a percentage of `basis`.
fn resolve_radius(raw: Option<&str>, basis: f64) -> Option<f64> {
    let raw = raw?.trim();
    let v = match raw.strip_suffix('%') {
        Some(pct) => parse_number(pct)? * basis / 100.0,
        None => parse_number(raw)?,
    };
    (v >= 0.0).then_some(v)
}

/// Effective `(rx, ry)` of a rectangle, or `None` when its corners are square.
///
/// A missing radius takes the value of the other one; percentages resolve against the width
/// (rx) or height (ry); radii are clamped to half of the matching side.
pub fn corner_radii(width: f64, height: f64, rx: Option<&str>, ry: Option<&str>) -> Option<(f64, f64)> {
    let (rx, ry) = match (resolve_radius(rx, width), resolve_radius(ry, height)) {
        (Some(rx), Some(ry)) => (rx, ry),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (None, None) => return None,
    };
    let rx = rx.min(width / 2.0);
    let ry = ry.min(height / 2.0);
    (rx > 0.0 && ry > 0.0).then_some((rx, ry))
}

/// Path data for a rounded rectangle: four straight edges joined by four quarter-arcs,
/// starting after the top-left corner and running clockwise. `None` when the corners are
/// square (see [`corner_radii`]).
pub fn rounded_rect_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rx: Option<&str>,
    ry: Option<&str>,
) -> Option<String> {
    let (rx, ry) = corner_radii(width, height, rx, ry)?;
    let mut buf = ryu_js::Buffer::new();
    let mut n = |v: f64| js_number_to_string(v, &mut buf).to_string();

    let arc = format!("A{} {} 0 0 1", n(rx), n(ry));
    Some(format!(
        "M{} {} H{} {arc} {} {} V{} {arc} {} {} H{} {arc} {} {} V{} {arc} {} {} Z",
        n(x + rx),
        n(y),
        n(x + width - rx),
        n(x + width),
        n(y + ry),
        n(y + height - ry),
        n(x + width - rx),
        n(y + height),
        n(x + rx),
        n(x),
        n(y + height - ry),
        n(y + ry),
        n(x + rx),
        n(y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_radius_applies_to_both_axes() {
        let d = rounded_rect_path(0.0, 0.0, 100.0, 50.0, Some("10"), None).unwrap();
        assert_eq!(
            d,
            "M10 0 H90 A10 10 0 0 1 100 10 V40 A10 10 0 0 1 90 50 H10 A10 10 0 0 1 0 40 V10 A10 10 0 0 1 10 0 Z"
        );
        assert_eq!(d.matches("A10 10 0 0 1").count(), 4);
    }

    #[test]
    fn percentages_resolve_against_their_own_side() {
        assert_eq!(
            corner_radii(200.0, 50.0, Some("10%"), Some("20%")),
            Some((20.0, 10.0))
        );
        assert_eq!(corner_radii(200.0, 50.0, None, Some("20%")), Some((10.0, 10.0)));
    }

    #[test]
    fn radii_are_clamped_to_half_the_side() {
        assert_eq!(corner_radii(20.0, 10.0, Some("30"), None), Some((10.0, 5.0)));
    }

    #[test]
    fn square_corners_produce_no_path() {
        assert_eq!(corner_radii(20.0, 10.0, None, None), None);
        assert_eq!(corner_radii(20.0, 10.0, Some("0"), None), None);
        assert_eq!(corner_radii(20.0, 10.0, Some("-4"), None), None);
        assert_eq!(rounded_rect_path(0.0, 0.0, 20.0, 10.0, Some("auto"), None), None);
    }

    #[test]
    fn offsets_follow_the_origin() {
        let d = rounded_rect_path(5.0, 2.5, 10.0, 10.0, Some("2"), Some("1")).unwrap();
        assert!(d.starts_with("M7 2.5 H13 A2 1 0 0 1 15 3.5 "));
        assert!(d.ends_with("V3.5 A2 1 0 0 1 7 2.5 Z"));
    }
}
