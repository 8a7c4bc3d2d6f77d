use crate::number::parse_number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Parses an SVG `points` list: `"0,0 10,10 20,0"`.
///
/// Runs of whitespace separate entries. Each entry is split on commas and only its first two
/// fields are used, so `"0,0,5"` yields `(0, 0)`. Returns `None` when the list is empty or an
/// entry lacks two numeric fields.
pub fn parse_points(raw: &str) -> Option<Vec<Point>> {
    let mut out = Vec::new();
    for entry in raw.split_whitespace() {
        let mut fields = entry.split(',');
        let x = fields.next().and_then(parse_number)?;
        let y = fields.next().and_then(parse_number)?;
        out.push(Point::new(x, y));
    }
    if out.is_empty() { None } else { Some(out) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn parses_comma_pairs() {
        assert_eq!(
            parse_points("0,0 10,10 20,0"),
            Some(pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]))
        );
    }

    #[test]
    fn ignores_extra_fields_and_repeated_whitespace() {
        assert_eq!(parse_points("0,0,5"), Some(pts(&[(0.0, 0.0)])));
        assert_eq!(
            parse_points("  1,2    3,4\n5,6 "),
            Some(pts(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]))
        );
    }

    #[test]
    fn rejects_empty_and_incomplete_lists() {
        assert_eq!(parse_points(""), None);
        assert_eq!(parse_points("   "), None);
        assert_eq!(parse_points("1,2 3"), None);
        assert_eq!(parse_points("1,a"), None);
    }
}
