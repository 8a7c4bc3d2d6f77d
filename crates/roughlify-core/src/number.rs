//! Number parsing/formatting helpers with JavaScript semantics.

use std::fmt::Write as _;

/// Formats like JS `Number.prototype.toString()` (`10` not `10.0`, `-0` printed as `0`).
pub fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

pub fn fmt_js(v: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    js_number_to_string(v, &mut buf).to_string()
}

pub fn push_js(out: &mut String, v: f64, buf: &mut ryu_js::Buffer) {
    let _ = write!(out, "{}", js_number_to_string(v, buf));
}

/// Parses a finite number from an attribute value, tolerating surrounding whitespace and a
/// leading `+`. Returns `None` for empty strings, units (`10px`) and non-finite results.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a comma/whitespace separated number list (`"5,5"`, `"4 2 1"`).
pub fn parse_number_list(raw: &str) -> Option<Vec<f64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(parse_number)
        .collect()
}
