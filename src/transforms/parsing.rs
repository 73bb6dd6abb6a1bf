//! Numeric coercion for transform arguments
//!
//! Every composition primitive funnels its arguments through one of these
//! helpers. Two defaulting policies exist and must not be mixed:
//! - [`parse_offset`]: additive identity, unparsable or missing input is `0`
//! - [`parse_factor`]: multiplicative identity, unparsable or missing input is `1`
//!
//! The `try_*` variants return `None` instead of a default and back the
//! strict parsing path.

use std::f64::consts::PI;

use super::types::Arg;

/// Strip an ASCII suffix, ignoring case.
fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Parse a plain number, rejecting non-finite values.
fn parse_finite(s: &str) -> Option<f64> {
    let s = s.trim();
    // f64::from_str accepts "inf"/"NaN" spellings; CSS does not
    if s.is_empty() || s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn finite(n: f64) -> Option<f64> {
    n.is_finite().then_some(n)
}

/// Parse a length (optional `px` suffix) to a number.
pub fn try_parse_offset(s: &str) -> Option<f64> {
    let s = s.trim();
    parse_finite(strip_suffix_ci(s, "px").unwrap_or(s))
}

/// Parse a unitless multiplier.
pub fn try_parse_factor(s: &str) -> Option<f64> {
    parse_finite(s)
}

/// Parse an angle to radians.
///
/// A `rad` suffix is taken as-is; `deg`, `°` or no suffix means degrees.
pub fn try_parse_angle(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Some(rad) = strip_suffix_ci(s, "rad") {
        return parse_finite(rad);
    }
    let deg = strip_suffix_ci(s, "deg").or_else(|| s.strip_suffix('°')).unwrap_or(s);
    parse_finite(deg).map(degrees_to_radians)
}

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Coerce a translation-like argument. Defaults to `0`.
pub fn parse_offset(arg: &Arg) -> f64 {
    match arg {
        Arg::Number(n) => finite(*n),
        Arg::Text(s) => try_parse_offset(s),
        Arg::Missing => None,
    }
    .unwrap_or(0.0)
}

/// Coerce a scale-like argument. Defaults to `1`.
pub fn parse_factor(arg: &Arg) -> f64 {
    match arg {
        Arg::Number(n) => finite(*n),
        Arg::Text(s) => try_parse_factor(s),
        Arg::Missing => None,
    }
    .unwrap_or(1.0)
}

/// Coerce an angle argument to radians. Bare numbers are degrees; defaults to `0`.
pub fn parse_angle(arg: &Arg) -> f64 {
    match arg {
        Arg::Number(n) => finite(*n).map(degrees_to_radians),
        Arg::Text(s) => try_parse_angle(s),
        Arg::Missing => None,
    }
    .unwrap_or(0.0)
}

/// Coerce a raw matrix entry, falling back to `default` (the identity entry).
pub fn parse_matrix_entry(arg: &Arg, default: f64) -> f64 {
    match arg {
        Arg::Number(n) => finite(*n),
        Arg::Text(s) => try_parse_factor(s),
        Arg::Missing => None,
    }
    .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_parse_offset_plain() {
        assert_eq!(parse_offset(&Arg::from("15")), 15.0);
        assert_eq!(parse_offset(&Arg::from(-4.5)), -4.5);
    }

    #[test]
    fn test_parse_offset_strips_px() {
        assert_eq!(parse_offset(&Arg::from("15px")), 15.0);
        assert_eq!(parse_offset(&Arg::from(" 400PX ")), 400.0);
        assert_eq!(parse_offset(&Arg::from("-2.5px")), -2.5);
    }

    #[test]
    fn test_parse_offset_defaults_to_zero() {
        assert_eq!(parse_offset(&Arg::from("abc")), 0.0);
        assert_eq!(parse_offset(&Arg::from("")), 0.0);
        assert_eq!(parse_offset(&Arg::Missing), 0.0);
        assert_eq!(parse_offset(&Arg::from("10em")), 0.0);
        assert_eq!(parse_offset(&Arg::from(f64::NAN)), 0.0);
    }

    #[test]
    fn test_parse_factor_defaults_to_one() {
        assert_eq!(parse_factor(&Arg::from("abc")), 1.0);
        assert_eq!(parse_factor(&Arg::Missing), 1.0);
        assert_eq!(parse_factor(&Arg::from("inf")), 1.0);
        assert_eq!(parse_factor(&Arg::from(f64::INFINITY)), 1.0);
        assert_eq!(parse_factor(&Arg::from("0.3")), 0.3);
    }

    #[test]
    fn test_parse_factor_keeps_zero() {
        assert_eq!(parse_factor(&Arg::from("0")), 0.0);
    }

    #[test]
    fn test_parse_factor_accepts_exponent() {
        assert_eq!(parse_factor(&Arg::from("1e2")), 100.0);
        assert_eq!(parse_factor(&Arg::from("-2.5E-1")), -0.25);
    }

    #[test]
    fn test_parse_angle_units() {
        assert!((parse_angle(&Arg::from(180)) - PI).abs() < EPS);
        assert!((parse_angle(&Arg::from("180")) - PI).abs() < EPS);
        assert!((parse_angle(&Arg::from("90deg")) - PI / 2.0).abs() < EPS);
        assert!((parse_angle(&Arg::from("1.5rad")) - 1.5).abs() < EPS);
        assert!((parse_angle(&Arg::from("45°")) - PI / 4.0).abs() < EPS);
        assert!((parse_angle(&Arg::from("90DEG")) - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_parse_angle_defaults_to_zero() {
        assert_eq!(parse_angle(&Arg::from("sideways")), 0.0);
        assert_eq!(parse_angle(&Arg::from("deg")), 0.0);
        assert_eq!(parse_angle(&Arg::Missing), 0.0);
    }

    #[test]
    fn test_parse_matrix_entry_default() {
        assert_eq!(parse_matrix_entry(&Arg::from("x"), 1.0), 1.0);
        assert_eq!(parse_matrix_entry(&Arg::Missing, 0.0), 0.0);
        assert_eq!(parse_matrix_entry(&Arg::from("2"), 0.0), 2.0);
    }

    #[test]
    fn test_try_parse_rejects_garbage() {
        assert_eq!(try_parse_offset("12pt"), None);
        assert_eq!(try_parse_factor("NaN"), None);
        assert_eq!(try_parse_angle("1turn"), None);
        assert_eq!(try_parse_offset("px"), None);
    }

    #[test]
    fn test_strip_suffix_ci_multibyte() {
        assert_eq!(strip_suffix_ci("é", "px"), None);
        assert_eq!(strip_suffix_ci("3Px", "px"), Some("3"));
    }
}
