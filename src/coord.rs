//! Conversion of FAA coordinate notations into decimal degrees.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("empty coordinate")]
    Empty,
    #[error("invalid coordinate: {0:?}")]
    Invalid(String),
}

/// Parses a NASR coordinate like `35-20-04.532N` or a plain decimal like
/// `-77.5`.
///
/// A `S` or `W` hemisphere or a leading minus sign make the result negative.
/// The result is rounded to 6 decimal places.
pub fn parse_faa_coordinate(s: &str) -> Result<f64, CoordinateError> {
    let s = s.trim().to_uppercase();
    if s.is_empty() {
        return Err(CoordinateError::Empty);
    }
    let invalid = || CoordinateError::Invalid(s.clone());

    let (negative, body) = split_sign(&s);
    let parts: Vec<&str> = body.split('-').collect();

    let degrees = match parts.as_slice() {
        [d, m, sec] => dms_to_decimal(d, m, sec).ok_or_else(invalid)?,
        [value] => value.parse::<f64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    let value = if negative { -degrees } else { degrees };
    Ok(round6(value))
}

/// Parses a Digital Obstacle File coordinate like `35 20 04.53N`.
pub fn parse_dms(s: &str) -> Result<f64, CoordinateError> {
    let s = s.trim().to_uppercase();
    let invalid = || CoordinateError::Invalid(s.clone());

    let Some(hemisphere) = s.chars().last() else {
        return Err(CoordinateError::Empty);
    };
    let body = &s[..s.len() - hemisphere.len_utf8()];

    let parts: Vec<&str> = body.split_whitespace().collect();
    let [d, m, sec] = parts.as_slice() else {
        return Err(invalid());
    };
    let degrees = dms_to_decimal(d, m, sec).ok_or_else(invalid)?;

    match hemisphere {
        'N' | 'E' => Ok(degrees),
        'S' | 'W' => Ok(-degrees),
        _ => Err(invalid()),
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    let mut negative = false;
    let mut body = s;

    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest;
    }
    if let Some(rest) = body.strip_suffix(['S', 'W']) {
        negative = true;
        body = rest;
    } else if let Some(rest) = body.strip_suffix(['N', 'E']) {
        body = rest;
    }

    (negative, body.trim())
}

fn dms_to_decimal(d: &str, m: &str, s: &str) -> Option<f64> {
    let d: f64 = d.trim().parse().ok()?;
    let m: f64 = m.trim().parse().ok()?;
    let s: f64 = s.trim().parse().ok()?;
    Some(d + m / 60.0 + s / 3600.0)
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    #[test]
    fn nasr_latitude() {
        assert_eq!(parse_faa_coordinate("35-20-04.532N").unwrap(), 35.334592);
    }

    #[test]
    fn nasr_longitude_west() {
        assert_eq!(parse_faa_coordinate("077-52-52.200W").unwrap(), -77.881167);
    }

    #[test]
    fn plain_decimal() {
        assert_eq!(parse_faa_coordinate(" 40.5 ").unwrap(), 40.5);
        assert_eq!(parse_faa_coordinate("-73.1234567").unwrap(), -73.123457);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_faa_coordinate("   "), Err(CoordinateError::Empty));
        assert_eq!(parse_dms(""), Err(CoordinateError::Empty));
    }

    #[test]
    fn garbage_input() {
        assert_debug_snapshot!(parse_faa_coordinate("35-20N-x").unwrap_err(), @r###"
        Invalid(
            "35-20N-X",
        )
        "###);
    }

    #[test]
    fn dof_coordinates() {
        let lat = parse_dms("35 20 04.53N").unwrap();
        let lon = parse_dms("077 52 52.20W").unwrap();
        assert!((lat - 35.334_592).abs() < 1e-6);
        assert!((lon + 77.881_167).abs() < 1e-6);
    }

    #[test]
    fn dof_requires_three_parts() {
        assert!(matches!(parse_dms("35 20N"), Err(CoordinateError::Invalid(_))));
        assert!(matches!(parse_dms("35 20 04.53X"), Err(CoordinateError::Invalid(_))));
    }
}
