//! Parsing of sexagesimal sky coordinates
//!
//! Star catalogs publish positions as strings such as `02h 31m 49.09s` and
//! `+89° 15′ 50.8″`. These helpers convert them to decimal degrees. A bare
//! decimal number is accepted as degrees for both axes.

use crate::core::error::DomainError;
use regex::Regex;
use std::sync::LazyLock;

static RIGHT_ASCENSION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*h\s*(?:(\d+(?:\.\d+)?)\s*m)?\s*(?:(\d+(?:\.\d+)?)\s*s)?$")
        .ok()
});

static DECLINATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"^([+\-−]?)\s*(\d+(?:\.\d+)?)\s*[°d]\s*(?:(\d+(?:\.\d+)?)\s*['′m])?\s*(?:(\d+(?:\.\d+)?)\s*(?:["″s]|′′|''))?$"#,
    )
    .ok()
});

/// Parse a right ascension (`HHh MMm SS.SSs`) into degrees
pub fn parse_right_ascension(text: &str) -> Result<f64, DomainError> {
    let text = text.trim();
    if let Ok(degrees) = text.parse::<f64>()
        && degrees.is_finite()
    {
        return Ok(degrees);
    }

    let caps = RIGHT_ASCENSION
        .as_ref()
        .and_then(|re| re.captures(text))
        .ok_or_else(|| DomainError::InvalidCoordinate(format!("right ascension '{}'", text)))?;

    let hours = component(caps.get(1));
    let minutes = component(caps.get(2));
    let seconds = component(caps.get(3));
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(DomainError::InvalidCoordinate(format!(
            "right ascension '{}'",
            text
        )));
    }

    Ok((hours + minutes / 60.0 + seconds / 3600.0) * 15.0)
}

/// Parse a declination (`±DD° MM′ SS.S″`) into degrees
pub fn parse_declination(text: &str) -> Result<f64, DomainError> {
    let text = text.trim();
    if let Ok(degrees) = text.parse::<f64>()
        && degrees.is_finite()
    {
        return Ok(degrees);
    }

    let caps = DECLINATION
        .as_ref()
        .and_then(|re| re.captures(text))
        .ok_or_else(|| DomainError::InvalidCoordinate(format!("declination '{}'", text)))?;

    let negative = matches!(caps.get(1).map(|m| m.as_str()), Some("-") | Some("−"));
    let degrees = component(caps.get(2));
    let minutes = component(caps.get(3));
    let seconds = component(caps.get(4));
    if degrees > 90.0 || minutes >= 60.0 || seconds >= 60.0 {
        return Err(DomainError::InvalidCoordinate(format!("declination '{}'", text)));
    }

    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -magnitude } else { magnitude })
}

fn component(m: Option<regex::Match<'_>>) -> f64 {
    m.and_then(|m| m.as_str().parse().ok()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_parse_right_ascension_polaris() {
        let ra = parse_right_ascension("02h 31m 49.09s").unwrap();
        assert!(close(ra, 37.954_541_666), "got {}", ra);
    }

    #[test]
    fn test_parse_right_ascension_hours_only() {
        assert!(close(parse_right_ascension("6h").unwrap(), 90.0));
    }

    #[test]
    fn test_parse_right_ascension_decimal_degrees() {
        assert!(close(parse_right_ascension(" 101.28 ").unwrap(), 101.28));
    }

    #[test]
    fn test_parse_right_ascension_rejects_garbage() {
        assert!(parse_right_ascension("north-ish").is_err());
        assert!(parse_right_ascension("02h 75m 00s").is_err());
    }

    #[test]
    fn test_parse_declination_positive() {
        let dec = parse_declination("+89° 15′ 50.8″").unwrap();
        assert!(close(dec, 89.264_111_111), "got {}", dec);
    }

    #[test]
    fn test_parse_declination_negative_unicode_minus() {
        let dec = parse_declination("−16° 42′ 58.0″").unwrap();
        assert!(close(dec, -16.716_111_111), "got {}", dec);
    }

    #[test]
    fn test_parse_declination_ascii_marks() {
        let dec = parse_declination("-08d 12' 05\"").unwrap();
        assert!(close(dec, -(8.0 + 12.0 / 60.0 + 5.0 / 3600.0)));
    }

    #[test]
    fn test_parse_declination_out_of_range() {
        assert!(parse_declination("+95° 00′ 00″").is_err());
        assert!(parse_declination("").is_err());
    }
}
