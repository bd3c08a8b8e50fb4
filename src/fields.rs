//! Field level decoding rules shared by both deck schemas.
use crate::ParsingError;

// Values (after trimming) standing for "not reported".
const MISSING_VALUES: [&str; 3] = ["", "-99", "-999"];

/// Splits a raw record line into whitespace trimmed comma fields.
pub(crate) fn split(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Returns the field at `index`, or a [ParsingError] if the line is too
/// short to carry it.
pub(crate) fn required<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, ParsingError> {
    fields
        .get(index)
        .copied()
        .ok_or(ParsingError::MissingField(index))
}

/// Decodes an optional positive definite numeric field.
/// An absent field, a blank field, the -99/-999 sentinels and literal
/// zero all stand for "not reported"; anything else must parse as an
/// integer or the record is malformed.
pub(crate) fn parse_optional(fields: &[&str], index: usize) -> Result<Option<f64>, ParsingError> {
    let value = match fields.get(index) {
        Some(value) => *value,
        None => return Ok(None),
    };
    if MISSING_VALUES.contains(&value) || value == "0" {
        return Ok(None);
    }
    let parsed = value
        .parse::<i64>()
        .map_err(|_| ParsingError::NumericField(value.to_string()))?;
    Ok(Some(parsed as f64))
}

/// Decodes a "<tenths of degree><N|S>" coordinate into signed
/// degrees north.
pub(crate) fn parse_latitude(content: &str) -> Result<f64, ParsingError> {
    let (magnitude, hemisphere) =
        split_coordinate(content).ok_or_else(|| ParsingError::Latitude(content.to_string()))?;
    match hemisphere {
        'N' => Ok(magnitude / 10.0),
        'S' => Ok(-magnitude / 10.0),
        _ => Err(ParsingError::Latitude(content.to_string())),
    }
}

/// Decodes a "<tenths of degree><E|W>" coordinate into signed degrees
/// in [-180, 180], west negative.
pub(crate) fn parse_longitude(content: &str) -> Result<f64, ParsingError> {
    let (magnitude, hemisphere) =
        split_coordinate(content).ok_or_else(|| ParsingError::Longitude(content.to_string()))?;
    match hemisphere {
        'E' => Ok(magnitude / 10.0),
        'W' => Ok(-magnitude / 10.0),
        _ => Err(ParsingError::Longitude(content.to_string())),
    }
}

/// Decodes the required maximum sustained wind field (kt).
pub(crate) fn parse_wind_speed(content: &str) -> Result<f64, ParsingError> {
    content
        .parse::<i64>()
        .map(|knots| knots as f64)
        .map_err(|_| ParsingError::WindSpeed(content.to_string()))
}

fn split_coordinate(content: &str) -> Option<(f64, char)> {
    let hemisphere = content.chars().next_back()?;
    let magnitude = content[..content.len() - hemisphere.len_utf8()]
        .parse::<f64>()
        .ok()?;
    Some((magnitude, hemisphere))
}
