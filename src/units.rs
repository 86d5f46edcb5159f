//! Units of measure for arc radii and angles.
//!
//! GML carries units as a `uom` attribute that may be a bare symbol (`km`),
//! a URL with a fragment (`http://…/uom.xml#NM`) or an OGC URN
//! (`urn:ogc:def:uom:EPSG::9001`). Only the small tables below are recognized.

use crate::errors::{Result, TessellationError};
use crate::float_types::{
    DEGREE, GRADIAN, KILOMETER, METER, NAUTICAL_MILE, RADIAN, Real, STATUTE_MILE,
};

/// Extracts the unit symbol from a `uom` string.
///
/// The fragment wins when present; otherwise the last `:` or `/` separated
/// token of a URN/URL; otherwise the trimmed input.
pub fn unit_symbol(uom: &str) -> &str {
    let uom = uom.trim();
    if let Some((_, fragment)) = uom.rsplit_once('#') {
        return fragment;
    }
    if uom.starts_with("urn:") || uom.contains("://") {
        return uom.rsplit(['/', ':']).next().unwrap_or(uom);
    }
    uom
}

/// Converts a length measurement to meters.
///
/// ```
/// # use gmltess::units::length_in_meters;
/// assert_eq!(length_in_meters(2.0, "km").unwrap(), 2000.0);
/// assert_eq!(length_in_meters(1.0, "http://example.org/uom#NM").unwrap(), 1852.0);
/// ```
pub fn length_in_meters(value: Real, uom: &str) -> Result<Real> {
    let factor = match unit_symbol(uom) {
        // EPSG 9001 is the metre
        "m" | "9001" => METER,
        "km" | "9036" => KILOMETER,
        "M" | "NM" | "[nmi_i]" | "9030" => NAUTICAL_MILE,
        "mi" => STATUTE_MILE,
        _ => return Err(TessellationError::UnrecognizedLengthUnit(uom.to_string())),
    };
    Ok(value * factor)
}

/// Converts an angle measurement to degrees. An absent unit means degrees.
pub fn angle_in_degrees(value: Real, uom: Option<&str>) -> Result<Real> {
    let Some(uom) = uom else {
        return Ok(value);
    };
    let factor = match unit_symbol(uom) {
        "deg" | "degree" | "degrees" | "°" | "9102" => DEGREE,
        "rad" | "radian" | "radians" | "9101" => RADIAN,
        "grad" | "gon" | "9105" => GRADIAN,
        _ => return Err(TessellationError::UnrecognizedAngleUnit(uom.to_string())),
    };
    Ok(value * factor)
}
