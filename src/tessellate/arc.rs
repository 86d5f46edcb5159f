//! Discretization of center-point arcs.
//!
//! An arc is sampled at [`ARC_POINTS`] evenly spaced bearings between its
//! start and end angle, each placed `radius` meters from the center by the
//! injected [`Geodesy`]:
//! ```text
//! θᵢ = start + i·(end − start)/(ARC_POINTS − 1),  i ∈ {0, …, ARC_POINTS − 1}
//! pᵢ = destination(center, θᵢ, radius)
//! ```
//! Both endpoints are included, so a full circle starts and ends on the same
//! location (up to the geodesic solver's precision).

use crate::crs::Crs;
use crate::errors::{Result, TessellationError};
use crate::float_types::{Coordinate, FULL_TURN_DEGREES, Real, approx_eq};
use crate::gml::ArcByCenterPoint;
use crate::tessellate::positions::direct_position;
use crate::traits::Geodesy;
use crate::units::{angle_in_degrees, length_in_meters};

/// Number of points produced for every arc, endpoints included.
pub const ARC_POINTS: usize = 5;

/// Samples an arc of `radius_m` meters around `center` from `start_deg` to `end_deg`.
///
/// An `end_deg` of 0° is read as 360°, so a full circle written as 0°..0°
/// sweeps once around instead of collapsing onto its start point.
pub fn points_on_arc(
    geodesy: &dyn Geodesy,
    crs: Option<&Crs>,
    center: Coordinate,
    radius_m: Real,
    start_deg: Real,
    end_deg: Real,
) -> Result<Vec<Coordinate>> {
    let crs = crs.ok_or_else(|| TessellationError::MissingCoordinateReferenceSystem("arc interpolation".into()))?;
    let end_deg = normalize_end_angle(start_deg, end_deg);
    let step = (end_deg - start_deg) / (ARC_POINTS - 1) as Real;

    Ok((0..ARC_POINTS)
        .map(|i| geodesy.destination(crs, center, start_deg + step * i as Real, radius_m))
        .collect())
}

/// Reads a zero end angle as a full turn.
pub fn normalize_end_angle(start_deg: Real, end_deg: Real) -> Real {
    if !approx_eq(end_deg, 0.0) {
        return end_deg;
    }
    if !approx_eq(start_deg, 0.0) {
        tracing::warn!(
            start_deg,
            "arc end angle of 0° reinterpreted as 360°, sweeping {start_deg}°..360°"
        );
    }
    FULL_TURN_DEGREES
}

/// Coordinates of an `ArcByCenterPoint`/`CircleByCenterPoint`.
///
/// Missing angles default to a full circle (0°..360°).
pub fn arc_by_center_point(
    geodesy: &dyn Geodesy,
    arc: &ArcByCenterPoint,
    crs: Option<&Crs>,
) -> Result<Vec<Coordinate>> {
    let crs = crs.ok_or_else(|| TessellationError::MissingCoordinateReferenceSystem("ArcByCenterPoint".into()))?;
    let center = direct_position(&arc.center)?;
    let radius_m = length_in_meters(arc.radius.value, &arc.radius.uom)?;
    let start_deg = match &arc.start_angle {
        Some(angle) => angle_in_degrees(angle.value, angle.uom.as_deref())?,
        None => 0.0,
    };
    let end_deg = match &arc.end_angle {
        Some(angle) => angle_in_degrees(angle.value, angle.uom.as_deref())?,
        None => FULL_TURN_DEGREES,
    };
    points_on_arc(geodesy, Some(crs), center, radius_m, start_deg, end_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::CrsGeodesy;
    use crate::gml::{Angle, DirectPosition, Measure};
    use geo::coord;

    #[test]
    fn always_five_points() {
        let crs = Crs::engineering("local");
        for (start, end) in [(0.0, 90.0), (45.0, 315.0), (0.0, 0.0), (10.0, 20.0)] {
            let points = points_on_arc(&CrsGeodesy, Some(&crs), coord! { x: 0.0, y: 0.0 }, 10.0, start, end).unwrap();
            assert_eq!(points.len(), ARC_POINTS);
        }
    }

    #[test]
    fn zero_end_angle_is_full_turn() {
        assert_eq!(normalize_end_angle(0.0, 0.0), 360.0);
        assert_eq!(normalize_end_angle(10.0, 0.0), 360.0);
        assert_eq!(normalize_end_angle(10.0, 90.0), 90.0);
    }

    #[test]
    fn planar_half_circle() {
        let crs = Crs::engineering("local");
        let points = points_on_arc(&CrsGeodesy, Some(&crs), coord! { x: 0.0, y: 0.0 }, 2.0, 0.0, 180.0).unwrap();
        let expected = [(0.0, 2.0), (2.0_f64.sqrt(), 2.0_f64.sqrt()), (2.0, 0.0), (2.0_f64.sqrt(), -(2.0_f64.sqrt())), (0.0, -2.0)];
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?} != ({x}, {y})");
        }
    }

    #[test]
    fn missing_crs() {
        let err = points_on_arc(&CrsGeodesy, None, coord! { x: 0.0, y: 0.0 }, 1.0, 0.0, 90.0).unwrap_err();
        assert!(matches!(err, TessellationError::MissingCoordinateReferenceSystem(_)));
    }

    #[test]
    fn radius_units_and_radian_angles() {
        let crs = Crs::engineering("local");
        let arc = ArcByCenterPoint {
            center: DirectPosition::xy(0.0, 0.0),
            radius: Measure::new(1.0, "km"),
            start_angle: Some(Angle { value: 0.0, uom: Some("rad".into()) }),
            end_angle: Some(Angle { value: crate::float_types::PI / 2.0, uom: Some("rad".into()) }),
        };
        let points = arc_by_center_point(&CrsGeodesy, &arc, Some(&crs)).unwrap();
        let last = points[ARC_POINTS - 1];
        assert!((last.x - 1000.0).abs() < 1e-6 && last.y.abs() < 1e-6);
    }

    #[test]
    fn furlong_radius_rejected() {
        let crs = Crs::engineering("local");
        let arc = ArcByCenterPoint {
            center: DirectPosition::xy(0.0, 0.0),
            radius: Measure::new(1.0, "furlong"),
            start_angle: None,
            end_angle: None,
        };
        assert!(matches!(
            arc_by_center_point(&CrsGeodesy, &arc, Some(&crs)),
            Err(TessellationError::UnrecognizedLengthUnit(unit)) if unit == "furlong"
        ));
    }
}
