//! Test support library
//! Builders for small GML trees and float comparison helpers.
#![allow(dead_code)]

use gmltess::{
    Coordinate,
    crs::Crs,
    float_types::Real,
    gml::{
        AnyCurve, AnyRing, ArcByCenterPoint, Curve, CurveSegment, DirectPosition, LineString,
        LinearRing, Measure, PolygonPatch, Positions, SurfacePatch,
    },
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Both ordinates within `eps`.
pub fn coord_approx_eq(a: Coordinate, b: Coordinate, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

pub fn xy(points: &[(Real, Real)]) -> Vec<Coordinate> {
    points.iter().map(|&(x, y)| Coordinate { x, y }).collect()
}

pub fn line_string(points: &[(Real, Real)]) -> AnyCurve {
    AnyCurve::LineString(LineString {
        srs: None,
        positions: Positions::from_xy(points),
    })
}

pub fn linear_ring(points: &[(Real, Real)]) -> AnyRing {
    AnyRing::LinearRing(LinearRing {
        srs: None,
        positions: Positions::from_xy(points),
    })
}

/// Closed axis-aligned square ring with its lower-left corner at `(x, y)`.
pub fn square_ring(x: Real, y: Real, side: Real) -> AnyRing {
    linear_ring(&[
        (x, y),
        (x + side, y),
        (x + side, y + side),
        (x, y + side),
        (x, y),
    ])
}

pub fn square_patch(x: Real, y: Real) -> SurfacePatch {
    SurfacePatch::PolygonPatch(PolygonPatch {
        exterior: square_ring(x, y, 1.0),
        interiors: Vec::new(),
    })
}

pub fn circle_by_center(center: (Real, Real), radius: Real, uom: &str) -> CurveSegment {
    CurveSegment::CircleByCenterPoint(ArcByCenterPoint {
        center: DirectPosition::xy(center.0, center.1),
        radius: Measure::new(radius, uom),
        start_angle: None,
        end_angle: None,
    })
}

pub fn curve(srs: Option<Crs>, segments: Vec<CurveSegment>) -> AnyCurve {
    AnyCurve::Curve(Curve { srs, segments })
}
