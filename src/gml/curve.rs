//! Curves, curve segments and rings.

use crate::crs::Crs;
use crate::gml::geometry::{Angle, DirectPosition, Measure, Positions};
use std::fmt;

/// `gml:ArcByCenterPoint` / `gml:CircleByCenterPoint`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcByCenterPoint {
    pub center: DirectPosition,
    pub radius: Measure,
    pub start_angle: Option<Angle>,
    pub end_angle: Option<Angle>,
}

/// `gml:ArcString`, `gml:Arc` and `gml:Circle` share this shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcString {
    pub positions: Positions,
}

/// GML 3.2 curve segment kinds that are not discretized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    ArcByBulge,
    ArcStringByBulge,
    Bezier,
    BSpline,
    Clothoid,
    CubicSpline,
    OffsetCurve,
}

impl SegmentKind {
    pub const fn name(self) -> &'static str {
        match self {
            SegmentKind::ArcByBulge => "ArcByBulge",
            SegmentKind::ArcStringByBulge => "ArcStringByBulge",
            SegmentKind::Bezier => "Bezier",
            SegmentKind::BSpline => "BSpline",
            SegmentKind::Clothoid => "Clothoid",
            SegmentKind::CubicSpline => "CubicSpline",
            SegmentKind::OffsetCurve => "OffsetCurve",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of `gml:segments`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveSegment {
    LineStringSegment(Positions),
    GeodesicString(Positions),
    ArcByCenterPoint(ArcByCenterPoint),
    CircleByCenterPoint(ArcByCenterPoint),
    ArcString(ArcString),
    Arc(ArcString),
    Circle(ArcString),
    Unsupported(SegmentKind),
}

impl CurveSegment {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            CurveSegment::LineStringSegment(_) => "LineStringSegment",
            CurveSegment::GeodesicString(_) => "GeodesicString",
            CurveSegment::ArcByCenterPoint(_) => "ArcByCenterPoint",
            CurveSegment::CircleByCenterPoint(_) => "CircleByCenterPoint",
            CurveSegment::ArcString(_) => "ArcString",
            CurveSegment::Arc(_) => "Arc",
            CurveSegment::Circle(_) => "Circle",
            CurveSegment::Unsupported(kind) => kind.name(),
        }
    }
}

/// `gml:Curve`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    pub srs: Option<Crs>,
    pub segments: Vec<CurveSegment>,
}

/// `gml:LineString`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString {
    pub srs: Option<Crs>,
    pub positions: Positions,
}

/// `gml:CompositeCurve`; members are inline only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeCurve {
    pub srs: Option<Crs>,
    pub members: Vec<AnyCurve>,
}

/// Traversal direction of an orientable curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Positive,
    Negative,
}

impl Orientation {
    /// Parses the GML `orientation` attribute; anything but `-` is positive.
    pub fn from_sign(sign: &str) -> Self {
        if sign.trim() == "-" {
            Orientation::Negative
        } else {
            Orientation::Positive
        }
    }
}

/// `gml:OrientableCurve`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientableCurve {
    pub srs: Option<Crs>,
    pub orientation: Orientation,
    pub base_curve: Box<AnyCurve>,
}

/// `gml:LinearRing`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRing {
    pub srs: Option<Crs>,
    pub positions: Positions,
}

/// A `gml:curveMember` property: inline value or `xlink:href`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveMember {
    Inline(AnyCurve),
    Remote { href: String },
}

/// `gml:Ring`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    pub srs: Option<Crs>,
    pub members: Vec<CurveMember>,
}

/// Any curve-like geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyCurve {
    Curve(Curve),
    LineString(LineString),
    CompositeCurve(CompositeCurve),
    OrientableCurve(OrientableCurve),
    LinearRing(LinearRing),
    Ring(Ring),
}

impl AnyCurve {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            AnyCurve::Curve(_) => "Curve",
            AnyCurve::LineString(_) => "LineString",
            AnyCurve::CompositeCurve(_) => "CompositeCurve",
            AnyCurve::OrientableCurve(_) => "OrientableCurve",
            AnyCurve::LinearRing(_) => "LinearRing",
            AnyCurve::Ring(_) => "Ring",
        }
    }

    /// The CRS declared on this curve itself, if any.
    pub const fn srs(&self) -> Option<&Crs> {
        match self {
            AnyCurve::Curve(c) => c.srs.as_ref(),
            AnyCurve::LineString(c) => c.srs.as_ref(),
            AnyCurve::CompositeCurve(c) => c.srs.as_ref(),
            AnyCurve::OrientableCurve(c) => c.srs.as_ref(),
            AnyCurve::LinearRing(c) => c.srs.as_ref(),
            AnyCurve::Ring(c) => c.srs.as_ref(),
        }
    }
}

/// The boundary of a polygon or patch: `gml:exterior` / `gml:interior`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyRing {
    LinearRing(LinearRing),
    Ring(Ring),
}

impl AnyRing {
    pub const fn srs(&self) -> Option<&Crs> {
        match self {
            AnyRing::LinearRing(r) => r.srs.as_ref(),
            AnyRing::Ring(r) => r.srs.as_ref(),
        }
    }
}

impl From<LinearRing> for AnyRing {
    fn from(ring: LinearRing) -> Self {
        AnyRing::LinearRing(ring)
    }
}

impl From<Ring> for AnyRing {
    fn from(ring: Ring) -> Self {
        AnyRing::Ring(ring)
    }
}
