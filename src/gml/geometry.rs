use crate::crs::Crs;
use crate::float_types::Real;
use crate::gml::curve::AnyCurve;
use crate::gml::surface::AnySurface;
use std::fmt;

/// A single `gml:pos`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectPosition {
    pub ordinates: Vec<Real>,
}

impl DirectPosition {
    pub fn new(ordinates: Vec<Real>) -> Self {
        Self { ordinates }
    }

    pub fn xy(x: Real, y: Real) -> Self {
        Self::new(vec![x, y])
    }
}

/// A `gml:posList`, optionally carrying its own `srsDimension`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosList {
    pub values: Vec<Real>,
    pub srs_dimension: Option<usize>,
}

impl PosList {
    pub fn new(values: Vec<Real>) -> Self {
        Self {
            values,
            srs_dimension: None,
        }
    }

    pub fn with_dimension(values: Vec<Real>, dimension: usize) -> Self {
        Self {
            values,
            srs_dimension: Some(dimension),
        }
    }
}

/// The positions of a segment or ring: a flat list or individual positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Positions {
    List(PosList),
    Direct(Vec<DirectPosition>),
}

impl Positions {
    /// Shorthand for 2D direct positions.
    pub fn from_xy(points: &[(Real, Real)]) -> Self {
        Positions::Direct(points.iter().map(|&(x, y)| DirectPosition::xy(x, y)).collect())
    }
}

/// A length with a unit of measure (`gml:radius`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    pub value: Real,
    pub uom: String,
}

impl Measure {
    pub fn new(value: Real, uom: impl Into<String>) -> Self {
        Self {
            value,
            uom: uom.into(),
        }
    }
}

/// An angle with an optional unit of measure; degrees when absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    pub value: Real,
    pub uom: Option<String>,
}

impl Angle {
    pub const fn degrees(value: Real) -> Self {
        Self { value, uom: None }
    }
}

/// `gml:Point`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub srs: Option<Crs>,
    pub pos: DirectPosition,
}

/// GML geometry kinds outside the point/curve/surface families handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryKind {
    MultiPoint,
    MultiCurve,
    MultiSurface,
    MultiGeometry,
    CompositeSurface,
    OrientableSurface,
    Shell,
    Solid,
    CompositeSolid,
    MultiSolid,
}

impl GeometryKind {
    pub const fn name(self) -> &'static str {
        match self {
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiCurve => "MultiCurve",
            GeometryKind::MultiSurface => "MultiSurface",
            GeometryKind::MultiGeometry => "MultiGeometry",
            GeometryKind::CompositeSurface => "CompositeSurface",
            GeometryKind::OrientableSurface => "OrientableSurface",
            GeometryKind::Shell => "Shell",
            GeometryKind::Solid => "Solid",
            GeometryKind::CompositeSolid => "CompositeSolid",
            GeometryKind::MultiSolid => "MultiSolid",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any GML geometry handed to the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    Curve(AnyCurve),
    Surface(AnySurface),
    Unsupported(GeometryKind),
}

/// Coarse family of a geometry, used for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryClass {
    Point,
    Curve,
    Surface,
    Unsupported,
}

impl Geometry {
    pub const fn class(&self) -> GeometryClass {
        match self {
            Geometry::Point(_) => GeometryClass::Point,
            Geometry::Curve(_) => GeometryClass::Curve,
            Geometry::Surface(_) => GeometryClass::Surface,
            Geometry::Unsupported(_) => GeometryClass::Unsupported,
        }
    }

    /// The GML element name of the concrete kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Curve(curve) => curve.kind_name(),
            Geometry::Surface(surface) => surface.kind_name(),
            Geometry::Unsupported(kind) => kind.name(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<AnyCurve> for Geometry {
    fn from(curve: AnyCurve) -> Self {
        Geometry::Curve(curve)
    }
}

impl From<AnySurface> for Geometry {
    fn from(surface: AnySurface) -> Self {
        Geometry::Surface(surface)
    }
}
