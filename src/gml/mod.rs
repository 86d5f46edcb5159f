//! Typed GML 3.2 geometry tree consumed by the tessellator.
//!
//! Values here are produced by an XML binding layer outside this crate. Every
//! closed set of GML kinds is an enum, with an `Unsupported` variant naming the
//! GML kinds that exist in the schema but are not tessellated.

pub mod curve;
pub mod geometry;
pub mod surface;

pub use curve::{
    AnyCurve, AnyRing, ArcByCenterPoint, ArcString, CompositeCurve, Curve, CurveMember,
    CurveSegment, LineString, LinearRing, Orientation, OrientableCurve, Ring, SegmentKind,
};
pub use geometry::{
    Angle, DirectPosition, Geometry, GeometryClass, GeometryKind, Measure, Point, PosList, Positions,
};
pub use surface::{AnySurface, PatchKind, Polygon, PolygonPatch, Surface, SurfacePatch};
