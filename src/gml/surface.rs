//! Polygons, surfaces and surface patches.

use crate::crs::Crs;
use crate::gml::curve::AnyRing;
use std::fmt;

/// `gml:Polygon`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub srs: Option<Crs>,
    pub exterior: AnyRing,
    pub interiors: Vec<AnyRing>,
}

/// `gml:PolygonPatch`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonPatch {
    pub exterior: AnyRing,
    pub interiors: Vec<AnyRing>,
}

/// GML 3.2 gridded patch kinds, which have no ring boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatchKind {
    Cone,
    Cylinder,
    Sphere,
}

impl PatchKind {
    pub const fn name(self) -> &'static str {
        match self {
            PatchKind::Cone => "Cone",
            PatchKind::Cylinder => "Cylinder",
            PatchKind::Sphere => "Sphere",
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of `gml:patches`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfacePatch {
    PolygonPatch(PolygonPatch),
    Rectangle { exterior: AnyRing },
    Triangle { exterior: AnyRing },
    Unsupported(PatchKind),
}

impl SurfacePatch {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            SurfacePatch::PolygonPatch(_) => "PolygonPatch",
            SurfacePatch::Rectangle { .. } => "Rectangle",
            SurfacePatch::Triangle { .. } => "Triangle",
            SurfacePatch::Unsupported(kind) => kind.name(),
        }
    }
}

/// `gml:Surface` (and the patch-based PolyhedralSurface/TriangulatedSurface).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    pub srs: Option<Crs>,
    pub patches: Vec<SurfacePatch>,
}

/// Any surface-like geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnySurface {
    Polygon(Polygon),
    Surface(Surface),
}

impl AnySurface {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            AnySurface::Polygon(_) => "Polygon",
            AnySurface::Surface(_) => "Surface",
        }
    }

    pub const fn srs(&self) -> Option<&Crs> {
        match self {
            AnySurface::Polygon(p) => p.srs.as_ref(),
            AnySurface::Surface(s) => s.srs.as_ref(),
        }
    }
}
