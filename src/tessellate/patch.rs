//! Boundary rings of surface patches.

use crate::errors::{Result, TessellationError};
use crate::gml::{AnyRing, SurfacePatch};

/// The patch's exterior boundary.
pub fn exterior_ring(patch: &SurfacePatch) -> Result<&AnyRing> {
    match patch {
        SurfacePatch::PolygonPatch(polygon) => Ok(&polygon.exterior),
        SurfacePatch::Rectangle { exterior } | SurfacePatch::Triangle { exterior } => Ok(exterior),
        SurfacePatch::Unsupported(kind) => Err(unsupported(kind.name())),
    }
}

/// The patch's holes; always empty for rectangles and triangles.
pub fn interior_rings(patch: &SurfacePatch) -> Result<&[AnyRing]> {
    match patch {
        SurfacePatch::PolygonPatch(polygon) => Ok(&polygon.interiors),
        SurfacePatch::Rectangle { .. } | SurfacePatch::Triangle { .. } => Ok(&[]),
        SurfacePatch::Unsupported(kind) => Err(unsupported(kind.name())),
    }
}

fn unsupported(kind: &str) -> TessellationError {
    TessellationError::UnsupportedSurfacePatchKind(kind.to_string())
}
