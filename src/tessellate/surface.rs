//! Boundaries of polygons and multi-patch surfaces.
//!
//! A surface's exterior is the planar union of its patches' exterior rings:
//! ```text
//! exterior(S) = ∂( P₁ ∪ P₂ ∪ … ∪ Pₙ )
//! ```
//! so an edge shared by two adjacent patches disappears from the result. The
//! union itself is delegated to the injected
//! [`PolygonUnion`](crate::traits::PolygonUnion).

use crate::crs::Crs;
use crate::errors::{Result, TessellationError};
use crate::float_types::{Coordinate, Real};
use crate::gml::{AnySurface, Surface};
use crate::tessellate::Tessellator;
use crate::tessellate::patch::{exterior_ring, interior_rings};
use geo::{LineString, Polygon, Winding};

impl Tessellator {
    /// Exterior boundary coordinates of a polygon or surface.
    ///
    /// A surface with a single patch returns that patch's ring untouched.
    /// Merged boundaries are wound counter-clockwise, whatever orientation the
    /// union kernel hands back. When the union falls apart into several
    /// polygons, their exteriors are concatenated in the order the kernel
    /// returns them.
    pub fn surface_coordinates(&self, surface: &AnySurface, inherited: Option<&Crs>) -> Result<Vec<Coordinate>> {
        let crs = Crs::inherit(surface.srs(), inherited);
        match surface {
            AnySurface::Polygon(polygon) => self.ring_coordinates(&polygon.exterior, crs),
            AnySurface::Surface(surface) => self.patch_union_coordinates(surface, crs),
        }
    }

    /// Coordinate sequences of every hole, with exact duplicates removed.
    pub fn surface_interior_coordinates(
        &self,
        surface: &AnySurface,
        inherited: Option<&Crs>,
    ) -> Result<Vec<Vec<Coordinate>>> {
        let crs = Crs::inherit(surface.srs(), inherited);
        let mut holes: Vec<Vec<Coordinate>> = Vec::new();
        match surface {
            AnySurface::Polygon(polygon) => {
                for ring in &polygon.interiors {
                    push_unique(&mut holes, self.ring_coordinates(ring, crs)?);
                }
            },
            AnySurface::Surface(surface) => {
                for patch in &surface.patches {
                    for ring in interior_rings(patch)? {
                        push_unique(&mut holes, self.ring_coordinates(ring, crs)?);
                    }
                }
            },
        }
        Ok(holes)
    }

    fn patch_union_coordinates(&self, surface: &Surface, crs: Option<&Crs>) -> Result<Vec<Coordinate>> {
        let mut rings = Vec::with_capacity(surface.patches.len());
        for patch in &surface.patches {
            tracing::trace!(kind = patch.kind_name(), "tessellating patch");
            rings.push(self.ring_coordinates(exterior_ring(patch)?, crs)?);
        }

        match rings.len() {
            0 => Err(TessellationError::EmptyGeometry("Surface")),
            1 => Ok(rings.remove(0)),
            count => {
                let polygons: Vec<Polygon<Real>> = rings
                    .into_iter()
                    .map(|ring| Polygon::new(LineString::new(ring), Vec::new()))
                    .collect();
                let merged = self.union().union_all(&polygons);
                tracing::debug!(patches = count, polygons = merged.0.len(), "merged surface patches");
                let mut coordinates = Vec::new();
                for polygon in merged.0 {
                    let (mut exterior, _) = polygon.into_inner();
                    exterior.make_ccw_winding();
                    coordinates.extend(exterior.0);
                }
                Ok(coordinates)
            },
        }
    }
}

fn push_unique(holes: &mut Vec<Vec<Coordinate>>, ring: Vec<Coordinate>) {
    if !holes.contains(&ring) {
        holes.push(ring);
    }
}
