//! Tessellation of GML geometries into 2D coordinate sequences.
//!
//! [`Tessellator`] classifies a [`Geometry`] and routes it:
//! - **Point**: its position, read directly
//! - **Curve-like**: segments concatenated in order, center-point
//!   arcs sampled by [`arc`]
//! - **Surface-like**: the union of patch boundaries, rings
//!   tessellated as curves
//!
//! The geodesic solver, the polygon kernel and remote dereferencing are
//! injected capabilities (see [`crate::traits`]).

pub mod arc;
pub mod patch;
pub mod positions;

mod curve;
mod segment;
mod surface;

use crate::errors::{Result, TessellationError};
use crate::float_types::Coordinate;
use crate::geodesy::CrsGeodesy;
use crate::gml::{Geometry, Point};
use crate::resolver::NoRemoteResolver;
use crate::traits::{Geodesy, PolygonUnion, RemoteResolver};
use crate::union::GeoUnion;
use std::fmt;

/// Tessellation engine holding its external capabilities.
///
/// Holds no mutable state, so one instance can serve many threads.
pub struct Tessellator {
    geodesy: Box<dyn Geodesy>,
    union: Box<dyn PolygonUnion>,
    resolver: Box<dyn RemoteResolver>,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self {
            geodesy: Box::new(CrsGeodesy),
            union: Box::new(GeoUnion),
            resolver: Box::new(NoRemoteResolver),
        }
    }
}

impl fmt::Debug for Tessellator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tessellator").finish_non_exhaustive()
    }
}

impl Tessellator {
    /// WGS84/planar geodesy, `geo` boolean union, remote references disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geodesy(mut self, geodesy: impl Geodesy + 'static) -> Self {
        self.geodesy = Box::new(geodesy);
        self
    }

    pub fn with_union(mut self, union: impl PolygonUnion + 'static) -> Self {
        self.union = Box::new(union);
        self
    }

    pub fn with_resolver(mut self, resolver: impl RemoteResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub(crate) fn geodesy(&self) -> &dyn Geodesy {
        self.geodesy.as_ref()
    }

    pub(crate) fn union(&self) -> &dyn PolygonUnion {
        self.union.as_ref()
    }

    pub(crate) fn resolver(&self) -> &dyn RemoteResolver {
        self.resolver.as_ref()
    }

    /// Ordered 2D coordinates approximating `geometry`.
    ///
    /// For surfaces this is the exterior boundary only; see
    /// [`interior_coordinate_sets`](Self::interior_coordinate_sets) for holes.
    ///
    /// # Example
    /// ```
    /// # use gmltess::gml::{AnyCurve, Geometry, LineString, Positions};
    /// # use gmltess::tessellate::Tessellator;
    /// let line = Geometry::Curve(AnyCurve::LineString(LineString {
    ///     srs: None,
    ///     positions: Positions::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
    /// }));
    /// let coords = Tessellator::new().extract_coordinates(&line).unwrap();
    /// assert_eq!(coords.len(), 3);
    /// ```
    pub fn extract_coordinates(&self, geometry: &Geometry) -> Result<Vec<Coordinate>> {
        let class = geometry.class();
        tracing::debug!(?class, kind = geometry.kind_name(), "extracting coordinates");
        match geometry {
            Geometry::Point(point) => Ok(vec![point_coordinate(point)?]),
            Geometry::Curve(curve) => self.curve_coordinates(curve, None),
            Geometry::Surface(surface) => self.surface_coordinates(surface, None),
            Geometry::Unsupported(kind) => Err(TessellationError::UnsupportedGeometryKind(kind.name().to_string())),
        }
    }

    /// Coordinate sequences of every interior ring of a surface-like geometry.
    pub fn interior_coordinate_sets(&self, geometry: &Geometry) -> Result<Vec<Vec<Coordinate>>> {
        match geometry {
            Geometry::Surface(surface) => self.surface_interior_coordinates(surface, None),
            other => Err(TessellationError::UnsupportedGeometryKind(other.kind_name().to_string())),
        }
    }
}

/// The point's own position.
pub fn point_coordinate(point: &Point) -> Result<Coordinate> {
    positions::direct_position(&point.pos)
}
