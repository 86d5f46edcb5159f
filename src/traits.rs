//! Capabilities the tessellator consumes but does not implement itself.
//!
//! Each one is injected into [`Tessellator`](crate::tessellate::Tessellator),
//! so tests can substitute fixtures for the geodesic solver, the polygon
//! kernel or remote I/O.

use crate::crs::Crs;
use crate::errors::BoxedError;
use crate::float_types::{Coordinate, Real};
use crate::gml::Geometry;
use geo::{MultiPolygon, Polygon};

/// Direct geodesic problem: where do you end up from `origin` after
/// travelling `distance_m` meters on `bearing_deg` (clockwise from north)?
pub trait Geodesy: Send + Sync {
    /// `origin` and the returned coordinate are in the axis order of `crs`.
    fn destination(&self, crs: &Crs, origin: Coordinate, bearing_deg: Real, distance_m: Real) -> Coordinate;
}

/// Planar polygon union.
pub trait PolygonUnion: Send + Sync {
    /// Merges `polygon` into the running union `accumulated`.
    fn union(&self, accumulated: &MultiPolygon<Real>, polygon: &Polygon<Real>) -> MultiPolygon<Real>;

    /// Folds every polygon into one union.
    fn union_all(&self, polygons: &[Polygon<Real>]) -> MultiPolygon<Real> {
        polygons
            .iter()
            .fold(MultiPolygon::new(Vec::new()), |acc, polygon| self.union(&acc, polygon))
    }
}

/// Fetches and unmarshals the geometry an `xlink:href` points at.
pub trait RemoteResolver: Send + Sync {
    fn resolve(&self, href: &str) -> Result<Geometry, BoxedError>;
}

impl<F> RemoteResolver for F
where
    F: Fn(&str) -> Result<Geometry, BoxedError> + Send + Sync,
{
    fn resolve(&self, href: &str) -> Result<Geometry, BoxedError> {
        self(href)
    }
}
