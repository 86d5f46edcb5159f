use crate::crs::Crs;
use crate::errors::{Result, TessellationError};
use crate::float_types::Coordinate;
use crate::gml::{AnyCurve, AnyRing, CurveMember, Geometry, LinearRing, Orientation, Ring};
use crate::io::IoError;
use crate::tessellate::Tessellator;
use crate::tessellate::positions::{flatten, note_unclosed_ring, require_at_least};

impl Tessellator {
    /// Coordinates of any curve-like geometry.
    ///
    /// `inherited` is the CRS of the nearest enclosing geometry; a CRS declared
    /// on `curve` itself takes precedence and is passed on to its children.
    pub fn curve_coordinates(&self, curve: &AnyCurve, inherited: Option<&Crs>) -> Result<Vec<Coordinate>> {
        self.walk_curve(curve, inherited, &mut Vec::new())
    }

    /// Coordinates of a polygon or patch boundary.
    pub fn ring_coordinates(&self, ring: &AnyRing, inherited: Option<&Crs>) -> Result<Vec<Coordinate>> {
        let crs = Crs::inherit(ring.srs(), inherited);
        match ring {
            AnyRing::LinearRing(ring) => self.linear_ring_coordinates(ring, crs),
            AnyRing::Ring(ring) => self.ring_member_coordinates(ring, crs, &mut Vec::new()),
        }
    }

    /// `resolving` holds the hrefs whose curves are currently being walked.
    fn walk_curve(
        &self,
        curve: &AnyCurve,
        inherited: Option<&Crs>,
        resolving: &mut Vec<String>,
    ) -> Result<Vec<Coordinate>> {
        let crs = Crs::inherit(curve.srs(), inherited);
        match curve {
            AnyCurve::Curve(curve) => {
                if curve.segments.is_empty() {
                    return Err(TessellationError::EmptyGeometry("Curve"));
                }
                let mut coordinates = Vec::new();
                for segment in &curve.segments {
                    coordinates.extend(self.segment_coordinates(segment, crs)?);
                }
                Ok(coordinates)
            },
            AnyCurve::LineString(line) => require_at_least("LineString", 2, flatten(&line.positions, crs)?),
            AnyCurve::CompositeCurve(composite) => {
                if composite.members.is_empty() {
                    return Err(TessellationError::EmptyGeometry("CompositeCurve"));
                }
                let mut coordinates = Vec::new();
                for member in &composite.members {
                    coordinates.extend(self.walk_curve(member, crs, resolving)?);
                }
                Ok(coordinates)
            },
            AnyCurve::OrientableCurve(orientable) => {
                let mut coordinates = self.walk_curve(&orientable.base_curve, crs, resolving)?;
                if orientable.orientation == Orientation::Negative {
                    coordinates.reverse();
                }
                Ok(coordinates)
            },
            AnyCurve::LinearRing(ring) => self.linear_ring_coordinates(ring, crs),
            AnyCurve::Ring(ring) => self.ring_member_coordinates(ring, crs, resolving),
        }
    }

    /// `crs` is already the ring's effective CRS.
    fn linear_ring_coordinates(&self, ring: &LinearRing, crs: Option<&Crs>) -> Result<Vec<Coordinate>> {
        let coordinates = flatten(&ring.positions, crs)?;
        note_unclosed_ring("LinearRing", &coordinates);
        Ok(coordinates)
    }

    /// Concatenates the ring's curve members, dereferencing hrefs on the way.
    fn ring_member_coordinates(
        &self,
        ring: &Ring,
        crs: Option<&Crs>,
        resolving: &mut Vec<String>,
    ) -> Result<Vec<Coordinate>> {
        if ring.members.is_empty() {
            return Err(TessellationError::EmptyGeometry("Ring"));
        }
        let mut coordinates = Vec::new();
        for member in &ring.members {
            match member {
                CurveMember::Inline(curve) => coordinates.extend(self.walk_curve(curve, crs, resolving)?),
                CurveMember::Remote { href } => {
                    let curve = self.resolve_member(href, resolving)?;
                    resolving.push(href.clone());
                    let walked = self.walk_curve(&curve, crs, resolving);
                    resolving.pop();
                    coordinates.extend(walked?);
                },
            }
        }
        note_unclosed_ring("Ring", &coordinates);
        Ok(coordinates)
    }

    /// Fetches a remote member for this call only, refusing hrefs already on
    /// the resolution stack.
    fn resolve_member(&self, href: &str, resolving: &[String]) -> Result<AnyCurve> {
        if resolving.iter().any(|seen| seen == href) {
            tracing::warn!(href, depth = resolving.len(), "cyclic remote curve reference");
            return Err(TessellationError::UnresolvableRemoteReference {
                href: href.to_string(),
                source: Box::new(IoError::CyclicReference(href.to_string())),
            });
        }
        tracing::debug!(href, "resolving remote curve member");
        let geometry = self
            .resolver()
            .resolve(href)
            .map_err(|source| TessellationError::UnresolvableRemoteReference {
                href: href.to_string(),
                source,
            })?;
        match geometry {
            Geometry::Curve(curve) => Ok(curve),
            other => Err(TessellationError::UnsupportedGeometryKind(other.kind_name().to_string())),
        }
    }
}
