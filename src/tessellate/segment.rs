use crate::crs::Crs;
use crate::errors::{Result, TessellationError};
use crate::float_types::Coordinate;
use crate::gml::CurveSegment;
use crate::tessellate::Tessellator;
use crate::tessellate::arc::arc_by_center_point;
use crate::tessellate::positions::{flatten, require_at_least};

/// Minimum positions of a line or geodesic string.
const LINE_MIN_POSITIONS: usize = 2;
/// Minimum positions of an arc string.
const ARC_STRING_MIN_POSITIONS: usize = 3;

impl Tessellator {
    /// Coordinates of one curve segment under the CRS of its curve.
    ///
    /// Lines and geodesic strings are emitted vertex by vertex; only
    /// center-point arcs are interpolated. Three-point arcs are passed through
    /// verbatim.
    pub fn segment_coordinates(&self, segment: &CurveSegment, crs: Option<&Crs>) -> Result<Vec<Coordinate>> {
        tracing::trace!(kind = segment.kind_name(), "tessellating segment");
        match segment {
            CurveSegment::LineStringSegment(positions) | CurveSegment::GeodesicString(positions) => {
                require_at_least(segment.kind_name(), LINE_MIN_POSITIONS, flatten(positions, crs)?)
            },
            CurveSegment::ArcByCenterPoint(arc) | CurveSegment::CircleByCenterPoint(arc) => {
                arc_by_center_point(self.geodesy(), arc, crs)
            },
            CurveSegment::ArcString(arc) | CurveSegment::Arc(arc) | CurveSegment::Circle(arc) => {
                require_at_least(segment.kind_name(), ARC_STRING_MIN_POSITIONS, flatten(&arc.positions, crs)?)
            },
            CurveSegment::Unsupported(kind) => {
                Err(TessellationError::UnsupportedCurveSegmentKind(kind.name().to_string()))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gml::{ArcByCenterPoint, ArcString, DirectPosition, Measure, PosList, Positions, SegmentKind};
    use geo::coord;

    #[test]
    fn line_string_segment_passes_through() {
        let segment = CurveSegment::LineStringSegment(Positions::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        let coords = Tessellator::new().segment_coordinates(&segment, None).unwrap();
        assert_eq!(
            coords,
            vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }]
        );
    }

    #[test]
    fn arc_string_from_pos_list() {
        let segment = CurveSegment::Arc(ArcString {
            positions: Positions::List(PosList::new(vec![0.0, 0.0, 1.0, 1.0, 2.0, 0.0])),
        });
        let coords = Tessellator::new().segment_coordinates(&segment, None).unwrap();
        assert_eq!(coords.len(), 3);
    }

    #[test]
    fn arc_string_needs_three_positions() {
        let segment = CurveSegment::ArcString(ArcString {
            positions: Positions::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
        });
        assert!(matches!(
            Tessellator::new().segment_coordinates(&segment, None),
            Err(TessellationError::TooFewPositions { kind: "ArcString", required: 3, found: 2 })
        ));
    }

    #[test]
    fn circle_by_center_point_without_crs() {
        let segment = CurveSegment::CircleByCenterPoint(ArcByCenterPoint {
            center: DirectPosition::xy(0.0, 0.0),
            radius: Measure::new(1.0, "m"),
            start_angle: None,
            end_angle: None,
        });
        assert!(matches!(
            Tessellator::new().segment_coordinates(&segment, None),
            Err(TessellationError::MissingCoordinateReferenceSystem(_))
        ));
    }

    #[test]
    fn unsupported_segment_is_named() {
        let segment = CurveSegment::Unsupported(SegmentKind::Clothoid);
        match Tessellator::new().segment_coordinates(&segment, None) {
            Err(TessellationError::UnsupportedCurveSegmentKind(kind)) => assert_eq!(kind, "Clothoid"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
