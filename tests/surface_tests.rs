mod support;

use gmltess::{
    Coordinate, Tessellator, TessellationError,
    crs::Crs,
    float_types::Real,
    gml::{
        AnyRing, AnySurface, Geometry, LinearRing, PatchKind, Polygon, PolygonPatch, PosList,
        Positions, Surface, SurfacePatch,
    },
    traits::PolygonUnion,
    union::GeoUnion,
};
use geo::{LineString, MultiPolygon, Polygon as GeoPolygon, Winding};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::support::{square_patch, square_ring, xy};

fn surface(patches: Vec<SurfacePatch>) -> Geometry {
    Geometry::Surface(AnySurface::Surface(Surface { srs: None, patches }))
}

fn polygon(exterior: AnyRing, interiors: Vec<AnyRing>) -> Geometry {
    Geometry::Surface(AnySurface::Polygon(Polygon {
        srs: None,
        exterior,
        interiors,
    }))
}

#[test]
fn polygon_exterior_equals_ring() {
    let ring = square_ring(2.0, 3.0, 4.0);
    let tessellator = Tessellator::new();
    let from_polygon = tessellator.extract_coordinates(&polygon(ring.clone(), vec![])).unwrap();
    let from_ring = tessellator.ring_coordinates(&ring, None).unwrap();
    assert_eq!(from_polygon, from_ring);
    assert_eq!(from_polygon.len(), 5);
}

#[test]
fn polygon_interiors_inherit_crs() {
    // The hole's 3D list is only readable with the polygon's dimension
    let hole = AnyRing::LinearRing(LinearRing {
        srs: None,
        positions: Positions::List(PosList::new(vec![
            1.0, 1.0, 0.0, 2.0, 1.0, 0.0, 2.0, 2.0, 0.0, 1.0, 1.0, 0.0,
        ])),
    });
    let exterior = AnyRing::LinearRing(LinearRing {
        srs: None,
        positions: Positions::List(PosList::new(vec![
            0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 4.0, 4.0, 0.0, 0.0, 0.0, 0.0,
        ])),
    });
    let geometry = Geometry::Surface(AnySurface::Polygon(Polygon {
        srs: Some(Crs::from_srs_name("EPSG:4979")),
        exterior,
        interiors: vec![hole],
    }));

    let holes = gmltess::interior_coordinate_sets(&geometry).unwrap();
    assert_eq!(holes, vec![xy(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])]);
}

#[test]
fn single_patch_surface_is_its_ring() {
    let coords = gmltess::extract_coordinates(&surface(vec![square_patch(0.0, 0.0)])).unwrap();
    assert_eq!(coords, xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]));
}

/// Occurrences of `(x, y)`, not counting the closing point of a closed ring.
fn occurrences(coords: &[Coordinate], x: Real, y: Real) -> usize {
    let open = match (coords.first(), coords.last()) {
        (Some(first), Some(last)) if coords.len() > 1 && first == last => &coords[..coords.len() - 1],
        _ => coords,
    };
    open.iter()
        .filter(|c| support::coord_approx_eq(**c, Coordinate { x, y }, 1e-9))
        .count()
}

#[test]
fn adjacent_squares_merge_without_seam() {
    let coords = gmltess::extract_coordinates(&surface(vec![square_patch(0.0, 0.0), square_patch(1.0, 0.0)])).unwrap();

    // The closed 1x2 rectangle: four corners plus the closing point
    assert_eq!(coords.len(), 5, "expected the merged rectangle, got {coords:?}");
    assert_eq!(coords.first(), coords.last());
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)] {
        assert_eq!(occurrences(&coords, x, y), 1, "corner ({x}, {y}) in {coords:?}");
    }
    // The shared edge is gone
    assert_eq!(occurrences(&coords, 1.0, 0.0), 0, "{coords:?}");
    assert_eq!(occurrences(&coords, 1.0, 1.0), 0, "{coords:?}");
}

#[test]
fn merged_boundary_winds_like_a_single_patch() {
    let single = gmltess::extract_coordinates(&surface(vec![square_patch(0.0, 0.0)])).unwrap();
    let merged = gmltess::extract_coordinates(&surface(vec![square_patch(0.0, 0.0), square_patch(1.0, 0.0)])).unwrap();
    assert!(LineString::new(single).is_ccw());
    assert!(LineString::new(merged.clone()).is_ccw(), "{merged:?}");
}

#[test]
fn rectangle_and_triangle_patches() {
    let rectangle = SurfacePatch::Rectangle {
        exterior: square_ring(0.0, 0.0, 1.0),
    };
    let triangle = SurfacePatch::Triangle {
        exterior: crate::support::linear_ring(&[(1.0, 0.0), (2.0, 0.0), (1.0, 1.0), (1.0, 0.0)]),
    };
    let geometry = surface(vec![rectangle, triangle]);
    let coords = gmltess::extract_coordinates(&geometry).unwrap();
    assert!(occurrences(&coords, 2.0, 0.0) >= 1);
    assert!(gmltess::interior_coordinate_sets(&geometry).unwrap().is_empty());
}

#[test]
fn surface_holes_are_deduplicated() {
    let hole = square_ring(0.25, 0.25, 0.5);
    let patch = |x| {
        SurfacePatch::PolygonPatch(PolygonPatch {
            exterior: square_ring(x, 0.0, 1.0),
            interiors: vec![hole.clone()],
        })
    };
    let holes = gmltess::interior_coordinate_sets(&surface(vec![patch(0.0), patch(0.0)])).unwrap();
    assert_eq!(holes.len(), 1);
}

#[test]
fn unsupported_patch_is_named() {
    let geometry = surface(vec![square_patch(0.0, 0.0), SurfacePatch::Unsupported(PatchKind::Sphere)]);
    match gmltess::extract_coordinates(&geometry) {
        Err(TessellationError::UnsupportedSurfacePatchKind(kind)) => assert_eq!(kind, "Sphere"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(gmltess::interior_coordinate_sets(&geometry).is_err());
}

#[test]
fn empty_surface_is_rejected() {
    assert!(matches!(
        gmltess::extract_coordinates(&surface(vec![])),
        Err(TessellationError::EmptyGeometry("Surface"))
    ));
}

/// Counts calls and forwards to `geo`.
struct CountingUnion(Arc<AtomicUsize>);

impl PolygonUnion for CountingUnion {
    fn union(&self, accumulated: &MultiPolygon<Real>, polygon: &GeoPolygon<Real>) -> MultiPolygon<Real> {
        self.0.fetch_add(1, Ordering::SeqCst);
        GeoUnion.union(accumulated, polygon)
    }
}

#[test]
fn union_capability_is_injected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let tessellator = Tessellator::new().with_union(CountingUnion(calls.clone()));

    tessellator.extract_coordinates(&surface(vec![square_patch(0.0, 0.0)])).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0, "a single patch needs no union");

    tessellator
        .extract_coordinates(&surface(vec![square_patch(0.0, 0.0), square_patch(1.0, 0.0), square_patch(2.0, 0.0)]))
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn disjoint_patches_keep_both_boundaries() {
    let coords = gmltess::extract_coordinates(&surface(vec![square_patch(0.0, 0.0), square_patch(5.0, 5.0)])).unwrap();
    assert!(occurrences(&coords, 0.0, 0.0) >= 1);
    assert!(occurrences(&coords, 6.0, 6.0) >= 1);
}
