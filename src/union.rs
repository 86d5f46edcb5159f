use crate::float_types::Real;
use crate::traits::PolygonUnion;
use geo::{BooleanOps as GeoBool, MultiPolygon, Polygon};

/// Default [`PolygonUnion`] backed by `geo`'s boolean operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoUnion;

impl PolygonUnion for GeoUnion {
    fn union(&self, accumulated: &MultiPolygon<Real>, polygon: &Polygon<Real>) -> MultiPolygon<Real> {
        let other = MultiPolygon::new(vec![polygon.clone()]);
        if accumulated.0.is_empty() {
            return other;
        }
        accumulated.union(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, polygon};

    #[test]
    fn adjacent_squares_merge() {
        let left = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
        let right = polygon![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 1.0, y: 1.0)];
        let merged = GeoUnion.union_all(&[left, right]);
        assert_eq!(merged.0.len(), 1);
        assert!((merged.unsigned_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_squares_stay_apart() {
        let a = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
        let b = polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0), (x: 5.0, y: 6.0)];
        assert_eq!(GeoUnion.union_all(&[a, b]).0.len(), 2);
    }
}
