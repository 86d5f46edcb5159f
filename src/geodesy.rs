//! Destination points on the ellipsoid or on the plane, chosen by CRS kind.

use crate::crs::{AxisOrder, Crs, CrsKind};
use crate::float_types::{Coordinate, Real};
use crate::traits::Geodesy;
use geo::{Destination, Geodesic, Point, coord};
use nalgebra::{Rotation2, Vector2};

/// Default [`Geodesy`]: WGS84 geodesics (Karney's algorithm, via `geo`) for
/// geographic CRSs, plane trigonometry for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrsGeodesy;

impl Geodesy for CrsGeodesy {
    fn destination(&self, crs: &Crs, origin: Coordinate, bearing_deg: Real, distance_m: Real) -> Coordinate {
        let east_north = to_east_north(crs.axis_order, origin);
        let target = match crs.kind {
            CrsKind::Geographic => geodesic_destination(east_north, bearing_deg, distance_m),
            CrsKind::Projected | CrsKind::Engineering => {
                planar_destination(east_north, bearing_deg, distance_m)
            },
        };
        from_east_north(crs.axis_order, target)
    }
}

/// Destination on the WGS84 ellipsoid; `origin` is (longitude, latitude).
pub fn geodesic_destination(origin: Coordinate, bearing_deg: Real, distance_m: Real) -> Coordinate {
    let target = Geodesic::destination(Point::from(origin), bearing_deg, distance_m);
    target.0
}

/// Destination on the plane; `origin` is (easting, northing).
pub fn planar_destination(origin: Coordinate, bearing_deg: Real, distance_m: Real) -> Coordinate {
    // Bearings turn clockwise from north, rotations turn counter-clockwise from east
    let offset = Rotation2::new(-bearing_deg.to_radians()) * Vector2::new(0.0, distance_m);
    coord! { x: origin.x + offset.x, y: origin.y + offset.y }
}

#[inline]
const fn to_east_north(order: AxisOrder, c: Coordinate) -> Coordinate {
    match order {
        AxisOrder::EastNorth => c,
        AxisOrder::NorthEast => Coordinate { x: c.y, y: c.x },
    }
}

#[inline]
const fn from_east_north(order: AxisOrder, c: Coordinate) -> Coordinate {
    to_east_north(order, c)
}
