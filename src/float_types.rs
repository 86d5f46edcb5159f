// Our Real scalar type. The geodesic solver underneath `geo::Geodesic` is f64-only.
pub type Real = f64;

/// 2D coordinate produced by every tessellation routine.
pub type Coordinate = geo::Coord<Real>;

use std::sync::OnceLock;

/// Absolute slack for comparing ordinates and angles.
///
/// Decides whether an arc's end angle counts as 0° (and is read as a full
/// turn) and whether a ring's last position closes onto its first. Fixed the
/// first time it is read; `GMLTESS_TOLERANCE` set while compiling the crate
/// replaces the 1e-9 default, and [`set_tolerance`] wins if called earlier.
static TOLERANCE: OnceLock<Real> = OnceLock::new();

const DEFAULT_TOLERANCE: Real = 1e-9;

pub fn tolerance() -> Real {
    *TOLERANCE.get_or_init(|| {
        option_env!("GMLTESS_TOLERANCE")
            .and_then(|raw| raw.parse::<Real>().ok())
            .map_or(DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON))
    })
}

/// Fixes the tolerance before any tessellation runs. Ignored once
/// [`tolerance`] has been read.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE.set(value.max(Real::EPSILON));
}

/// `true` when `a` and `b` are within [`tolerance`] of each other.
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    (a - b).abs() <= tolerance()
}

/// `true` when both ordinates of two coordinates are within [`tolerance`].
#[inline]
pub fn coords_approx_eq(a: Coordinate, b: Coordinate) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// Degrees in a full turn.
pub const FULL_TURN_DEGREES: Real = 360.0;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion (to meters)
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const METER: Real = 1.0;
pub const KILOMETER: Real = 1000.0;
pub const NAUTICAL_MILE: Real = 1852.0;
pub const STATUTE_MILE: Real = 1609.34;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion (to degrees)
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const DEGREE: Real = 1.0;
pub const RADIAN: Real = 180.0 / PI;
pub const GRADIAN: Real = 0.9;
