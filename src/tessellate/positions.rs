//! Reading `gml:posList` and `gml:pos` into 2D coordinates.

use crate::crs::Crs;
use crate::errors::{Result, TessellationError};
use crate::float_types::{Coordinate, coords_approx_eq};
use crate::gml::{DirectPosition, PosList, Positions};
use geo::coord;

/// Dimension used when neither the list nor any enclosing CRS declares one.
pub const DEFAULT_DIMENSION: usize = 2;

/// First two ordinates of a direct position.
pub fn direct_position(position: &DirectPosition) -> Result<Coordinate> {
    match position.ordinates.as_slice() {
        [x, y, ..] => Ok(coord! { x: *x, y: *y }),
        ordinates => Err(TessellationError::MalformedPositionList {
            count: ordinates.len(),
            dimension: DEFAULT_DIMENSION,
        }),
    }
}

/// Groups a flat ordinate list by dimension, keeping ordinates 0 and 1 of each group.
///
/// The list's own `srsDimension` wins over the CRS dimension.
pub fn flatten_pos_list(list: &PosList, crs: Option<&Crs>) -> Result<Vec<Coordinate>> {
    let dimension = list
        .srs_dimension
        .or(crs.map(|crs| crs.dimension))
        .unwrap_or(DEFAULT_DIMENSION);
    if dimension < DEFAULT_DIMENSION || list.values.len() % dimension != 0 {
        return Err(TessellationError::MalformedPositionList {
            count: list.values.len(),
            dimension,
        });
    }
    Ok(list
        .values
        .chunks_exact(dimension)
        .map(|group| coord! { x: group[0], y: group[1] })
        .collect())
}

/// Coordinates of either position representation, in input order.
pub fn flatten(positions: &Positions, crs: Option<&Crs>) -> Result<Vec<Coordinate>> {
    match positions {
        Positions::List(list) => flatten_pos_list(list, crs),
        Positions::Direct(direct) => direct.iter().map(direct_position).collect(),
    }
}

/// Fails unless `coordinates` holds at least `required` positions.
pub fn require_at_least(kind: &'static str, required: usize, coordinates: Vec<Coordinate>) -> Result<Vec<Coordinate>> {
    if coordinates.len() < required {
        return Err(TessellationError::TooFewPositions {
            kind,
            required,
            found: coordinates.len(),
        });
    }
    Ok(coordinates)
}

/// Rings are assumed closed; an open one is only reported.
pub fn note_unclosed_ring(kind: &'static str, coordinates: &[Coordinate]) {
    if let (Some(first), Some(last)) = (coordinates.first(), coordinates.last()) {
        if !coords_approx_eq(*first, *last) {
            tracing::debug!(kind, ?first, ?last, "ring is not closed");
        }
    }
}
