//! Tessellation of **OGC GML 3.2** geometries into ordered 2D coordinate sequences,
//! suitable for convex hulls, boundary extraction and spatial comparison.
//!
//! The input is a typed geometry tree ([`gml`]) produced by an XML binding
//! layer; this crate neither parses XML nor validates schemas.
//!
//! - **Points** yield their position
//! - **Curves** (segmented curves, line strings, composite/orientable curves,
//!   linear rings and rings with remote members) yield the concatenation of
//!   their segments, with center-point arcs sampled at five geodesic points
//! - **Surfaces** (polygons and multi-patch surfaces) yield their exterior
//!   boundary, patches merged by planar union, and their holes separately
//!
//! ```
//! use gmltess::crs::Crs;
//! use gmltess::gml::*;
//!
//! let circle = Geometry::Curve(AnyCurve::Curve(Curve {
//!     srs: Some(Crs::epsg_4326()),
//!     segments: vec![CurveSegment::CircleByCenterPoint(ArcByCenterPoint {
//!         center: DirectPosition::xy(52.0, 4.0),
//!         radius: Measure::new(2.0, "NM"),
//!         start_angle: None,
//!         end_angle: None,
//!     })],
//! }));
//! assert_eq!(gmltess::extract_coordinates(&circle).unwrap().len(), 5);
//! ```
//!
//! # Features
//! #### Optional
//! - **serde**: `Serialize`/`Deserialize` for the geometry tree and CRS descriptors
//! - **json**: [`io::JsonFileResolver`], dereferencing hrefs to JSON geometry files

#![forbid(unsafe_code)]
#![warn(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod crs;
pub mod errors;
pub mod float_types;
pub mod geodesy;
pub mod gml;
pub mod io;
pub mod resolver;
pub mod tessellate;
pub mod traits;
pub mod union;
pub mod units;

pub use errors::{Result, TessellationError};
pub use float_types::Coordinate;
pub use tessellate::Tessellator;

/// [`Tessellator::extract_coordinates`] with the default capabilities.
pub fn extract_coordinates(geometry: &gml::Geometry) -> Result<Vec<Coordinate>> {
    Tessellator::default().extract_coordinates(geometry)
}

/// [`Tessellator::interior_coordinate_sets`] with the default capabilities.
pub fn interior_coordinate_sets(geometry: &gml::Geometry) -> Result<Vec<Vec<Coordinate>>> {
    Tessellator::default().interior_coordinate_sets(geometry)
}
