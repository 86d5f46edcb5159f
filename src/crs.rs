//! Coordinate reference system descriptors.
//!
//! The engine only needs the dimension (to group position lists), the axis
//! order (to hand geographic coordinates to the geodesic solver) and whether
//! destinations are computed on the ellipsoid or on the plane.

/// How destination points are computed for this CRS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrsKind {
    /// Latitude/longitude on the WGS84 ellipsoid
    Geographic,
    /// Map projection with metric easting/northing
    Projected,
    /// Local planar system
    Engineering,
}

/// Order of the first two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisOrder {
    /// First ordinate is northing/latitude (EPSG:4326 in GML 3.2)
    NorthEast,
    /// First ordinate is easting/longitude (CRS84, most projections)
    EastNorth,
}

/// Descriptor of a coordinate reference system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crs {
    pub name: String,
    pub dimension: usize,
    pub axis_order: AxisOrder,
    pub kind: CrsKind,
}

impl Crs {
    pub fn new(name: impl Into<String>, dimension: usize, axis_order: AxisOrder, kind: CrsKind) -> Self {
        Self {
            name: name.into(),
            dimension,
            axis_order,
            kind,
        }
    }

    /// WGS 84 geographic 2D, latitude first.
    pub fn epsg_4326() -> Self {
        Self::new("urn:ogc:def:crs:EPSG::4326", 2, AxisOrder::NorthEast, CrsKind::Geographic)
    }

    /// WGS 84 geographic 2D, longitude first.
    pub fn crs84() -> Self {
        Self::new("urn:ogc:def:crs:OGC:1.3:CRS84", 2, AxisOrder::EastNorth, CrsKind::Geographic)
    }

    /// A local 2D plane measured in meters.
    pub fn engineering(name: impl Into<String>) -> Self {
        Self::new(name, 2, AxisOrder::EastNorth, CrsKind::Engineering)
    }

    /// Builds a descriptor from a GML `srsName`.
    ///
    /// Understands `EPSG:n`, `urn:ogc:def:crs:EPSG::n`,
    /// `http://www.opengis.net/def/crs/EPSG/0/n` and the OGC CRS84 family.
    /// Names that cannot be interpreted become a 2D engineering CRS.
    ///
    /// ```
    /// # use gmltess::crs::{AxisOrder, Crs, CrsKind};
    /// let crs = Crs::from_srs_name("http://www.opengis.net/def/crs/EPSG/0/4979");
    /// assert_eq!(crs.dimension, 3);
    /// assert_eq!(crs.axis_order, AxisOrder::NorthEast);
    /// assert_eq!(crs.kind, CrsKind::Geographic);
    /// ```
    pub fn from_srs_name(srs_name: &str) -> Self {
        let trimmed = srs_name.trim();
        let upper = trimmed.to_ascii_uppercase();
        if upper.ends_with("CRS84") {
            return Self::new(trimmed, 2, AxisOrder::EastNorth, CrsKind::Geographic);
        }
        if upper.ends_with("CRS84H") {
            return Self::new(trimmed, 3, AxisOrder::EastNorth, CrsKind::Geographic);
        }

        let Some(code) = epsg_code(&upper) else {
            return Self::engineering(trimmed);
        };
        let (dimension, axis_order, kind) = match code {
            4326 | 4258 | 4269 | 4283 | 4019 | 4617 => (2, AxisOrder::NorthEast, CrsKind::Geographic),
            4979 | 4937 | 7843 => (3, AxisOrder::NorthEast, CrsKind::Geographic),
            _ => (2, AxisOrder::EastNorth, CrsKind::Projected),
        };
        Self::new(trimmed, dimension, axis_order, kind)
    }

    /// Overrides the dimension, as a GML `srsDimension` attribute does.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// The effective CRS of a child: its own when declared, else the inherited one.
    #[inline]
    pub fn inherit<'a>(own: Option<&'a Crs>, inherited: Option<&'a Crs>) -> Option<&'a Crs> {
        own.or(inherited)
    }
}

/// Pulls the EPSG code out of an (upper-cased) srsName.
fn epsg_code(upper: &str) -> Option<u32> {
    if !upper.contains("EPSG") {
        return None;
    }
    let digits = upper.rsplit(|c: char| !c.is_ascii_digit()).find(|s| !s.is_empty())?;
    // The code must be the trailing token, not a version number in the middle
    if !upper.ends_with(digits) {
        return None;
    }
    digits.parse().ok()
}
