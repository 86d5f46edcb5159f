//! Tessellation errors

/// Boxed cause carried by [`TessellationError::UnresolvableRemoteReference`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All the possible failures while tessellating a geometry.
///
/// Every variant aborts the enclosing call; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum TessellationError {
    /// (UnsupportedGeometryKind) The geometry is not a point, curve or surface this engine handles
    #[error("(UnsupportedGeometryKind) Unsupported geometry kind: {0}")]
    UnsupportedGeometryKind(String),
    /// (UnsupportedCurveSegmentKind) A curve segment uses an interpolation this engine does not discretize
    #[error("(UnsupportedCurveSegmentKind) Unsupported curve segment kind: {0}")]
    UnsupportedCurveSegmentKind(String),
    /// (UnsupportedSurfacePatchKind) A surface patch kind with no ring boundary
    #[error("(UnsupportedSurfacePatchKind) Unsupported surface patch kind: {0}")]
    UnsupportedSurfacePatchKind(String),
    /// (MissingCoordinateReferenceSystem) An arc was requested with no CRS in scope
    #[error("(MissingCoordinateReferenceSystem) No coordinate reference system available for {0}")]
    MissingCoordinateReferenceSystem(String),
    /// (UnrecognizedLengthUnit) The unit of an arc radius is unknown
    #[error("(UnrecognizedLengthUnit) Unrecognized unit of length: {0}")]
    UnrecognizedLengthUnit(String),
    /// (UnrecognizedAngleUnit) The unit of an arc angle is unknown
    #[error("(UnrecognizedAngleUnit) Unrecognized unit of angle: {0}")]
    UnrecognizedAngleUnit(String),
    /// (UnresolvableRemoteReference) Dereferencing an href failed
    #[error("(UnresolvableRemoteReference) Could not resolve {href}: {source}")]
    UnresolvableRemoteReference {
        href: String,
        #[source]
        source: BoxedError,
    },
    /// (MalformedPositionList) Ordinates cannot be grouped into positions
    #[error("(MalformedPositionList) {count} ordinates cannot form positions of dimension {dimension}")]
    MalformedPositionList { count: usize, dimension: usize },
    /// (TooFewPositions) A segment has fewer positions than its kind requires
    #[error("(TooFewPositions) {kind} requires at least {required} positions, found {found}")]
    TooFewPositions {
        kind: &'static str,
        required: usize,
        found: usize,
    },
    /// (EmptyGeometry) A curve, surface or composite with no parts
    #[error("(EmptyGeometry) {0} has no members")]
    EmptyGeometry(&'static str),
}

pub type Result<T> = std::result::Result<T, TessellationError>;
