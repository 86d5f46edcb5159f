#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use json::JsonFileResolver;

/// Errors raised while dereferencing remote geometry.
///
/// They reach callers wrapped in
/// [`TessellationError::UnresolvableRemoteReference`](crate::errors::TessellationError::UnresolvableRemoteReference).
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    NotFound(String),
    UnsupportedScheme(String),
    MalformedPath(String),
    Unimplemented(String),
    CyclicReference(String),

    #[cfg(feature = "json")]
    /// Error bubbled up from `serde_json` while unmarshalling a geometry.
    Json(serde_json::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            NotFound(href) => write!(f, "No geometry found at {href}"),
            UnsupportedScheme(href) => write!(f, "URI scheme is not supported: {href}"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),
            CyclicReference(href) => write!(f, "{href} refers back to itself"),

            #[cfg(feature = "json")]
            Json(error) => write!(f, "JSON unmarshalling error: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            #[cfg(feature = "json")]
            IoError::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for IoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
