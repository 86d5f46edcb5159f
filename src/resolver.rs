//! In-process [`RemoteResolver`]s.

use crate::errors::BoxedError;
use crate::gml::Geometry;
use crate::io::IoError;
use crate::traits::RemoteResolver;
use std::collections::HashMap;

/// Refuses every href. Used when no resolver has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoteResolver;

impl RemoteResolver for NoRemoteResolver {
    fn resolve(&self, href: &str) -> Result<Geometry, BoxedError> {
        Err(Box::new(IoError::Unimplemented(format!(
            "remote references are disabled, cannot resolve {href}"
        ))))
    }
}

/// Serves geometries from an in-memory table keyed by href.
#[derive(Debug, Clone, Default)]
pub struct FixtureResolver {
    geometries: HashMap<String, Geometry>,
}

impl FixtureResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `geometry` under `href`, replacing any previous entry.
    pub fn with(mut self, href: impl Into<String>, geometry: impl Into<Geometry>) -> Self {
        self.insert(href, geometry);
        self
    }

    pub fn insert(&mut self, href: impl Into<String>, geometry: impl Into<Geometry>) {
        self.geometries.insert(href.into(), geometry.into());
    }
}

impl RemoteResolver for FixtureResolver {
    fn resolve(&self, href: &str) -> Result<Geometry, BoxedError> {
        self.geometries
            .get(href)
            .cloned()
            .ok_or_else(|| Box::new(IoError::NotFound(href.to_string())) as BoxedError)
    }
}
