//! File-backed remote references.
//!
//! A referenced file holds either a single serialized [`Geometry`] or, when
//! the href carries a `#fragment`, a JSON object mapping `gml:id`s to
//! geometries.

use crate::errors::BoxedError;
use crate::gml::Geometry;
use crate::io::IoError;
use crate::traits::RemoteResolver;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves `file://` URIs and relative paths against a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileResolver {
    base_dir: PathBuf,
}

impl JsonFileResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn locate(&self, href: &str) -> Result<(PathBuf, Option<String>), IoError> {
        let (location, fragment) = match href.split_once('#') {
            Some((location, fragment)) => (location, Some(fragment.to_string())),
            None => (href, None),
        };
        if location.is_empty() {
            return Err(IoError::MalformedPath(href.to_string()));
        }
        let path = if let Some(path) = location.strip_prefix("file://") {
            PathBuf::from(path)
        } else if location.contains("://") {
            return Err(IoError::UnsupportedScheme(href.to_string()));
        } else {
            self.base_dir.join(location)
        };
        Ok((path, fragment))
    }

    fn load(&self, path: &Path, fragment: Option<&str>) -> Result<Geometry, IoError> {
        let text = std::fs::read_to_string(path)?;
        match fragment {
            None => Ok(serde_json::from_str(&text)?),
            Some(id) => {
                let mut by_id: HashMap<String, Geometry> = serde_json::from_str(&text)?;
                by_id
                    .remove(id)
                    .ok_or_else(|| IoError::NotFound(format!("{}#{id}", path.display())))
            },
        }
    }
}

impl RemoteResolver for JsonFileResolver {
    fn resolve(&self, href: &str) -> Result<Geometry, BoxedError> {
        let (path, fragment) = self.locate(href)?;
        tracing::debug!(path = %path.display(), ?fragment, "loading remote geometry");
        Ok(self.load(&path, fragment.as_deref())?)
    }
}
