//! Optional resource loading.
//!
//! Abbreviation and vocabulary resources are located by convention and may
//! be absent; [`load_optional`] makes the "missing is not an error" policy
//! uniform. Reads go through the [`ResourceProvider`] trait so tests can
//! inject in-memory resources instead of touching the filesystem.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{MovaError, Result};

/// Source of raw resource content keyed by relative path.
pub trait ResourceProvider: Send + Sync {
    /// Read the resource at `path`. `Ok(None)` means the resource does
    /// not exist; errors are reserved for resources that exist but cannot
    /// be read.
    fn read(&self, path: &Path) -> Result<Option<String>>;
}

/// Provider reading resources from a base directory on disk.
///
/// Each read opens, consumes, and closes the file before returning; no
/// handle outlives the call.
#[derive(Clone, Debug)]
pub struct FsResourceProvider {
    base_dir: PathBuf,
}

impl FsResourceProvider {
    /// Create a provider rooted at `base_dir`.
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        FsResourceProvider {
            base_dir: base_dir.into(),
        }
    }

    /// The directory resource paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for FsResourceProvider {
    fn default() -> Self {
        Self::new("resources")
    }
}

impl ResourceProvider for FsResourceProvider {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(self.base_dir.join(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory provider for tests and embedders.
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path`.
    pub fn insert<P: Into<PathBuf>, S: Into<String>>(mut self, path: P, content: S) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ResourceProvider for MemoryProvider {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}

/// Load and parse an optional JSON resource.
///
/// A missing resource is `Ok(None)`. A resource that exists but cannot be
/// parsed surfaces [`MovaError::Resource`] — an empty map and a malformed
/// map have different trust implications downstream.
pub fn load_optional<T: DeserializeOwned>(
    provider: &dyn ResourceProvider,
    path: &Path,
) -> Result<Option<T>> {
    let Some(content) = provider.read(path)? else {
        return Ok(None);
    };

    let value = serde_json::from_str(&content).map_err(|e| {
        MovaError::resource(format!(
            "failed to parse resource '{}': {e}",
            path.display()
        ))
    })?;

    Ok(Some(value))
}
