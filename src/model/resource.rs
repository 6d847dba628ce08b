//! Embedded binary resources (images) and where they are read from.

use crate::error::{Error, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Type tag written for every embedded resource.
pub const EMBEDDING: &str = "Embedding";

/// A registered embedded resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Identifier, 1-based in registration order
    pub id: u32,

    /// Base64-encoded payload
    #[serde(skip_serializing, default)]
    pub data: String,

    /// Size of the decoded payload in bytes
    pub size: usize,

    /// Format tag derived from the file extension ("jpeg" becomes "jpg")
    pub format: String,

    /// Resource type tag
    pub kind: String,

    /// Path as referenced in the source
    pub source: PathBuf,
}

impl ResourceEntry {
    /// Create an entry, encoding `bytes`.
    pub fn new(id: u32, source: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        let source = source.into();
        Self {
            id,
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            size: bytes.len(),
            format: format_tag(&source),
            kind: EMBEDDING.to_string(),
            source,
        }
    }
}

/// Derive the format tag of a resource from its name.
pub fn format_tag(path: &Path) -> String {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpeg" => "jpg".to_string(),
        _ => ext,
    }
}

/// Source of resource bytes.
pub trait ResourceStore {
    /// Read the resource at `path`.
    ///
    /// Fails with [`Error::ResourceNotFound`] when nothing exists at `path`
    /// and [`Error::ResourceReadFailure`] when it exists but cannot be read.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Reads resources from the file system, relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsResourceStore {
    base_dir: PathBuf,
}

impl FsResourceStore {
    /// Create a store resolving relative paths against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a referenced path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl Default for FsResourceStore {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceStore for FsResourceStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let resolved = self.resolve(path);
        if !resolved.exists() {
            return Err(Error::ResourceNotFound(path.to_path_buf()));
        }
        fs::read(&resolved).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::ResourceNotFound(path.to_path_buf()),
            _ => Error::ResourceReadFailure {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}

/// In-memory resource store.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryResourceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource.
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    /// Builder form of [`MemoryResourceStore::insert`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }
}

impl ResourceStore for MemoryResourceStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::ResourceNotFound(path.to_path_buf()))
    }
}

/// Registry of resources embedded during one conversion run.
///
/// Identifiers are assigned in registration order starting at 1. Failed
/// registrations do not consume an identifier. Registering the same path
/// twice yields two entries.
pub struct ResourceRegistry {
    store: Box<dyn ResourceStore>,
    entries: Vec<ResourceEntry>,
}

impl ResourceRegistry {
    /// Create an empty registry reading from `store`.
    pub fn new(store: Box<dyn ResourceStore>) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    /// Read, encode and record the resource at `path`.
    pub fn register(&mut self, path: impl AsRef<Path>) -> Result<&ResourceEntry> {
        let path = path.as_ref();
        let bytes = self.store.read(path)?;
        let id = self.next_id();
        log::debug!(
            "Registered resource {} as id {} ({} bytes)",
            path.display(),
            id,
            bytes.len()
        );
        self.entries.push(ResourceEntry::new(id, path, &bytes));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// All registered entries in assignment order.
    pub fn manifest(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Consume the registry, returning its entries.
    pub fn into_manifest(self) -> Vec<ResourceEntry> {
        self.entries
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.entries.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}

impl fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
