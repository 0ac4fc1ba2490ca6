//! Project registry and its on-disk store
//!
//! The registry is a name -> directory map held in memory for the length of
//! one invocation. The store is a single JSON object in the user's home
//! directory; mutating commands rewrite the whole file. A missing file is an
//! empty registry, not an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hop_core::Paths;

use crate::error::HopError;

/// In-memory name -> path map, iterated in name order
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    projects: BTreeMap<String, PathBuf>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.projects.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, path: PathBuf) {
        self.projects.insert(name.into(), path);
    }

    pub fn remove(&mut self, name: &str) -> Option<PathBuf> {
        self.projects.remove(name)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Entries in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.projects
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}

/// On-disk JSON store backing the registry
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store at the fixed location in the user's home directory
    pub fn open() -> Self {
        Self {
            path: Paths::new().store,
        }
    }

    /// Store backed by an explicit file, for tests
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the registry from disk; a missing file yields an empty registry
    pub fn load(&self) -> Result<Registry, HopError> {
        if !self.path.exists() {
            return Ok(Registry::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|err| {
            HopError::Store(format!(
                "Failed to read project store {}: {}",
                self.path.display(),
                err
            ))
        })?;

        let registry: Registry = serde_json::from_str(&content).map_err(|err| {
            HopError::Store(format!(
                "Failed to parse project store {}: {}",
                self.path.display(),
                err
            ))
        })?;

        tracing::debug!(path = %self.path.display(), projects = registry.len(), "loaded project store");
        Ok(registry)
    }

    /// Rewrite the whole store. The content goes to a sibling file first and
    /// is renamed into place, so an interrupted write cannot truncate the
    /// store.
    pub fn save(&self, registry: &Registry) -> Result<(), HopError> {
        let content = serde_json::to_string_pretty(registry).map_err(|err| {
            HopError::Store(format!("Failed to serialize project store: {}", err))
        })?;

        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, content).map_err(|err| {
            HopError::Store(format!(
                "Failed to write project store {}: {}",
                staged.display(),
                err
            ))
        })?;
        fs::rename(&staged, &self.path).map_err(|err| {
            HopError::Store(format!(
                "Failed to write project store {}: {}",
                self.path.display(),
                err
            ))
        })?;

        tracing::debug!(path = %self.path.display(), projects = registry.len(), "saved project store");
        Ok(())
    }

    /// Delete the backing file entirely
    pub fn wipe(&self) -> Result<(), HopError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|err| {
                HopError::Store(format!(
                    "Failed to remove project store {}: {}",
                    self.path.display(),
                    err
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_registry() {
        let dir = tempdir().unwrap();
        let store = Store::at(dir.path().join("store.json"));
        let registry = store.load().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let store = Store::at(dir.path().join("store.json"));

        let mut registry = Registry::new();
        registry.set("zeta", PathBuf::from("/srv/zeta"));
        registry.set("alpha", PathBuf::from("/srv/alpha"));
        store.save(&registry).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, registry);

        // Sorted iteration regardless of insertion order
        let names: Vec<&str> = loaded.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let store = Store::at(dir.path().join("store.json"));

        let mut registry = Registry::new();
        registry.set("one", PathBuf::from("/one"));
        registry.set("two", PathBuf::from("/two"));
        store.save(&registry).unwrap();

        registry.remove("one");
        store.save(&registry).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("one").is_none());
        assert_eq!(loaded.get("two").unwrap(), Path::new("/two"));
    }

    #[test]
    fn test_unparsable_store_is_an_io_class_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = Store::at(&path).load().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_wipe_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = Store::at(&path);

        let mut registry = Registry::new();
        registry.set("one", PathBuf::from("/one"));
        store.save(&registry).unwrap();
        assert!(path.exists());

        store.wipe().unwrap();
        assert!(!path.exists());

        // Wiping an absent store is fine
        store.wipe().unwrap();
    }
}
