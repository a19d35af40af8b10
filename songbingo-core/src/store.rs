//! Persisted selection store.
//!
//! Each namespace maps to one JSON file holding the ordered list of
//! selected song ids. Persistence is strictly best-effort: a missing,
//! unreadable, or corrupt record degrades to in-memory-only operation and
//! is never surfaced to the caller.

use crate::paths;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Derive the storage key for a view path and a logical key name.
///
/// Matches `{view path with '/' replaced by '-'}-{logical key}`, so state
/// never leaks between distinct views sharing a logical key name.
#[must_use]
pub fn namespace_key(view_path: &str, logical_key: &str) -> String {
    format!("{}-{logical_key}", view_path.replace('/', "-"))
}

/// File-backed store for one namespace's selected-id list.
///
/// Constructed empty; callers see the default state synchronously and the
/// persisted state once `hydrate` has run. `is_loading` reports `true`
/// until then and `false` permanently afterwards.
#[derive(Debug)]
pub struct SelectionStore {
    namespace: String,
    path: PathBuf,
    ids: Vec<String>,
    hydrated: bool,
}

impl SelectionStore {
    /// Create a store for a namespace under the default state directory
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_dir(paths::selection_state_dir(), namespace)
    }

    /// Create a store rooted at an explicit directory
    #[must_use]
    pub fn with_dir(dir: impl AsRef<Path>, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let path = dir.as_ref().join(format!("{namespace}.json"));
        Self {
            namespace,
            path,
            ids: Vec::new(),
            hydrated: false,
        }
    }

    /// Read the persisted record, if any. Absence and corruption both
    /// leave the default empty list in place. Idempotent.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(ids) => {
                    info!("Loaded {} selected id(s) from {:?}", ids.len(), self.path);
                    self.ids = ids;
                }
                Err(e) => {
                    warn!("Failed to parse selection record {:?}: {}", self.path, e);
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!("Failed to read selection record {:?}: {}", self.path, e);
            }
        }
    }

    /// Whether the initial hydration has not yet happened
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !self.hydrated
    }

    /// The current selected-id list, in selection order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The namespace this store is scoped to
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Overwrite the selected-id list and persist it synchronously.
    /// A persistence failure is logged and otherwise ignored.
    pub fn set(&mut self, new_ids: Vec<String>) {
        self.ids = new_ids;
        self.persist();
    }

    /// Reset to the default empty list and remove the persisted record
    pub fn clear(&mut self) {
        self.ids.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => info!("Removed selection record {:?}", self.path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove selection record {:?}: {}", self.path, e),
        }
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create state directory {:?}: {}", parent, e);
                return;
            }
        }

        match serde_json::to_string(&self.ids) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    warn!("Failed to write selection record {:?}: {}", self.path, e);
                }
            }
            Err(e) => {
                warn!("Failed to serialize selection record: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_namespace_key_derivation() {
        assert_eq!(
            namespace_key("/songs", "selected-songs"),
            "-songs-selected-songs"
        );
        assert_eq!(namespace_key("/a/b", "key"), "-a-b-key");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = SelectionStore::with_dir(dir.path(), "-songs-selected-songs");
        store.hydrate();
        store.set(ids(&["a", "b"]));

        let mut reloaded = SelectionStore::with_dir(dir.path(), "-songs-selected-songs");
        reloaded.hydrate();
        assert_eq!(reloaded.ids(), ["a", "b"]);
    }

    #[test]
    fn test_starts_loading_until_hydrated() {
        let dir = tempdir().unwrap();
        let mut store = SelectionStore::with_dir(dir.path(), "ns");
        assert!(store.is_loading());
        assert!(store.ids().is_empty());

        store.hydrate();
        assert!(!store.is_loading());

        // Hydrating again stays settled
        store.hydrate();
        assert!(!store.is_loading());
    }

    #[test]
    fn test_missing_record_hydrates_default() {
        let dir = tempdir().unwrap();
        let mut store = SelectionStore::with_dir(dir.path(), "ns");
        store.hydrate();
        assert!(store.ids().is_empty());
    }

    #[test]
    fn test_corrupt_record_hydrates_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ns.json"), "{not valid json").unwrap();

        let mut store = SelectionStore::with_dir(dir.path(), "ns");
        store.hydrate();
        assert!(store.ids().is_empty());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = tempdir().unwrap();
        let mut store = SelectionStore::with_dir(dir.path(), "ns");
        store.hydrate();
        store.set(ids(&["a", "b"]));
        assert!(dir.path().join("ns.json").exists());

        store.clear();
        assert!(store.ids().is_empty());
        assert!(!dir.path().join("ns.json").exists());
    }

    #[test]
    fn test_clear_without_record_is_silent() {
        let dir = tempdir().unwrap();
        let mut store = SelectionStore::with_dir(dir.path(), "ns");
        store.hydrate();
        store.clear();
        assert!(store.ids().is_empty());
    }

    #[test]
    fn test_distinct_namespaces_do_not_leak() {
        let dir = tempdir().unwrap();
        let mut first = SelectionStore::with_dir(dir.path(), "-songs-selected-songs");
        first.hydrate();
        first.set(ids(&["a"]));

        let mut other = SelectionStore::with_dir(dir.path(), "-setlist-selected-songs");
        other.hydrate();
        assert!(other.ids().is_empty());
    }
}
