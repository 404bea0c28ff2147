//! Per-document diagnostic storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::error;

use crate::Diagnostic;

/// Mapping from document identity to its current diagnostic set.
///
/// A commit replaces the document's entire set; repeated runs are idempotent,
/// not additive. A document with zero diagnostics has its entry removed,
/// never left as an empty set. Replacement is atomic per key, so concurrent
/// runs for the same document degrade to last-write-wins.
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    entries: RwLock<HashMap<PathBuf, Vec<Diagnostic>>>,
}

impl DiagnosticStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the result of one completed lint run for `path`.
    ///
    /// Replaces the document's set, or removes the entry entirely when
    /// `diagnostics` is empty.
    pub fn commit(&self, path: &Path, diagnostics: Vec<Diagnostic>) {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(e) => {
                error!("diagnostic store lock poisoned: {e}");
                return;
            }
        };

        if diagnostics.is_empty() {
            entries.remove(path);
        } else {
            entries.insert(path.to_path_buf(), diagnostics);
        }
    }

    /// Removes the entry for `path`, if any.
    pub fn clear(&self, path: &Path) {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(e) => {
                error!("diagnostic store lock poisoned: {e}");
                return;
            }
        };
        entries.remove(path);
    }

    /// Returns a copy of the current set for `path`, if any.
    pub fn get(&self, path: &Path) -> Option<Vec<Diagnostic>> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(e) => {
                error!("diagnostic store lock poisoned: {e}");
                return None;
            }
        };
        entries.get(path).cloned()
    }

    /// Number of documents with recorded diagnostics.
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(guard) => guard.len(),
            Err(e) => {
                error!("diagnostic store lock poisoned: {e}");
                0
            }
        }
    }

    /// Returns whether no document has recorded diagnostics.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
