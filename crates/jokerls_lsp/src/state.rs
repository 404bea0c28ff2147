//! LSP backend state management.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use tower_lsp::lsp_types::Url;

use jokerls_core::Linter;

/// Document content and version cache.
#[derive(Debug)]
pub(crate) struct DocumentData {
    pub text: String,
    pub version: i32,
}

/// Shared backend state.
pub(crate) struct BackendState {
    /// Document contents cache.
    pub documents: RwLock<HashMap<Url, DocumentData>>,
    /// Lint orchestrator; owns the per-document diagnostic store.
    pub linter: Linter,
}

impl fmt::Debug for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendState")
            .field("documents", &"<HashMap<Url, DocumentData>>")
            .field("linter", &self.linter)
            .finish()
    }
}

impl BackendState {
    /// Creates a new state around a linter.
    pub fn new(linter: Linter) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            linter,
        }
    }
}

/// Type alias for shared state.
pub(crate) type SharedState = Arc<BackendState>;
