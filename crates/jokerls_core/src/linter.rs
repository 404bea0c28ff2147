//! Lint orchestration.
//!
//! One external run per document event, one store commit per completed run:
//! Idle → Spawned → Collecting → Exited → {Committed | Cleared}. A failed
//! spawn ends the run with an error and no store mutation.

use std::path::Path;

use tracing::debug;

use crate::runner::run_linter;
use crate::{Diagnostic, DiagnosticStore, LinterConfig, LinterError};

/// Orchestrates lint runs and owns the per-document diagnostic store.
///
/// Runs for different documents are independent; each owns its own output
/// buffer and commits only to its own document's slot. Nothing persists
/// across runs except the store itself.
#[derive(Debug, Default)]
pub struct Linter {
    config: LinterConfig,
    store: DiagnosticStore,
}

impl Linter {
    /// Creates a linter with the given configuration and an empty store.
    pub fn new(config: LinterConfig) -> Self {
        Self {
            config,
            store: DiagnosticStore::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// The diagnostic store this linter commits to.
    pub fn store(&self) -> &DiagnosticStore {
        &self.store
    }

    /// Lints `path` and commits the result to the store.
    ///
    /// `text` is the document's current content, used to bounds-check the
    /// positions the linter reports. Returns the committed set; an empty
    /// result means the run cleared the document's entry. A launch failure
    /// surfaces as an error and leaves the store untouched.
    pub async fn lint_document(
        &self,
        path: &Path,
        text: &str,
    ) -> Result<Vec<Diagnostic>, LinterError> {
        let messages = run_linter(&self.config, path).await?;

        let diagnostics: Vec<Diagnostic> = messages
            .iter()
            .filter_map(|message| Diagnostic::from_message(message, text))
            .collect();

        debug!(
            "{}: committing {} diagnostic(s)",
            path.display(),
            diagnostics.len()
        );
        self.store.commit(path, diagnostics.clone());

        Ok(diagnostics)
    }
}
