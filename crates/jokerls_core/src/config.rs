//! Linter invocation configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default linter executable, resolved on `PATH`.
pub const DEFAULT_PROGRAM: &str = "joker";

/// The flag joker takes to lint a single file.
pub(crate) const LINT_FLAG: &str = "--lint";

/// File extensions recognized as Clojure source.
pub const CLOJURE_EXTENSIONS: &[&str] = &["clj", "cljs", "cljc", "edn", "joke"];

/// Configuration for the linter.
///
/// The invocation is fixed (`<program> --lint <file>`); only the executable
/// itself can be overridden, for embedding and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Linter executable to invoke.
    #[serde(default = "default_program")]
    pub program: PathBuf,
}

fn default_program() -> PathBuf {
    PathBuf::from(DEFAULT_PROGRAM)
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl LinterConfig {
    /// Creates the default configuration (`joker` on `PATH`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with a specific linter executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns whether `path` is a document this linter applies to.
    pub fn is_lintable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                CLOJURE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}
