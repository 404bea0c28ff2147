//! Debouncing of change notifications.

use std::time::Duration;

use tower_lsp::lsp_types::Url;
use tracing::error;

use crate::state::SharedState;

/// How long a document must stay quiet before a changed version is linted.
pub const CHANGE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Schedules validation of one document version after [`CHANGE_DEBOUNCE`].
///
/// When the delay expires, the callback fires only if `version` is still the
/// latest one in the document cache. A keystroke burst therefore spawns one
/// linter process for its final state, not one per change.
pub fn spawn_debounced_validation<F>(
    state: SharedState,
    uri: Url,
    text: String,
    version: i32,
    validate_fn: F,
) where
    F: FnOnce(Url, String, Option<i32>) + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(CHANGE_DEBOUNCE).await;

        let current = match state.documents.read() {
            Ok(docs) => docs.get(&uri).map(|doc| doc.version),
            Err(e) => {
                error!("documents lock poisoned: {e}");
                return;
            }
        };

        // None: the document was closed while we slept.
        if current == Some(version) {
            validate_fn(uri, text, Some(version));
        }
    });
}
