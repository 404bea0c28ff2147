//! # jokerls_lsp
//!
//! Language Server Protocol implementation for jokerls.
//!
//! Maps editor lifecycle events (open, change, save, close) onto lint runs
//! of the external `joker` binary and publishes the resulting diagnostics.

mod conversion;
mod debounce;
mod state;

use std::sync::Arc;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, error, info};

use jokerls_core::{Linter, LinterConfig, LinterError};

use crate::conversion::to_lsp_diagnostic;
use crate::state::{BackendState, DocumentData, SharedState};

/// The LSP backend for jokerls.
#[derive(Clone)]
pub struct Backend {
    /// LSP client for publishing diagnostics and notifications.
    client: Client,
    /// Shared state.
    state: SharedState,
}

impl Backend {
    /// Creates a new backend with the default linter configuration
    /// (`joker` on `PATH`).
    pub fn new(client: Client) -> Self {
        Self::with_config(client, LinterConfig::new())
    }

    /// Creates a new backend with a specific linter configuration.
    pub fn with_config(client: Client, config: LinterConfig) -> Self {
        Self {
            client,
            state: Arc::new(BackendState::new(Linter::new(config))),
        }
    }

    /// Lints a document and publishes the resulting diagnostics.
    ///
    /// Publishing an empty set clears the client's markers, mirroring the
    /// store's remove-on-empty commit. A launch failure is surfaced to the
    /// user and mutates nothing.
    async fn validate_document(&self, uri: &Url, text: &str, version: Option<i32>) {
        debug!("validating document: {uri}");

        let Ok(path) = uri.to_file_path() else {
            debug!("skipping validation for non-file URI: {uri}");
            return;
        };

        if !self.state.linter.config().is_lintable(&path) {
            debug!("not a Clojure document, skipping: {uri}");
            return;
        }

        let diagnostics = match self.state.linter.lint_document(&path, text).await {
            Ok(diagnostics) => diagnostics,
            Err(e @ LinterError::Launch { .. }) => {
                error!("lint run failed: {e}");
                self.client
                    .show_message(MessageType::ERROR, format!("joker: {e}"))
                    .await;
                return;
            }
            Err(e) => {
                error!("lint run failed: {e}");
                return;
            }
        };

        let lsp_diagnostics: Vec<Diagnostic> =
            diagnostics.iter().map(to_lsp_diagnostic).collect();

        self.client
            .publish_diagnostics(uri.clone(), lsp_diagnostics, version)
            .await;
    }

    fn store_document(&self, uri: &Url, text: String, version: i32) {
        let mut docs = match self.state.documents.write() {
            Ok(guard) => guard,
            Err(e) => {
                error!("documents lock poisoned: {e}");
                return;
            }
        };
        docs.insert(uri.clone(), DocumentData { text, version });
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        info!("jokerls LSP server initializing...");

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(true),
                        })),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "jokerls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "jokerls LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("jokerls LSP server shutting down...");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!("document opened: {}", params.text_document.uri);

        self.store_document(
            &params.text_document.uri,
            params.text_document.text.clone(),
            params.text_document.version,
        );

        self.validate_document(
            &params.text_document.uri,
            &params.text_document.text,
            Some(params.text_document.version),
        )
        .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        debug!("document changed: {}", params.text_document.uri);

        // FULL sync: the first change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().next() {
            let uri = params.text_document.uri;
            let version = params.text_document.version;
            let text = change.text;

            self.store_document(&uri, text.clone(), version);

            let backend = self.clone();
            debounce::spawn_debounced_validation(
                self.state.clone(),
                uri,
                text,
                version,
                move |uri, text, version| {
                    tokio::spawn(async move {
                        backend.validate_document(&uri, &text, version).await;
                    });
                },
            );
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        debug!("document saved: {}", params.text_document.uri);

        if let Some(text) = params.text {
            self.validate_document(&params.text_document.uri, &text, None)
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("document closed: {}", params.text_document.uri);

        {
            let mut docs = match self.state.documents.write() {
                Ok(guard) => guard,
                Err(e) => {
                    error!("documents lock poisoned: {e}");
                    return;
                }
            };
            docs.remove(&params.text_document.uri);
        }

        if let Ok(path) = params.text_document.uri.to_file_path() {
            self.state.linter.store().clear(&path);
        }

        self.client
            .publish_diagnostics(params.text_document.uri, vec![], None)
            .await;
    }
}

/// Starts the LSP server on stdio.
///
/// Does not return unless the server shuts down.
pub async fn run() {
    info!("jokerls LSP server starting...");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
