use dashmap::DashMap;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::capabilities;
use crate::document::Document;
use crate::handlers;

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    debug: bool,
}

impl Backend {
    pub fn new(client: Client, debug: bool) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            debug,
        }
    }

    async fn log_debug(&self, message: &str) {
        debug!("{}", message);
        if self.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        self.log_debug("Initializing varname LSP server").await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("server initialized");
        self.client
            .log_message(MessageType::INFO, "varname LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document opened: {}", uri)).await;
        self.documents
            .insert(uri, Document::new(params.text_document.text));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document changed: {}", uri)).await;

        if let Some(mut doc) = self.documents.get_mut(&uri) {
            // Full sync: each change carries the entire text
            for change in params.content_changes {
                doc.update_text(change.text);
            }
        } else {
            warn!(%uri, "change for unknown document");
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        // Build items before awaiting so the map guard is not held across it
        let items = self
            .documents
            .get(uri)
            .map(|doc| handlers::completion::get_completions(&doc, position));

        match items {
            Some(items) => {
                debug!(count = items.len(), "completion items");
                Ok(Some(CompletionResponse::Array(items)))
            }
            None => {
                warn!(%uri, "completion for unknown document");
                Ok(None)
            }
        }
    }

    async fn completion_resolve(&self, item: CompletionItem) -> Result<CompletionItem> {
        self.log_debug(&format!("Resolving completion item {}", item.label))
            .await;

        match handlers::completion::resolve_completion(item.clone()) {
            Ok(resolved) => Ok(resolved),
            Err(e) => {
                warn!(label = %item.label, "cannot resolve completion item: {}", e);
                Ok(item)
            }
        }
    }
}
