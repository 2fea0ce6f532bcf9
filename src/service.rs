use std::future::Future;
use tracing::warn;

use crate::models::{DocumentError, HealthResponse, RootMessage, StatusCheck};
use crate::store::{LIST_LIMIT, StoreConnection};

/// # Status Service
///
/// Owns the store connection established at startup and implements the four
/// API operations on top of it. Shared read-only across request handlers.
///
/// The store is fail-soft: when it is disconnected, or a call to it fails,
/// creation skips persistence and listing returns nothing.
#[derive(Debug, Clone)]
pub struct StatusService {
    store: StoreConnection,
}

impl StatusService {
    pub fn new(store: StoreConnection) -> Self {
        Self { store }
    }

    pub fn root(&self) -> RootMessage {
        RootMessage::hello()
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse::healthy(self.store.status())
    }

    pub async fn create_status_check(&self, client_name: String) -> StatusCheck {
        let check = StatusCheck::new(client_name);

        match &self.store {
            StoreConnection::Connected(collection) => {
                if let Err(err) = collection.insert(check.to_document()).await {
                    warn!(error = %err, id = %check.id, "failed to persist status check");
                }
            }
            StoreConnection::Disconnected => {}
        }

        check
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, DocumentError> {
        let collection = match &self.store {
            StoreConnection::Connected(collection) => collection,
            StoreConnection::Disconnected => return Ok(Vec::new()),
        };

        let documents = match collection.find_all(LIST_LIMIT).await {
            Ok(documents) => documents,
            Err(err) => {
                warn!(error = %err, "failed to list status checks");
                return Ok(Vec::new());
            }
        };

        documents.iter().map(StatusCheck::from_document).collect()
    }

    /// Releases the store connection. Called once when the server stops.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }

    /// Drives `server` to completion, then releases the store whether the
    /// server stopped cleanly or failed.
    pub async fn run_until_stopped<F>(&self, server: F) -> std::io::Result<()>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        let result = server.await;
        self.shutdown().await;
        result
    }
}
