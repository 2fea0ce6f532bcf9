use async_trait::async_trait;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::config::Config;

/// MongoDB implementation of [`StatusCollection`].
pub mod mongo;

pub use mongo::MongoStatusCollection;

/// Collection holding status check documents.
pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";

/// Upper bound on documents returned by a single listing.
pub const LIST_LIMIT: i64 = 1000;

/// Whether the document store was reachable when the process started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Connected,
    Disconnected,
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreStatus::Connected => f.write_str("connected"),
            StoreStatus::Disconnected => f.write_str("disconnected"),
        }
    }
}

/// Document-level access to the status check collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCollection: Send + Sync {
    async fn insert(&self, document: Document) -> Result<(), mongodb::error::Error>;

    /// Returns up to `limit` documents in store order, without `_id`.
    async fn find_all(&self, limit: i64) -> Result<Vec<Document>, mongodb::error::Error>;

    async fn close(&self);
}

/// # Store Connection
///
/// The store handle as established at startup. Service operations branch on
/// this value instead of catching connection faults ad hoc.
#[derive(Clone)]
pub enum StoreConnection {
    Connected(Arc<dyn StatusCollection>),
    Disconnected,
}

impl StoreConnection {
    /// Makes the single startup connection attempt.
    ///
    /// Never fails: any error is logged and yields `Disconnected`. No
    /// reconnection is attempted later.
    pub async fn connect(config: &Config) -> Self {
        match MongoStatusCollection::connect(&config.mongo_url, &config.db_name).await {
            Ok(collection) => {
                info!(db = %config.db_name, "connected to MongoDB");
                Self::Connected(Arc::new(collection))
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "MongoDB connection failed, status checks will not be persisted"
                );
                Self::Disconnected
            }
        }
    }

    pub fn status(&self) -> StoreStatus {
        match self {
            Self::Connected(_) => StoreStatus::Connected,
            Self::Disconnected => StoreStatus::Disconnected,
        }
    }

    /// Releases the store handle at process stop.
    pub async fn close(&self) {
        if let Self::Connected(collection) = self {
            collection.close().await;
            info!("MongoDB connection closed");
        }
    }
}

impl fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreConnection").field(&self.status()).finish()
    }
}
