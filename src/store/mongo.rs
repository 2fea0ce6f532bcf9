use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use super::{STATUS_CHECKS_COLLECTION, StatusCollection};

/// Bound on the one-off startup connection attempt.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("connection attempt did not finish within {0:?}")]
    TimedOut(Duration),
}

#[derive(Clone)]
pub struct MongoStatusCollection {
    client: Client,
    collection: Collection<Document>,
}

impl MongoStatusCollection {
    /// Builds a client for `mongo_url` and pings `db_name` once, giving up
    /// after [`CONNECT_TIMEOUT`] (SRV resolution included).
    pub async fn connect(mongo_url: &str, db_name: &str) -> Result<Self, ConnectError> {
        within(CONNECT_TIMEOUT, Self::establish(mongo_url, db_name)).await
    }

    async fn establish(mongo_url: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(mongo_url).await?;
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);
        options.connect_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(db_name);
        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            collection: database.collection(STATUS_CHECKS_COLLECTION),
            client,
        })
    }
}

async fn within<T, F>(limit: Duration, attempt: F) -> Result<T, ConnectError>
where
    F: Future<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(limit, attempt).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ConnectError::TimedOut(limit)),
    }
}

#[async_trait]
impl StatusCollection for MongoStatusCollection {
    async fn insert(&self, document: Document) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    async fn find_all(&self, limit: i64) -> Result<Vec<Document>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .limit(limit)
            .await?;
        cursor.try_collect().await
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}
