//! # Redis
//!
//! Document store for places.
//!
//! ## Requirements
//!
//! - Whole collection is returned on every listing, no pagination
//! - Loosely shaped documents, older entries may lack defaulted fields
//! - Small dataset, a few thousand places at most
//!
//! ## Implementation
//!
//! - Redis hash: 1 big key, then id-document pairs
//! - Each value is the JSON encoding of a [`Place`]
//! - Filtering and ordering happen in the server after `HVALS`
//! - Delete reads and removes in one `MULTI` block so two deletes can't both return the document
use std::time::Duration;

use places::Place;
use redis::{
    AsyncCommands, Client, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    #[error("Document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, RedisError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;

    client.get_connection_manager_with_config(config).await
}

/// Where the raw documents live. The typed [`Store`] API sits on top and
/// never looks at the variant.
#[derive(Clone)]
enum Backend {
    Redis {
        connection: ConnectionManager,
        key: String,
    },
    #[cfg(test)]
    Memory(memory::MemoryDocuments),
}

impl Backend {
    async fn values(&self) -> Result<Vec<String>, StoreError> {
        match self {
            Backend::Redis { connection, key } => {
                let mut connection = connection.clone();

                Ok(connection.hvals(key).await?)
            }
            #[cfg(test)]
            Backend::Memory(documents) => Ok(documents.values().await),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<String>, StoreError> {
        match self {
            Backend::Redis { connection, key } => {
                let mut connection = connection.clone();

                Ok(connection.hget(key, id).await?)
            }
            #[cfg(test)]
            Backend::Memory(documents) => Ok(documents.get(id).await),
        }
    }

    async fn set(&self, id: &str, document: String) -> Result<(), StoreError> {
        match self {
            Backend::Redis { connection, key } => {
                let mut connection = connection.clone();
                let _: () = connection.hset(key, id, document).await?;
            }
            #[cfg(test)]
            Backend::Memory(documents) => documents.set(id, document).await,
        }

        Ok(())
    }

    async fn take(&self, id: &str) -> Result<Option<String>, StoreError> {
        match self {
            Backend::Redis { connection, key } => {
                let mut connection = connection.clone();
                let (raw, _removed): (Option<String>, i64) = redis::pipe()
                    .atomic()
                    .hget(key, id)
                    .hdel(key, id)
                    .query_async(&mut connection)
                    .await?;

                Ok(raw)
            }
            #[cfg(test)]
            Backend::Memory(documents) => Ok(documents.take(id).await),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    backend: Backend,
}

impl Store {
    pub fn redis(connection: ConnectionManager, key: impl Into<String>) -> Self {
        Self {
            backend: Backend::Redis {
                connection,
                key: key.into(),
            },
        }
    }

    /// Raw JSON documents, in no particular order.
    pub async fn documents(&self) -> Result<Vec<String>, StoreError> {
        self.backend.values().await
    }

    /// Every decodable place. Documents that no longer match the record shape
    /// are logged and skipped.
    pub async fn all(&self) -> Result<Vec<Place>, StoreError> {
        let places = self
            .documents()
            .await?
            .iter()
            .filter_map(|raw| match serde_json::from_str::<Place>(raw) {
                Ok(place) => Some(place),
                Err(e) => {
                    warn!("Skipping undecodable place document: {e}");
                    None
                }
            })
            .collect();

        Ok(places)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Place>, StoreError> {
        decode(self.backend.get(id).await?)
    }

    pub async fn insert(&self, place: &Place) -> Result<(), StoreError> {
        let document = serde_json::to_string(place)?;

        self.backend.set(&place.id, document).await
    }

    /// Removes the place and returns what was stored, if anything.
    pub async fn remove(&self, id: &str) -> Result<Option<Place>, StoreError> {
        decode(self.backend.take(id).await?)
    }
}

fn decode(raw: Option<String>) -> Result<Option<Place>, StoreError> {
    raw.map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(StoreError::from)
}
