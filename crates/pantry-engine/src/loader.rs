//! Feed loading with local cache fallback.
//!
//! Data loading fails soft: when the feed cannot be fetched, the last
//! cached directory (possibly empty) is used instead and the failure is
//! reported out-of-band for diagnostics. Rendering never sees an error.

use chrono::Utc;
use pantry_api_rs::client::FeedClient;
use thiserror::Error;

use crate::store::{DirectoryStore, StoreError};
use crate::Directory;

/// Errors that can occur while loading the directory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The feed could not be fetched or decoded.
    #[error("feed error: {0}")]
    Feed(#[from] pantry_api_rs::error::Error),

    /// The local cache could not be read or written.
    #[error("cache error: {0}")]
    Store(#[from] StoreError),
}

/// Coordinates the feed client and the local cache.
#[derive(Debug, Clone)]
pub struct Loader {
    client: FeedClient,
    store: DirectoryStore,
}

impl Loader {
    /// Creates a loader from a client and a store.
    pub fn new(client: FeedClient, store: DirectoryStore) -> Self {
        Self { client, store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    /// Fetches the feed, stamps the fetch time, and persists the result.
    ///
    /// # Errors
    ///
    /// Returns the fetch or store failure; the previous cache is left
    /// untouched on failure.
    pub async fn refresh(&self) -> Result<Directory, LoadError> {
        let locations = self.client.fetch_locations().await?;
        let directory = Directory {
            fetched_at: Some(Utc::now()),
            locations,
        };
        self.store.save(&directory)?;
        Ok(directory)
    }

    /// Returns the cached directory, or an empty one when there is no
    /// usable cache.
    pub fn cached(&self) -> Directory {
        self.store.load().unwrap_or_default()
    }

    /// Fetches the feed, falling back to the cached directory on failure.
    ///
    /// Always yields a directory; the second element carries the failure
    /// (if any) for diagnostic logging. A fetch that succeeds but cannot
    /// be cached still yields the fresh data.
    pub async fn load_or_cached(&self) -> (Directory, Option<LoadError>) {
        match self.client.fetch_locations().await {
            Ok(locations) => {
                let directory = Directory {
                    fetched_at: Some(Utc::now()),
                    locations,
                };
                let warning = self.store.save(&directory).err().map(LoadError::Store);
                (directory, warning)
            }
            Err(err) => (self.cached(), Some(LoadError::Feed(err))),
        }
    }
}
