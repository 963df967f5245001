//! External game-catalog integration (BoardGameGeek).
//!
//! Translates marketplace queries into calls against the BoardGameGeek XML
//! API, normalizes the response shapes once at the decode boundary, and
//! memoizes results in a bounded LRU cache.

mod bgg;
mod cache;
mod types;
mod xml;

pub use bgg::{BggClient, BggConfig};
pub use cache::{CatalogCache, DEFAULT_CACHE_CAPACITY};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the external catalog. All variants are upstream failures and
/// map to a generic 500 at the route layer; "not found" is not an error but
/// an absent result.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure or timeout.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status.
    #[error("upstream returned status {status}")]
    ApiError { status: u16 },

    /// Upstream body could not be decoded.
    #[error("failed to parse upstream response: {0}")]
    Parse(String),
}

/// Trait for game catalog clients.
///
/// Implemented by `BggClient` and by the test mock, so request handlers can
/// take either.
#[async_trait]
pub trait GameCatalog: Send + Sync {
    /// Search by free-text query. `kind` narrows to base games or expansions;
    /// `None` requests both. Results are deduplicated by id, keeping the
    /// first occurrence in response order. The caller guarantees a non-empty
    /// query.
    async fn search(
        &self,
        query: &str,
        kind: Option<ItemKind>,
    ) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Fetch one item with statistics. `None` when the upstream reports no
    /// matching item.
    async fn get_details(&self, id: &str) -> Result<Option<CatalogDetails>, CatalogError>;

    /// Fetch several items in one upstream call. An empty id list returns
    /// an empty result without any network call.
    async fn get_many_details(&self, ids: &[String]) -> Result<Vec<CatalogDetails>, CatalogError>;

    /// Expansions of a base item, resolved through its expansion links.
    /// Empty when the item is absent or has no such links.
    async fn get_expansions(&self, id: &str) -> Result<Vec<CatalogDetails>, CatalogError>;

    /// Version metadata for an item. `None` when the upstream reports none.
    async fn get_versions(&self, id: &str) -> Result<Option<Vec<VersionRecord>>, CatalogError>;
}
