//! BoardGameGeek XML API 2 client.
//!
//! Calls carry a fixed 10-second timeout and no retry; failures propagate to
//! the caller. Responses are memoized in a bounded LRU cache, keyed per
//! operation. In-flight calls are not coalesced.

use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cache::{CatalogCache, DEFAULT_CACHE_CAPACITY};
use super::types::{CatalogDetails, CatalogItem, ItemKind, LinkKind, VersionRecord};
use super::xml;
use super::{CatalogError, GameCatalog};

/// BoardGameGeek client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BggConfig {
    /// Base URL (default: https://boardgamegeek.com/xmlapi2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Per-operation response cache capacity (default: 1000).
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_timeout() -> u64 {
    10
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for BggConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// BoardGameGeek API client.
pub struct BggClient {
    client: Client,
    base_url: String,
    cache: CatalogCache,
}

impl BggClient {
    /// Create a new client. Fails if the cache capacity is zero or the HTTP
    /// client cannot be built.
    pub fn new(config: BggConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://boardgamegeek.com/xmlapi2".to_string());

        let capacity = NonZeroUsize::new(config.cache_capacity)
            .ok_or_else(|| CatalogError::Parse("cache_capacity must be non-zero".to_string()))?;

        Ok(Self {
            client,
            base_url,
            cache: CatalogCache::new(capacity),
        })
    }

    /// Entry counts of the response cache, for diagnostics.
    pub fn cache_stats(&self) -> (usize, usize, usize, usize) {
        self.cache.stats()
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("BGG fetch: {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Drop duplicate ids, keeping the first occurrence in response order.
fn dedup_items(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

#[async_trait]
impl GameCatalog for BggClient {
    async fn search(
        &self,
        query: &str,
        kind: Option<ItemKind>,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let key = CatalogCache::search_key(query, kind);
        if let Some(hit) = self.cache.get_search(&key) {
            debug!("BGG search cache hit: {}", key);
            return Ok(hit);
        }

        let kind_param = match kind {
            Some(k) => k.upstream_name().to_string(),
            None => format!(
                "{},{}",
                ItemKind::BaseGame.upstream_name(),
                ItemKind::Expansion.upstream_name()
            ),
        };

        let body = self
            .fetch(
                "/search",
                &[("query", query), ("type", &kind_param), ("exact", "0")],
            )
            .await?;

        let items = dedup_items(xml::decode_search(&body)?);
        self.cache.put_search(key, items.clone());
        Ok(items)
    }

    async fn get_details(&self, id: &str) -> Result<Option<CatalogDetails>, CatalogError> {
        if let Some(hit) = self.cache.get_details(id) {
            debug!("BGG details cache hit: {}", id);
            return Ok(Some(hit));
        }

        let body = self.fetch("/thing", &[("id", id), ("stats", "1")]).await?;

        let Some(details) = xml::decode_things(&body)?.into_iter().next() else {
            return Ok(None);
        };
        self.cache.put_details(id.to_string(), details.clone());
        Ok(Some(details))
    }

    async fn get_many_details(&self, ids: &[String]) -> Result<Vec<CatalogDetails>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let key = CatalogCache::batch_key(ids);
        if let Some(hit) = self.cache.get_batch(&key) {
            debug!("BGG batch cache hit: {}", key);
            return Ok(hit);
        }

        let body = self
            .fetch("/thing", &[("id", &ids.join(",")), ("stats", "1")])
            .await?;

        let details = xml::decode_things(&body)?;
        self.cache.put_batch(key, details.clone());
        Ok(details)
    }

    async fn get_expansions(&self, id: &str) -> Result<Vec<CatalogDetails>, CatalogError> {
        let Some(details) = self.get_details(id).await? else {
            return Ok(Vec::new());
        };

        let expansion_ids = details.link_ids(LinkKind::Expansion);
        if expansion_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.get_many_details(&expansion_ids).await
    }

    async fn get_versions(&self, id: &str) -> Result<Option<Vec<VersionRecord>>, CatalogError> {
        if let Some(hit) = self.cache.get_versions(id) {
            debug!("BGG versions cache hit: {}", id);
            return Ok(Some(hit));
        }

        let body = self
            .fetch("/thing", &[("id", id), ("versions", "1")])
            .await?;

        let Some(versions) = xml::decode_versions(&body)? else {
            return Ok(None);
        };
        self.cache.put_versions(id.to_string(), versions.clone());
        Ok(Some(versions))
    }
}
