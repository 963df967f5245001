//! Mock game catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{
    CatalogDetails, CatalogError, CatalogItem, GameCatalog, ItemKind, LinkKind, VersionRecord,
};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone)]
pub enum RecordedQuery {
    Search { query: String, kind: Option<ItemKind> },
    GetDetails { id: String },
    GetManyDetails { ids: Vec<String> },
    GetExpansions { id: String },
    GetVersions { id: String },
}

/// Mock implementation of the GameCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Seed search results, details and versions
/// - Track queries for assertions
/// - Simulate upstream failures
pub struct MockGameCatalog {
    /// Search results keyed by lowercased query.
    search_results: Arc<RwLock<HashMap<String, Vec<CatalogItem>>>>,
    /// Details by id.
    details: Arc<RwLock<HashMap<String, CatalogDetails>>>,
    /// Versions by id.
    versions: Arc<RwLock<HashMap<String, Vec<VersionRecord>>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next operation fails with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockGameCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGameCatalog {
    pub fn new() -> Self {
        Self {
            search_results: Arc::new(RwLock::new(HashMap::new())),
            details: Arc::new(RwLock::new(HashMap::new())),
            versions: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Seed results for a search query (matched case-insensitively).
    pub async fn add_search_results(&self, query: &str, items: Vec<CatalogItem>) {
        self.search_results
            .write()
            .await
            .insert(query.to_lowercase(), items);
    }

    /// Seed a details record, retrievable by its id.
    pub async fn add_details(&self, details: CatalogDetails) {
        self.details
            .write()
            .await
            .insert(details.id.clone(), details);
    }

    /// Seed versions for an id.
    pub async fn add_versions(&self, id: &str, versions: Vec<VersionRecord>) {
        self.versions.write().await.insert(id.to_string(), versions);
    }

    /// Make the next operation fail with the given error.
    pub async fn fail_next(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// All recorded queries so far.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    async fn record(&self, query: RecordedQuery) -> Result<(), CatalogError> {
        self.queries.write().await.push(query);
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        Ok(())
    }
}

#[async_trait]
impl GameCatalog for MockGameCatalog {
    async fn search(
        &self,
        query: &str,
        kind: Option<ItemKind>,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        self.record(RecordedQuery::Search {
            query: query.to_string(),
            kind,
        })
        .await?;

        let results = self
            .search_results
            .read()
            .await
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default();

        Ok(match kind {
            Some(k) => results.into_iter().filter(|i| i.kind == k).collect(),
            None => results,
        })
    }

    async fn get_details(&self, id: &str) -> Result<Option<CatalogDetails>, CatalogError> {
        self.record(RecordedQuery::GetDetails { id: id.to_string() })
            .await?;
        Ok(self.details.read().await.get(id).cloned())
    }

    async fn get_many_details(&self, ids: &[String]) -> Result<Vec<CatalogDetails>, CatalogError> {
        self.record(RecordedQuery::GetManyDetails { ids: ids.to_vec() })
            .await?;
        let details = self.details.read().await;
        Ok(ids.iter().filter_map(|id| details.get(id).cloned()).collect())
    }

    async fn get_expansions(&self, id: &str) -> Result<Vec<CatalogDetails>, CatalogError> {
        self.record(RecordedQuery::GetExpansions { id: id.to_string() })
            .await?;

        let details = self.details.read().await;
        let Some(base) = details.get(id) else {
            return Ok(Vec::new());
        };
        Ok(base
            .link_ids(LinkKind::Expansion)
            .iter()
            .filter_map(|expansion_id| details.get(expansion_id).cloned())
            .collect())
    }

    async fn get_versions(&self, id: &str) -> Result<Option<Vec<VersionRecord>>, CatalogError> {
        self.record(RecordedQuery::GetVersions { id: id.to_string() })
            .await?;
        Ok(self.versions.read().await.get(id).cloned())
    }
}
