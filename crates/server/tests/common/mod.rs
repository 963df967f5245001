//! Common test utilities for in-process API testing with mocks.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use secondturn_core::{
    testing::MockGameCatalog, BggConfig, Config, GameCatalog, LocalIndex, LocalIndexConfig,
    ServerConfig,
};
use secondturn_server::api::create_router;
use secondturn_server::state::AppState;

/// Re-export fixtures for test convenience
pub use secondturn_core::testing::fixtures;

/// Default rank snapshot used by most tests.
pub const DEFAULT_SNAPSHOT: &str = "\
id,name,yearpublished,rank,bayesaverage,is_expansion
266192,Wingspan,2019,23,7.9,0
290448,Wingspan: European Expansion,2019,0,7.2,1
174430,Gloomhaven,2017,3,8.3,0
";

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// In-process server with a mock catalog and a tempfile rank snapshot.
pub struct TestFixture {
    pub router: Router,
    /// Mock catalog - seed search results, details and versions.
    pub catalog: Arc<MockGameCatalog>,
    /// Keeps the snapshot file alive for the fixture's lifetime.
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub async fn new() -> Self {
        Self::with_snapshot(DEFAULT_SNAPSHOT).await
    }

    /// Build a fixture whose local index is loaded from the given CSV text.
    pub async fn with_snapshot(snapshot: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let csv_path = temp_dir.path().join("boardgames_ranks.csv");
        std::fs::write(&csv_path, snapshot).expect("Failed to write snapshot");

        let config = Config {
            server: ServerConfig::default(),
            catalog: BggConfig::default(),
            local_index: LocalIndexConfig {
                csv_path: csv_path.clone(),
            },
        };

        let catalog = Arc::new(MockGameCatalog::new());
        let catalog_dyn: Arc<dyn GameCatalog> = Arc::clone(&catalog) as Arc<dyn GameCatalog>;
        let local_index = Arc::new(LocalIndex::new(config.local_index.clone()));

        let state = Arc::new(AppState::new(config, catalog_dyn, local_index));
        let router = create_router(state);

        Self {
            router,
            catalog,
            temp_dir,
        }
    }

    /// Build a fixture whose local index points at a missing snapshot file,
    /// so every local search reports the sticky load failure.
    pub async fn with_broken_index() -> Self {
        let fixture = Self::new().await;
        let missing = fixture.temp_dir.path().join("does_not_exist.csv");

        let config = Config {
            server: ServerConfig::default(),
            catalog: BggConfig::default(),
            local_index: LocalIndexConfig {
                csv_path: missing.clone(),
            },
        };
        let catalog = Arc::new(MockGameCatalog::new());
        let catalog_dyn: Arc<dyn GameCatalog> = Arc::clone(&catalog) as Arc<dyn GameCatalog>;
        let local_index = Arc::new(LocalIndex::new(LocalIndexConfig { csv_path: missing }));
        let state = Arc::new(AppState::new(config, catalog_dyn, local_index));

        Self {
            router: create_router(state),
            catalog,
            temp_dir: fixture.temp_dir,
        }
    }

    /// Issue a GET request against the in-process router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };

        TestResponse { status, body }
    }
}
