//! API-level tests against the in-process router with a mock catalog and a
//! tempfile rank snapshot.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{fixtures, TestFixture};
use secondturn_core::{CatalogError, ItemKind};

// ============================================================================
// Health and config
// ============================================================================

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_is_sanitized() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["catalog"]["timeout_secs"], 10);
    assert_eq!(response.body["catalog"]["base_url_overridden"], false);
    assert!(response.body["local_index"]["csv_path"].is_string());
}

// ============================================================================
// External catalog
// ============================================================================

#[tokio::test]
async fn test_catalog_search_returns_results() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_search_results(
            "wingspan",
            vec![
                fixtures::catalog_item("266192", "Wingspan", ItemKind::BaseGame),
                fixtures::catalog_item("290448", "Wingspan: EE", ItemKind::Expansion),
            ],
        )
        .await;

    let response = fixture.get("/api/v1/catalog/search?q=wingspan").await;

    assert_eq!(response.status, StatusCode::OK);
    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "266192");
    assert_eq!(results[0]["kind"], "base game");
}

#[tokio::test]
async fn test_catalog_search_kind_filter() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_search_results(
            "wingspan",
            vec![
                fixtures::catalog_item("266192", "Wingspan", ItemKind::BaseGame),
                fixtures::catalog_item("290448", "Wingspan: EE", ItemKind::Expansion),
            ],
        )
        .await;

    let response = fixture
        .get("/api/v1/catalog/search?q=wingspan&kind=expansion")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "290448");
}

#[tokio::test]
async fn test_catalog_search_missing_query_is_400() {
    let fixture = TestFixture::new().await;

    let missing = fixture.get("/api/v1/catalog/search").await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let blank = fixture.get("/api/v1/catalog/search?q=%20%20").await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["error"], "Search query is required");
}

#[tokio::test]
async fn test_catalog_search_upstream_failure_is_500_with_static_message() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .fail_next(CatalogError::ApiError { status: 502 })
        .await;

    let response = fixture.get("/api/v1/catalog/search?q=wingspan").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Failed to reach the game catalog");
}

#[tokio::test]
async fn test_get_game_details() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_details(fixtures::catalog_details(
            "266192",
            "Wingspan",
            ItemKind::BaseGame,
        ))
        .await;

    let response = fixture.get("/api/v1/catalog/games/266192").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["game"]["name"], "Wingspan");
    // Versions are only fetched on request.
    assert_eq!(response.body["versions"], json!(null));
}

#[tokio::test]
async fn test_get_game_details_not_found_is_404() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/catalog/games/999999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Game not found");
}

#[tokio::test]
async fn test_get_game_details_with_versions() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_details(fixtures::catalog_details(
            "266192",
            "Wingspan",
            ItemKind::BaseGame,
        ))
        .await;
    fixture
        .catalog
        .add_versions(
            "266192",
            vec![secondturn_core::VersionRecord {
                id: "900".to_string(),
                name: Some("First edition".to_string()),
                year_published: Some(2020),
                publisher: Some("Test Publisher".to_string()),
                thumbnail: None,
                image: None,
            }],
        )
        .await;

    let response = fixture
        .get("/api/v1/catalog/games/266192?versions=true")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let versions = response.body["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0]["publisher"], "Test Publisher");
}

#[tokio::test]
async fn test_get_expansions() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_details(fixtures::catalog_details_with_expansions(
            "1",
            "Base Game",
            &["2"],
        ))
        .await;
    fixture
        .catalog
        .add_details(fixtures::catalog_details(
            "2",
            "The Expansion",
            ItemKind::Expansion,
        ))
        .await;

    let response = fixture.get("/api/v1/catalog/games/1/expansions").await;

    assert_eq!(response.status, StatusCode::OK);
    let expansions = response.body["expansions"].as_array().unwrap();
    assert_eq!(expansions.len(), 1);
    assert_eq!(expansions[0]["name"], "The Expansion");
}

#[tokio::test]
async fn test_get_expansions_empty_for_unknown_game() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/catalog/games/42/expansions").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["expansions"].as_array().unwrap().len(), 0);
}

// ============================================================================
// Local index search
// ============================================================================

#[tokio::test]
async fn test_local_search_ranks_and_shapes_results() {
    let snapshot = "\
id,name,yearpublished,rank,bayesaverage,is_expansion
1,Wing Game Five,2010,5,6.0,0
2,Wing Game Unranked,2011,,9.0,0
3,Wing Game Two,2012,2,7.0,0
";
    let fixture = TestFixture::with_snapshot(snapshot).await;

    let response = fixture.get("/api/v1/games/search?q=wing").await;

    assert_eq!(response.status, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    // Ranked records first by ascending rank, then unranked by rating.
    let ids: Vec<_> = results.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(results[2]["rank"], json!(null));
}

#[tokio::test]
async fn test_local_search_digit_query_matches_id() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/games/search?q=174430").await;

    assert_eq!(response.status, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Gloomhaven");
}

#[tokio::test]
async fn test_local_search_truncates_to_fifty() {
    let mut snapshot = String::from("id,name,yearpublished,rank,bayesaverage,is_expansion\n");
    for i in 1..=60 {
        snapshot.push_str(&format!("{i},Filler Game {i},2000,{i},6.0,0\n"));
    }
    let fixture = TestFixture::with_snapshot(&snapshot).await;

    let response = fixture.get("/api/v1/games/search?q=filler").await;

    assert_eq!(response.status, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    assert_eq!(results.len(), 50);
    assert_eq!(results[0]["rank"], 1);
}

#[tokio::test]
async fn test_local_search_missing_query_is_400() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/games/search").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Query parameter is required");
}

#[tokio::test]
async fn test_local_search_broken_index_is_sticky_500() {
    let fixture = TestFixture::with_broken_index().await;

    let first = fixture.get("/api/v1/games/search?q=wing").await;
    assert_eq!(first.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(first.body["error"], "Failed to search for games");

    // Still failing on the next call; the load is not retried.
    let second = fixture.get("/api/v1/games/search?q=wing").await;
    assert_eq!(second.status, StatusCode::INTERNAL_SERVER_ERROR);
}
