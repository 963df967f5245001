//! External catalog API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use secondturn_core::{CatalogDetails, CatalogError, CatalogItem, ItemKind, VersionRecord};

use super::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CatalogSearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub kind: Option<ItemKind>,
}

#[derive(Debug, Deserialize)]
pub struct GameDetailsParams {
    #[serde(default)]
    pub versions: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CatalogSearchResponse {
    pub results: Vec<CatalogItem>,
}

#[derive(Debug, Serialize)]
pub struct GameDetailsResponse {
    pub game: CatalogDetails,
    /// Present only when `?versions=true` was requested and the upstream has
    /// version metadata.
    pub versions: Option<Vec<VersionRecord>>,
}

#[derive(Debug, Serialize)]
pub struct ExpansionsResponse {
    pub expansions: Vec<CatalogDetails>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn upstream_error(context: &str, err: CatalogError) -> ApiError {
    error!("{context}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Failed to reach the game catalog")),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/catalog/search?q=...&kind=...
///
/// Search the external catalog. Both base games and expansions are requested
/// unless `kind` narrows the search.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogSearchParams>,
) -> Result<Json<CatalogSearchResponse>, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Search query is required")),
        ));
    }

    let results = state
        .catalog()
        .search(query, params.kind)
        .await
        .map_err(|e| upstream_error("catalog search failed", e))?;

    Ok(Json(CatalogSearchResponse { results }))
}

/// GET /api/v1/catalog/games/{id}?versions=true
///
/// Full record for one game, optionally with its version metadata.
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<GameDetailsParams>,
) -> Result<Json<GameDetailsResponse>, ApiError> {
    let game = state
        .catalog()
        .get_details(&id)
        .await
        .map_err(|e| upstream_error("catalog details failed", e))?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Game not found")),
            )
        })?;

    let versions = if params.versions.unwrap_or(false) {
        state
            .catalog()
            .get_versions(&id)
            .await
            .map_err(|e| upstream_error("catalog versions failed", e))?
    } else {
        None
    };

    Ok(Json(GameDetailsResponse { game, versions }))
}

/// GET /api/v1/catalog/games/{id}/expansions
pub async fn get_expansions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ExpansionsResponse>, ApiError> {
    let expansions = state
        .catalog()
        .get_expansions(&id)
        .await
        .map_err(|e| upstream_error("catalog expansions failed", e))?;

    Ok(Json(ExpansionsResponse { expansions }))
}
