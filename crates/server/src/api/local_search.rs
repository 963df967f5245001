//! Local index search handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::error;

use secondturn_core::{rank_records, LocalIndexRecord};

use super::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocalSearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/v1/games/search?q=...
///
/// Search the local rank snapshot, ranked by popularity and truncated to the
/// top 50.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocalSearchParams>,
) -> Result<Json<Vec<LocalIndexRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Query parameter is required")),
        ));
    }

    let matches = state.local_index().search(query).await.map_err(|e| {
        error!("local index search failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to search for games")),
        )
    })?;

    Ok(Json(rank_records(matches)))
}
