use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{catalog, handlers, local_search};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // External catalog
        .route("/catalog/search", get(catalog::search))
        .route("/catalog/games/{id}", get(catalog::get_game))
        .route("/catalog/games/{id}/expansions", get(catalog::get_expansions))
        // Local rank snapshot
        .route("/games/search", get(local_search::search))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
