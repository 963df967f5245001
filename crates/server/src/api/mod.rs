mod catalog;
mod handlers;
mod local_search;
mod routes;

pub use routes::create_router;

use serde::Serialize;

/// Fixed-shape error body. Route handlers never leak internal error detail
/// beyond a static message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
