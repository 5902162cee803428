//! Greeting Router

use crate::presentation::handlers;
use axum::{Router, routing::get};

/// Create the router serving every route of the API
///
/// Paths that match nothing fall through to a JSON 404.
pub fn greeting_router() -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/saudacao/{nome}", get(handlers::greet))
        .route("/soma", get(handlers::sum))
        .fallback(handlers::route_not_found)
}
