//! HTTP router assembly.

mod common;
mod foobar;

pub use common::common_routes;
pub use foobar::foobar_routes;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Largest accepted request body. Larger bodies fail JSON extraction and get a 400 envelope.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full HTTP application: common and foobar routes behind CORS, body limit and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(foobar_routes(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
