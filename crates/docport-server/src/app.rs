//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Upper bound on a single request, including its disk reads.
///
/// Hardening only: one stuck read should not pin a connection forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the application router.
///
/// Three routes, dispatched by path component only: the bootstrap page,
/// the raw Markdown choke point, and the static fallback for everything
/// else.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::get_index))
        .route("/raw", get(handlers::raw::get_raw))
        .fallback(static_files::serve_file)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
