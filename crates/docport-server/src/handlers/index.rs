//! Page bootstrap endpoint.
//!
//! `GET /` returns the client-side shell with the server-selected default
//! file embedded. It never fetches file content itself: delivering bytes
//! stays with the raw route, which keeps a single sandboxed choke point
//! between requests and the filesystem.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::defaults;
use crate::state::AppState;
use crate::template;

/// Handle `GET /`.
///
/// Any `file` query parameter is consumed client-side; the server only
/// computes the fallback default. Always responds 200, even for an empty
/// project (the page then starts with an empty input).
pub(crate) async fn get_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let default_file = defaults::default_markdown(&state.root).unwrap_or("");

    if state.verbose {
        tracing::info!(default_file, "serving bootstrap page");
    }

    Html(template::bootstrap_page(default_file))
}
