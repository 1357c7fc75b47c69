//! Raw Markdown endpoint.
//!
//! `GET /raw?file=<relative-path>` is the only route that serves Markdown
//! and the single trusted choke point of the sandbox. The response is the
//! unrendered file text; conversion to HTML happens in the client shell,
//! so the server never interprets Markdown content.

use std::sync::Arc;

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::ServerError;
use crate::sandbox;
use crate::state::AppState;

/// Query parameters for the raw route.
#[derive(Deserialize)]
pub(crate) struct RawQuery {
    /// Root-relative path of the Markdown file to fetch.
    file: Option<String>,
}

/// Handle `GET /raw`.
///
/// The `file` parameter passes through the lexical sandbox resolver and a
/// canonicalized re-verification before any read. Missing parameter,
/// sandbox rejection, absence, and read failure all collapse into the
/// same 404.
pub(crate) async fn get_raw(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RawQuery>,
) -> Result<String, ServerError> {
    let requested = query.file.ok_or(ServerError::MarkdownNotFound)?;

    let Some(resolved) = sandbox::resolve_markdown(&state.root, &requested)
        .and_then(|candidate| sandbox::confine_existing(&state.root, &candidate))
    else {
        if state.verbose {
            tracing::info!(file = %requested, "raw request rejected");
        }
        return Err(ServerError::MarkdownNotFound);
    };

    let text = tokio::fs::read_to_string(&resolved).await?;
    Ok(text)
}
