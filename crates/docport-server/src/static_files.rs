//! Static file fallback.
//!
//! Any path that is not `/` or `/raw` is treated as a root-relative file
//! path. Containment is re-verified here independently of the Markdown
//! resolver: this boundary is looser (any extension may be streamed) but
//! never wider than the project root.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;

use crate::error::ServerError;
use crate::sandbox;
use crate::state::AppState;

/// Serve an existing regular file from under the project root, or 404.
pub(crate) async fn serve_file(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, ServerError> {
    let decoded = percent_decode_str(uri.path())
        .decode_utf8()
        .map_err(|_| ServerError::NotFound)?;
    let relative = decoded.trim_start_matches('/');

    let resolved = sandbox::resolve_static(&state.root, relative)
        .and_then(|candidate| sandbox::confine_existing(&state.root, &candidate))
        .ok_or(ServerError::NotFound)?;

    let bytes = tokio::fs::read(&resolved)
        .await
        .map_err(|_| ServerError::NotFound)?;

    Ok((
        [(header::CONTENT_TYPE, content_type_for(&resolved))],
        Body::from(bytes),
    )
        .into_response())
}

/// Fixed extension → content-type map for the fallback route.
///
/// Markdown is deliberately served as plain text here too: raw bytes must
/// never reach the browser as interpretable HTML. Anything unrecognized is
/// opaque binary.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("md") => "text/plain; charset=utf-8",
        Some(ext) if ext.eq_ignore_ascii_case("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_type_markdown_is_plain_text() {
        let content_type = content_type_for(Path::new("/proj/notes.md"));

        assert_eq!(content_type, "text/plain; charset=utf-8");
    }

    #[test]
    fn test_content_type_html() {
        let content_type = content_type_for(Path::new("/proj/page.HTML"));

        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn test_content_type_unknown_is_octet_stream() {
        assert_eq!(
            content_type_for(Path::new("/proj/logo.png")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("/proj/Makefile")),
            "application/octet-stream"
        );
    }
}
