//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Localized body for Markdown lookups that fail.
const MARKDOWN_NOT_FOUND: &str = "未找到 Markdown 文件";

/// Server error type.
///
/// Every variant degrades to a plain-text HTTP response; a failed request
/// never takes the process down, and resolution failures travel as values
/// up to this boundary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The requested Markdown file was rejected by the sandbox or absent.
    #[error("markdown file not found")]
    MarkdownNotFound,

    /// A fallback path escaped the root, was absent, or was not a file.
    #[error("file not found")]
    NotFound,

    /// Reading a file that passed the existence check failed mid-request.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MarkdownNotFound => (StatusCode::NOT_FOUND, MARKDOWN_NOT_FOUND),
            Self::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            // Concurrent deletion or a permission change between the
            // existence check and the read; indistinguishable from
            // absence as far as the client is concerned.
            Self::Read(_) => (StatusCode::NOT_FOUND, MARKDOWN_NOT_FOUND),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_not_found_maps_to_404() {
        let response = ServerError::MarkdownNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_read_error_maps_to_404() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let response = ServerError::Read(io).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
