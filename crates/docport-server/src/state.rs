//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

/// Application state shared across all handlers.
///
/// Everything here is immutable for the process lifetime; handlers share
/// it behind an `Arc` and no locking is ever needed.
pub(crate) struct AppState {
    /// Canonicalized project root; the trust boundary for all file access.
    pub(crate) root: PathBuf,
    /// Enable verbose request logging.
    pub(crate) verbose: bool,
}
