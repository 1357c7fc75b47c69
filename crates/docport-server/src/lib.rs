//! Sandboxed Markdown preview server.
//!
//! Serves a local project directory over HTTP for Markdown preview:
//!
//! - `GET /` — HTML bootstrap page with the default document pre-selected
//! - `GET /raw?file=<path>` — sandboxed raw Markdown fetch
//! - any other path — static file fallback, contained in the project root
//!
//! The server performs no writes and renders no Markdown; the bootstrap
//! page fetches the raw text and renders client-side. Every file access
//! goes through the sandbox resolvers ([`resolve_markdown`],
//! [`resolve_static`], [`confine_existing`]): lexical containment on the
//! normalized path, then canonicalized re-verification once the file
//! must exist.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docport_server::{PreviewConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = PreviewConfig {
//!         root: PathBuf::from("."),
//!         ..PreviewConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router
//!                      │
//!                      ├─► GET /      bootstrap page (default selection)
//!                      ├─► GET /raw   sandbox resolver ─► confined read
//!                      └─► fallback   static resolver  ─► confined read
//! ```

mod app;
mod defaults;
mod error;
mod handlers;
mod middleware;
mod sandbox;
mod state;
mod static_files;
mod template;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub use defaults::{DEFAULT_CANDIDATES, default_markdown, select_default};
pub use error::ServerError;
pub use sandbox::{confine_existing, resolve_markdown, resolve_static};

use state::AppState;

/// Port used when the `PORT` environment variable is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Preview server configuration.
///
/// Constructed once at startup from CLI arguments and the environment,
/// then passed down; there is no ambient process-wide state.
#[derive(Clone, Debug)]
pub struct PreviewConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Project root directory; no file outside it is ever served.
    pub root: PathBuf,
    /// Enable verbose request logging.
    pub verbose: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            verbose: false,
        }
    }
}

/// Build the startup URL advertised to the user, with the auto-selected
/// default file pre-filled as a query parameter.
#[must_use]
pub fn preview_url(config: &PreviewConfig) -> String {
    let default_file = config
        .root
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(defaults::default_markdown)
        .unwrap_or("");

    format!(
        "http://localhost:{}/?file={}",
        config.port,
        template::encode_component(default_file)
    )
}

/// Run the server until externally terminated.
///
/// # Errors
///
/// Returns an error if the project root cannot be canonicalized or the
/// listener fails to bind. Individual request failures never propagate
/// here: they degrade to 404 responses at the router boundary.
pub async fn run_server(config: PreviewConfig) -> Result<(), Box<dyn std::error::Error>> {
    // The sandbox compares canonicalized paths, so the root itself must be
    // canonical before the first request is resolved against it.
    let root = config.root.canonicalize()?;

    let state = Arc::new(AppState {
        root,
        verbose: config.verbose,
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, url = %preview_url(&config), "Starting preview server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
