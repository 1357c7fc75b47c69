//! `docport serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docport_server::{DEFAULT_PORT, PreviewConfig, preview_url, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Project root directory to preview (default: current directory).
    root: Option<PathBuf>,

    /// Port to listen on (default: 3000).
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose output (log rejected requests).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the project root is invalid or the server
    /// fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = root.canonicalize().map_err(|_| {
            CliError::Validation(format!("project root not found: {}", root.display()))
        })?;
        if !root.is_dir() {
            return Err(CliError::Validation(format!(
                "project root is not a directory: {}",
                root.display()
            )));
        }

        let config = PreviewConfig {
            host: self.host,
            port: self.port.unwrap_or(DEFAULT_PORT),
            root,
            verbose: self.verbose,
        };

        output.info(&format!("Project root: {}", config.root.display()));
        output.success(&format!("Preview ready: {}", preview_url(&config)));

        run_server(config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
