//! docport CLI - local document utilities.
//!
//! Provides commands for:
//! - `serve`: preview a project's Markdown files over local HTTP
//! - `docx`: convert a `.docx` document to Markdown
//! - `split`: split a workbook into one file per sheet

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DocxArgs, ServeArgs, SplitArgs};
use output::Output;

/// docport - local document utilities.
#[derive(Parser)]
#[command(name = "docport", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Markdown preview server.
    Serve(ServeArgs),
    /// Convert a .docx document to Markdown.
    Docx(DocxArgs),
    /// Split a workbook into one file per sheet.
    Split(SplitArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for serve command
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
        Commands::Docx(args) => args.execute(),
        Commands::Split(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
