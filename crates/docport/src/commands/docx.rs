//! `docport docx` command implementation.

use std::path::PathBuf;

use clap::Args;
use docport_docx::{convert, default_output_path};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the docx command.
#[derive(Args)]
pub(crate) struct DocxArgs {
    /// Input .docx file.
    input: PathBuf,

    /// Output .md file (default: input path with a .md extension).
    output: Option<PathBuf>,
}

impl DocxArgs {
    /// Execute the docx command.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let target = self
            .output
            .unwrap_or_else(|| default_output_path(&self.input));
        let report = convert(&self.input, &target)?;

        for warning in &report.warnings {
            output.warning(warning);
        }
        output.success(&format!("Markdown written: {}", report.output.display()));

        Ok(())
    }
}
