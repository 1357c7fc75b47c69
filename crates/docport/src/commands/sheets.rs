//! `docport split` command implementation.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use docport_sheets::{SplitFormat, split};

use crate::error::CliError;
use crate::output::Output;

/// Per-sheet output format flag.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum FormatArg {
    /// One single-sheet .xlsx workbook per sheet.
    #[default]
    Xlsx,
    /// One .csv file per sheet.
    Csv,
}

impl From<FormatArg> for SplitFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xlsx => Self::Xlsx,
            FormatArg::Csv => Self::Csv,
        }
    }
}

/// Arguments for the split command.
#[derive(Args)]
pub(crate) struct SplitArgs {
    /// Input .xlsx workbook.
    input: PathBuf,

    /// Output directory (default: `split_sheets` next to the input).
    output_dir: Option<PathBuf>,

    /// Per-sheet output format.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Xlsx)]
    format: FormatArg,
}

impl SplitArgs {
    /// Execute the split command.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be read or an output file
    /// cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let out_dir = self.output_dir.unwrap_or_else(|| {
            self.input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("split_sheets")
        });

        let report = split(&self.input, &out_dir, self.format.into())?;

        if report.files.is_empty() {
            output.warning("Workbook contains no sheets");
            return Ok(());
        }

        for file in &report.files {
            output.info(&format!("Written: {}", file.display()));
        }
        output.success(&format!(
            "Done: {} sheet(s) split into {}",
            report.files.len(),
            out_dir.display()
        ));

        Ok(())
    }
}
