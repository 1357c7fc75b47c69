//! CLI error types.

use docport_docx::DocxError;
use docport_sheets::SheetError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Docx(#[from] DocxError),

    #[error("{0}")]
    Sheets(#[from] SheetError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
