//! Error types for the workbook splitter.

/// Splitter error type.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Creating the output directory or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input workbook could not be read.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// A single-sheet output workbook could not be written.
    #[error("failed to write sheet file: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
