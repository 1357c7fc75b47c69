//! Error types for the docx pipeline.

/// Conversion error type.
#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a readable zip archive.
    #[error("not a valid docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The main document part is malformed XML.
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The archive carries no `word/document.xml` part.
    #[error("archive has no word/document.xml part")]
    MissingDocument,
}
