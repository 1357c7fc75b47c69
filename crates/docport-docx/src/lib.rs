//! Docx to Markdown conversion.
//!
//! The pipeline keeps the classic two-stage shape: extract the document
//! body into a simple HTML rendition, then hand that to an external
//! HTML→Markdown transducer (`html2md`). Formatting the transducer cannot
//! express is skipped and reported as a warning rather than failing the
//! whole conversion.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use docport_docx::{convert, default_output_path};
//!
//! let input = Path::new("report.docx");
//! let report = convert(input, &default_output_path(input))?;
//! println!("wrote {}", report.output.display());
//! ```

mod error;
mod extract;

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

pub use error::DocxError;

/// Archive entry holding the document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Outcome of a conversion.
#[derive(Debug)]
pub struct ConversionReport {
    /// Path of the Markdown file that was written.
    pub output: PathBuf,
    /// Non-fatal findings, e.g. skipped images.
    pub warnings: Vec<String>,
}

/// Default output path: sibling of the input with a `.md` extension.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}

/// Convert a `.docx` file to a Markdown file.
///
/// Creates the output's parent directory when it does not exist yet.
///
/// # Errors
///
/// Fails when the input cannot be opened or is not a docx archive, when
/// the document part is missing or malformed, or when the output cannot
/// be written.
pub fn convert(input: &Path, output: &Path) -> Result<ConversionReport, DocxError> {
    let mut archive = ZipArchive::new(File::open(input)?)?;
    let xml = read_document_part(&mut archive)?;

    let extracted = extract::document_html(&xml)?;
    for warning in &extracted.warnings {
        tracing::warn!(input = %input.display(), %warning, "docx conversion warning");
    }

    let markdown = html2md::parse_html(&extracted.html);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, markdown)?;

    Ok(ConversionReport {
        output: output.to_path_buf(),
        warnings: extracted.warnings,
    })
}

/// Read `word/document.xml` out of the archive.
fn read_document_part(archive: &mut ZipArchive<File>) -> Result<String, DocxError> {
    let mut entry = match archive.by_name(DOCUMENT_PART) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(DocxError::MissingDocument),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;

    fn write_docx(path: &Path, document_xml: &str) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        writer
            .start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }

    fn sample_document() -> &'static str {
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>背景</w:t></w:r></w:p><w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>world</w:t></w:r></w:p></w:body></w:document>"#
    }

    #[test]
    fn test_convert_writes_markdown() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("report.docx");
        let output = temp_dir.path().join("report.md");
        write_docx(&input, sample_document());

        let report = convert(&input, &output).unwrap();

        assert_eq!(report.output, output);
        assert!(report.warnings.is_empty());
        let markdown = fs::read_to_string(&output).unwrap();
        assert!(markdown.contains("背景"));
        assert!(markdown.contains("**world**"));
    }

    #[test]
    fn test_convert_creates_output_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("report.docx");
        let output = temp_dir.path().join("out/nested/report.md");
        write_docx(&input, sample_document());

        convert(&input, &output).unwrap();

        assert!(output.is_file());
    }

    #[test]
    fn test_convert_missing_input_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("absent.docx");

        let result = convert(&input, &temp_dir.path().join("out.md"));

        assert!(matches!(result, Err(DocxError::Io(_))));
    }

    #[test]
    fn test_convert_rejects_non_archive_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("not-a-docx.docx");
        fs::write(&input, "plain text, not a zip").unwrap();

        let result = convert(&input, &temp_dir.path().join("out.md"));

        assert!(matches!(result, Err(DocxError::Archive(_))));
    }

    #[test]
    fn test_convert_requires_document_part() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("empty.docx");
        let mut writer = zip::ZipWriter::new(File::create(&input).unwrap());
        writer
            .start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        writer.finish().unwrap();

        let result = convert(&input, &temp_dir.path().join("out.md"));

        assert!(matches!(result, Err(DocxError::MissingDocument)));
    }

    #[test]
    fn test_default_output_path_replaces_extension() {
        let output = default_output_path(Path::new("/data/报告.docx"));

        assert_eq!(output, PathBuf::from("/data/报告.md"));
    }
}
