//! Workbook splitting.
//!
//! Reads a multi-sheet workbook through `calamine` (the cell-matrix
//! reader) and writes one file per sheet: either a fresh single-sheet
//! workbook via `rust_xlsxwriter` or a CSV rendition of the used range.
//! Sheet names are sanitized before they become filenames.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use docport_sheets::{SplitFormat, split};
//!
//! let report = split(
//!     Path::new("budget.xlsx"),
//!     Path::new("split_sheets"),
//!     SplitFormat::Csv,
//! )?;
//! println!("{} sheets written", report.files.len());
//! ```

mod csv;
mod error;
mod filename;

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;

pub use error::SheetError;

/// Excel's hard limit on sheet-name length.
const MAX_SHEET_NAME: usize = 31;

/// Output format for split sheets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitFormat {
    /// One single-sheet `.xlsx` workbook per sheet.
    #[default]
    Xlsx,
    /// One `.csv` file per sheet.
    Csv,
}

impl SplitFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// Outcome of a split.
#[derive(Debug)]
pub struct SplitReport {
    /// Files written, in workbook sheet order.
    pub files: Vec<PathBuf>,
}

/// Split a workbook into one file per sheet.
///
/// Creates `output_dir` when needed. A workbook without sheets yields an
/// empty report, not an error. Sheet order is the workbook order.
///
/// # Errors
///
/// Fails when the input cannot be read as a workbook or when an output
/// file cannot be written.
pub fn split(
    input: &Path,
    output_dir: &Path,
    format: SplitFormat,
) -> Result<SplitReport, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook(input)?;
    fs::create_dir_all(output_dir)?;

    let sheet_names = workbook.sheet_names().to_vec();

    let mut files = Vec::new();
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        let stem = filename::safe_sheet_filename(&name);
        let path = output_dir.join(format!("{stem}.{}", format.extension()));

        match format {
            SplitFormat::Csv => csv::write_csv(&range, &path)?,
            SplitFormat::Xlsx => write_single_sheet(&range, &stem, &path)?,
        }

        tracing::info!(sheet = %name, path = %path.display(), "sheet written");
        files.push(path);
    }

    Ok(SplitReport { files })
}

/// Write one sheet's cells into a fresh single-sheet workbook.
#[allow(clippy::cast_possible_truncation)]
fn write_single_sheet(range: &Range<Data>, name: &str, path: &Path) -> Result<(), SheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let sheet_name: String = name.chars().take(MAX_SHEET_NAME).collect();
    worksheet.set_name(&sheet_name)?;

    // Keep absolute cell positions so sparse sheets keep their layout.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    for (r, row) in range.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let row_idx = start_row + r as u32;
            let col_idx = start_col as u16 + c as u16;
            match cell {
                Data::Empty => {}
                Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                    worksheet.write_string(row_idx, col_idx, s)?;
                }
                Data::Float(f) => {
                    worksheet.write_number(row_idx, col_idx, *f)?;
                }
                Data::Int(i) => {
                    worksheet.write_number(row_idx, col_idx, *i as f64)?;
                }
                Data::Bool(b) => {
                    worksheet.write_boolean(row_idx, col_idx, *b)?;
                }
                cell => {
                    worksheet.write_string(row_idx, col_idx, &csv::format_cell(cell))?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Build a two-sheet fixture workbook.
    fn write_fixture(path: &Path) {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name("成本").unwrap();
        sheet.write_string(0, 0, "item").unwrap();
        sheet.write_string(0, 1, "price").unwrap();
        sheet.write_string(1, 0, "widget, large").unwrap();
        sheet.write_number(1, 1, 12.5).unwrap();

        let sheet = workbook.add_worksheet();
        sheet.set_name("Q1 2024").unwrap();
        sheet.write_string(0, 0, "total").unwrap();
        sheet.write_number(0, 1, 42.0).unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_split_to_csv_writes_one_file_per_sheet() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("fixture.xlsx");
        let out_dir = temp_dir.path().join("split");
        write_fixture(&input);

        let report = split(&input, &out_dir, SplitFormat::Csv).unwrap();

        assert_eq!(
            report.files,
            vec![out_dir.join("成本.csv"), out_dir.join("Q1 2024.csv")]
        );
        let csv = fs::read_to_string(&report.files[0]).unwrap();
        assert_eq!(csv, "item,price\n\"widget, large\",12.5\n");
    }

    #[test]
    fn test_split_to_xlsx_round_trips_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("fixture.xlsx");
        let out_dir = temp_dir.path().join("split");
        write_fixture(&input);

        let report = split(&input, &out_dir, SplitFormat::Xlsx).unwrap();
        assert_eq!(report.files.len(), 2);

        let mut reread: Xlsx<_> = open_workbook(&report.files[1]).unwrap();
        assert_eq!(reread.sheet_names(), vec!["Q1 2024".to_owned()]);
        let range = reread.worksheet_range("Q1 2024").unwrap();
        assert_eq!(range.get_value((0, 0)), Some(&Data::String("total".to_owned())));
        assert_eq!(range.get_value((0, 1)), Some(&Data::Float(42.0)));
    }

    #[test]
    fn test_split_sanitizes_sheet_filenames() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("fixture.xlsx");
        let out_dir = temp_dir.path().join("split");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("plan 2024+").unwrap();
        sheet.write_string(0, 0, "x").unwrap();
        workbook.save(&input).unwrap();

        let report = split(&input, &out_dir, SplitFormat::Csv).unwrap();

        assert_eq!(report.files, vec![out_dir.join("plan 2024+.csv")]);
    }

    #[test]
    fn test_split_missing_input_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = split(
            &temp_dir.path().join("absent.xlsx"),
            temp_dir.path(),
            SplitFormat::Csv,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(SplitFormat::Xlsx.extension(), "xlsx");
        assert_eq!(SplitFormat::Csv.extension(), "csv");
    }
}
