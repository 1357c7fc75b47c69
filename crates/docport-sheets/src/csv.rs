//! CSV emission for sheet ranges.

use std::fs;
use std::path::Path;

use calamine::{Data, Range};

use crate::error::SheetError;

/// Write a sheet's used range as a CSV file, one line per row.
pub(crate) fn write_csv(range: &Range<Data>, path: &Path) -> Result<(), SheetError> {
    let mut out = String::new();
    for row in range.rows() {
        let mut first = true;
        for cell in row {
            if !first {
                out.push(',');
            }
            out.push_str(&escape_field(&format_cell(cell)));
            first = false;
        }
        out.push('\n');
    }

    fs::write(path, out)?;
    Ok(())
}

/// Render a single cell as text.
pub(crate) fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "TRUE".to_owned(),
        Data::Bool(false) => "FALSE".to_owned(),
        Data::DateTime(dt) => dt.as_datetime().map_or_else(
            || dt.as_f64().to_string(),
            |d| d.format("%Y-%m-%dT%H:%M:%S").to_string(),
        ),
        Data::Error(e) => e.to_string(),
    }
}

/// Quote a field when it contains a separator, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
