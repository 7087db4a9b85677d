use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};

use crate::error::NormalizeError;
use crate::file::InputFile;

use super::{FormatHandler, Parsed};

const SPREADSHEET_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/vnd.ms-excel.sheet.macroEnabled.12",
    "application/vnd.oasis.opendocument.spreadsheet",
];

/// Excel and OpenDocument workbooks, rendered sheet by sheet as CSV text.
pub struct SpreadsheetHandler;

impl FormatHandler for SpreadsheetHandler {
    fn name(&self) -> &'static str {
        "spreadsheet"
    }

    fn accepts(&self, file: &InputFile) -> bool {
        SPREADSHEET_MIME_TYPES.contains(&file.mime_type.as_str())
            || file.has_extension(&["xlsx", "xlsm", "xls", "ods"])
    }

    fn parse(&self, file: &InputFile) -> Result<Parsed, NormalizeError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(file.bytes.clone()))?;

        let mut out = String::new();
        for sheet in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet)?;
            let rows: Vec<Vec<String>> = range
                .rows()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect();

            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("--- Sheet: {sheet} ---\n"));
            out.push_str(&rows_to_csv(&rows));
        }

        Ok(Parsed::text(out))
    }
}

/// Quotes a cell when it contains a delimiter, quote, or line break.
fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders rows as CSV lines, dropping trailing empty cells and blank rows.
pub(crate) fn rows_to_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let used = row
            .iter()
            .rposition(|cell| !cell.is_empty())
            .map_or(0, |last| last + 1);
        if used == 0 {
            continue;
        }
        let line: Vec<String> = row[..used].iter().map(|c| csv_cell(c)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
