//! Spreadsheet row source
//!
//! Reads the first worksheet of an xlsx/xlsm/xls/ods file into a text
//! table. The first row is the header row; no schema is enforced here.

mod cell;

pub use cell::cell_to_string;

use crate::error::{CertGenError, Result};
use calamine::{open_workbook_auto, Reader};
use certgen_common::RowTable;
use std::path::Path;

pub fn load_table(path: &Path) -> Result<RowTable> {
    if !path.exists() {
        return Err(CertGenError::FileNotFound(path.display().to_string()));
    }

    let load_error = |reason: String| CertGenError::SpreadsheetLoad {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| load_error(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| load_error(e.to_string()))?,
        None => return Err(load_error("workbook has no worksheets".into())),
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(RowTable::default()),
    };

    let body = rows
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
            cells.resize(headers.len(), String::new());
            cells
        })
        // blank rows carry no participant
        .filter(|cells| cells.iter().any(|c| !c.trim().is_empty()))
        .collect();

    tracing::debug!(path = %path.display(), columns = headers.len(), "spreadsheet loaded");

    Ok(RowTable::new(headers, body))
}
