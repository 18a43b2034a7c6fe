//! Input spreadsheet scaffolding
//!
//! Writes an empty participant sheet with the preferred header of every
//! logical field, so organisers start from columns the resolver accepts.

use crate::alias::canonical_headers;
use rust_xlsxwriter::*;

const SHEET_NAME: &str = "Participants";
const COLUMN_WIDTH: f64 = 28.0;

/// Build the empty participant sheet in memory
pub fn generate_input_sheet_buffer() -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold().set_background_color(Color::RGB(0xF2E6D9));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("sheet name error: {}", e))?;

    for (col, header) in canonical_headers().iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| format!("header write error: {}", e))?;
        worksheet
            .set_column_width(col, COLUMN_WIDTH)
            .map_err(|e| format!("column width error: {}", e))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("freeze panes error: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("workbook save error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_sheet_is_xlsx() {
        let buffer = generate_input_sheet_buffer().unwrap();
        // xlsx files are zip archives
        assert_eq!(&buffer[..2], b"PK");
    }
}
