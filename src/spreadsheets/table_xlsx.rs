use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};
use std::borrow::Cow;

pub enum Cell<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

/// A record that can be written as one worksheet row.
pub trait ExportRow {
    const SHEET: &'static str;
    const HEADERS: &'static [&'static str];

    /// Same length and order as `HEADERS`.
    fn cells(&self) -> Vec<Cell<'_>>;
}

pub fn build_workbook<R: ExportRow>(rows: &[&R]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(R::SHEET)
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {e}")))?;

    let bold = Format::new().set_bold();
    for (col, header) in R::HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.cells().into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => worksheet.write_string(r, col, text.as_ref()),
                Cell::Number(n) => worksheet.write_number(r, col, n),
            }
            .map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

/// Exports exactly the rows given, usually the filtered and sorted view.
pub fn export_table_xlsx<R: ExportRow>(rows: &[&R], filename: &str) -> ResultResp {
    let buffer = build_workbook(rows)?;
    xlsx_response(buffer, filename)
}
