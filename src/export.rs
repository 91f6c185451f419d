// src/export.rs
//! File export for normalized tables: CSV with a choice of encoding,
//! and Excel workbooks.
//!
//! Export failure is reported as a boolean with the cause logged, not
//! propagated — a failed save should never tear down a session that
//! already holds the fetched data.

use crate::config::CsvEncoding;
use crate::extract::Scalar;
use crate::table::UniformTable;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const XLSX_SHEET_NAME: &str = "データ";

/// Writes the table as CSV at `path` in the requested encoding.
///
/// Returns whether the write succeeded; the cause of a failure is
/// logged at error level.
pub fn to_csv(table: &UniformTable, path: &Path, encoding: CsvEncoding) -> bool {
    match write_csv(table, path, encoding) {
        Ok(()) => {
            log::info!(
                "Wrote {} rows to {} ({})",
                table.row_count(),
                path.display(),
                encoding.as_str()
            );
            true
        }
        Err(e) => {
            log::error!("CSV export to {} failed: {}", path.display(), e);
            false
        }
    }
}

/// Writes the table as a single-sheet Excel workbook at `path`.
pub fn to_spreadsheet(table: &UniformTable, path: &Path) -> bool {
    match write_spreadsheet(table, path) {
        Ok(()) => {
            log::info!("Wrote {} rows to {}", table.row_count(), path.display());
            true
        }
        Err(e) => {
            log::error!("Spreadsheet export to {} failed: {}", path.display(), e);
            false
        }
    }
}

fn write_csv(table: &UniformTable, path: &Path, encoding: CsvEncoding) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for record in table.records() {
        writer.write_record(record.values().map(|cell| cell.to_string()))?;
    }
    let utf8 = String::from_utf8(writer.into_inner()?)?;

    let bytes: Vec<u8> = match encoding {
        CsvEncoding::Utf8 => utf8.into_bytes(),
        CsvEncoding::Utf8Bom => {
            let mut out = UTF8_BOM.to_vec();
            out.extend_from_slice(utf8.as_bytes());
            out
        }
        CsvEncoding::ShiftJis => {
            // Unmappable characters become numeric references rather
            // than failing the whole export.
            let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(&utf8);
            encoded.into_owned()
        }
    };

    std::fs::write(path, bytes)?;
    Ok(())
}

fn write_spreadsheet(table: &UniformTable, path: &Path) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(XLSX_SHEET_NAME)?;

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }
    for (row, record) in table.records().iter().enumerate() {
        for (col, cell) in record.values().enumerate() {
            let (row, col) = (row as u32 + 1, col as u16);
            match cell {
                Scalar::Number(n) => worksheet.write_number(row, col, *n)?,
                Scalar::Bool(b) => worksheet.write_boolean(row, col, *b)?,
                other => worksheet.write_string(row, col, other.to_string())?,
            };
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
