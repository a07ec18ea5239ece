pub mod csv;
pub mod sheet;
pub mod xlsx;

pub use sheet::{CellValue, Sheet, SheetRow};

use anyhow::{bail, Result};
use std::path::Path;

/// Load a spreadsheet into memory, dispatching on file extension.
/// `sheet_name` selects a worksheet for workbook formats; CSV ignores it.
pub fn load_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => xlsx::read_workbook(path, sheet_name),
        "csv" => csv::read_csv(path),
        other => bail!(
            "Unsupported spreadsheet format: {:?} (expected .xlsx, .xls, .ods, or .csv)",
            other
        ),
    }
}
