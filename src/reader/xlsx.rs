use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use super::sheet::{CellValue, Sheet};

/// Read an Excel/ODS workbook into a Sheet. The first row of the selected
/// worksheet is treated as the header row.
pub fn read_workbook(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {:?}", path))?;

    let name = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .context("Spreadsheet contains no worksheets")?,
    };

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("Failed to read worksheet: {}", name))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|cell| cell.to_string()).collect(),
        None => bail!("Worksheet {} is empty", name),
    };

    let data = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(Sheet::new(headers, data))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        // Serial date numbers coerce like any other numeric cell
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Cell errors (#N/A etc.) carry their display text into the
        // coercion warning path
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Int(50)), CellValue::Integer(50));
        assert_eq!(convert_cell(&Data::Float(1000.5)), CellValue::Number(1000.5));
        assert_eq!(
            convert_cell(&Data::String("Food".to_string())),
            CellValue::Text("Food".to_string())
        );
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
    }

    #[test]
    fn test_error_cell_keeps_display_text() {
        let converted = convert_cell(&Data::Error(CellErrorType::NA));
        match converted {
            CellValue::Text(s) => assert!(!s.is_empty()),
            other => panic!("expected text, got {:?}", other),
        }
    }
}
