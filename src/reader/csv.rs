use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use super::sheet::{CellValue, Sheet};

/// Read a delimited text file into a Sheet. All cells arrive as text (or
/// empty); numeric interpretation happens later in coercion, which also
/// handles thousands separators.
pub fn read_csv(path: &Path) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open spreadsheet: {:?}", path))?;

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Sheet::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write");
        file
    }

    #[test]
    fn test_read_csv() {
        let file = write_csv("Firm,Year,Total Asset (IDR)\nAcme,2020,\"1,000.50\"\nBesar,,\n");
        let sheet = read_csv(file.path()).unwrap();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.headers(), &["Firm", "Year", "Total Asset (IDR)"]);
        assert_eq!(
            sheet.row(0).get("Total Asset (IDR)"),
            &CellValue::Text("1,000.50".to_string())
        );
        assert_eq!(sheet.row(1).get("Year"), &CellValue::Empty);
    }

    #[test]
    fn test_ragged_rows_allowed() {
        let file = write_csv("Firm,Year\nAcme,2020\nBesar\n");
        let sheet = read_csv(file.path()).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.row(1).get("Year"), &CellValue::Empty);
    }
}
