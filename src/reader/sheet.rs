use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fmt;

const EMPTY_CELL: CellValue = CellValue::Empty;

/// A raw spreadsheet cell before coercion
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    /// Missing or whitespace-only
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// An in-memory spreadsheet: one header row plus data rows, addressable by
/// column header. Row order is the load order; ordinals are stable for the
/// life of the sheet.
pub struct Sheet {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();
        Self {
            headers,
            index,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fail with every missing column named, before any database work starts
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|col| !self.index.contains_key(*col))
            .collect();

        if !missing.is_empty() {
            bail!(
                "Input is missing required column(s): {}",
                missing.join(", ")
            );
        }
        Ok(())
    }

    pub fn row(&self, ordinal: usize) -> SheetRow<'_> {
        SheetRow {
            sheet: self,
            cells: &self.rows[ordinal],
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = SheetRow<'_>> {
        self.rows.iter().map(move |cells| SheetRow { sheet: self, cells })
    }
}

/// One data row, with cells addressable by column header
pub struct SheetRow<'a> {
    sheet: &'a Sheet,
    cells: &'a [CellValue],
}

impl<'a> SheetRow<'a> {
    /// Cell under `header`; a short row or unknown header reads as empty
    pub fn get(&self, header: &str) -> &CellValue {
        match self.sheet.index.get(header) {
            Some(&idx) => self.cells.get(idx).unwrap_or(&EMPTY_CELL),
            None => &EMPTY_CELL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Sheet {
        Sheet::new(
            vec!["Firm".to_string(), " Year ".to_string()],
            vec![
                vec![
                    CellValue::Text("Acme".to_string()),
                    CellValue::Integer(2020),
                ],
                // short row: Year cell missing entirely
                vec![CellValue::Text("Besar".to_string())],
            ],
        )
    }

    #[test]
    fn test_headers_trimmed() {
        let sheet = sample_sheet();
        assert_eq!(sheet.headers(), &["Firm", "Year"]);
        assert_eq!(sheet.row(0).get("Year"), &CellValue::Integer(2020));
    }

    #[test]
    fn test_short_row_reads_empty() {
        let sheet = sample_sheet();
        assert_eq!(sheet.row(1).get("Year"), &CellValue::Empty);
    }

    #[test]
    fn test_unknown_header_reads_empty() {
        let sheet = sample_sheet();
        assert_eq!(sheet.row(0).get("Subsector"), &CellValue::Empty);
    }

    #[test]
    fn test_require_columns_lists_all_missing() {
        let sheet = sample_sheet();
        assert!(sheet.require_columns(&["Firm", "Year"]).is_ok());

        let err = sheet
            .require_columns(&["Firm", "Subsector", "Sales Growth"])
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Subsector"));
        assert!(message.contains("Sales Growth"));
        assert!(!message.contains("Firm,"));
    }

    #[test]
    fn test_is_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Text("Food".to_string()).is_blank());
        assert!(!CellValue::Integer(0).is_blank());
    }
}
