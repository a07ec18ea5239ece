//! Safe value coercion: raw spreadsheet cells to SQL values.
//!
//! Missing or blank cells become NULL silently. A cell that fails numeric
//! parsing also becomes NULL, but surfaces the raw value so the caller can
//! warn. Coercion never errors and never aborts the run.

use super::record::SqlValue;
use crate::reader::CellValue;
use crate::schema::ColumnType;

/// Outcome of coercing one cell
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Value(SqlValue),
    /// Parsing failed; carries the raw cell text for the warning
    Invalid(String),
}

pub fn coerce(cell: &CellValue, col_type: &ColumnType) -> Coerced {
    match col_type {
        ColumnType::Integer => coerce_integer(cell),
        ColumnType::Money | ColumnType::Ratio => coerce_decimal(cell),
        ColumnType::Text => Coerced::Value(coerce_text(cell)),
    }
}

/// Decimal coercion. String values have thousands-separator commas stripped
/// before parsing.
pub fn coerce_decimal(cell: &CellValue) -> Coerced {
    match cell {
        CellValue::Empty => Coerced::Value(SqlValue::Null),
        CellValue::Integer(i) => Coerced::Value(SqlValue::Real(*i as f64)),
        CellValue::Number(f) => Coerced::Value(SqlValue::Real(*f)),
        CellValue::Bool(b) => Coerced::Value(SqlValue::Real(if *b { 1.0 } else { 0.0 })),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Coerced::Value(SqlValue::Null);
            }
            match trimmed.replace(',', "").parse::<f64>() {
                Ok(f) if f.is_finite() => Coerced::Value(SqlValue::Real(f)),
                _ => Coerced::Invalid(s.clone()),
            }
        }
    }
}

/// Integer coercion. Fractional values truncate toward zero.
pub fn coerce_integer(cell: &CellValue) -> Coerced {
    match cell {
        CellValue::Empty => Coerced::Value(SqlValue::Null),
        CellValue::Integer(i) => Coerced::Value(SqlValue::Integer(*i)),
        CellValue::Number(f) if f.is_finite() => Coerced::Value(SqlValue::Integer(*f as i64)),
        CellValue::Number(f) => Coerced::Invalid(f.to_string()),
        CellValue::Bool(b) => Coerced::Value(SqlValue::Integer(*b as i64)),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Coerced::Value(SqlValue::Null);
            }
            let stripped = trimmed.replace(',', "");
            if let Ok(i) = stripped.parse::<i64>() {
                return Coerced::Value(SqlValue::Integer(i));
            }
            match stripped.parse::<f64>() {
                Ok(f) if f.is_finite() => Coerced::Value(SqlValue::Integer(f as i64)),
                _ => Coerced::Invalid(s.clone()),
            }
        }
    }
}

/// Text coercion never fails; non-text cells carry their display form
pub fn coerce_text(cell: &CellValue) -> SqlValue {
    match cell {
        CellValue::Empty => SqlValue::Null,
        CellValue::Text(s) if s.trim().is_empty() => SqlValue::Null,
        CellValue::Text(s) => SqlValue::Text(s.clone()),
        CellValue::Integer(i) => SqlValue::Text(i.to_string()),
        CellValue::Number(f) => SqlValue::Text(number_to_text(*f)),
        CellValue::Bool(b) => SqlValue::Text(b.to_string()),
    }
}

/// Whole-valued floats render without a trailing fraction, so a numeric
/// firm-name cell like 42.0 stores as "42"
fn number_to_text(f: f64) -> String {
    if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_decimal_missing_is_null() {
        assert_eq!(coerce_decimal(&CellValue::Empty), Coerced::Value(SqlValue::Null));
        assert_eq!(coerce_decimal(&text("")), Coerced::Value(SqlValue::Null));
        assert_eq!(coerce_decimal(&text("   ")), Coerced::Value(SqlValue::Null));
    }

    #[test]
    fn test_decimal_strips_thousands_separators() {
        assert_eq!(
            coerce_decimal(&text("1,234,567.50")),
            Coerced::Value(SqlValue::Real(1234567.50))
        );
        assert_eq!(
            coerce_decimal(&text("1,000.50")),
            Coerced::Value(SqlValue::Real(1000.50))
        );
    }

    #[test]
    fn test_decimal_plain_values() {
        assert_eq!(
            coerce_decimal(&CellValue::Number(12.5)),
            Coerced::Value(SqlValue::Real(12.5))
        );
        assert_eq!(
            coerce_decimal(&CellValue::Integer(-3)),
            Coerced::Value(SqlValue::Real(-3.0))
        );
        assert_eq!(
            coerce_decimal(&text("-0.0425")),
            Coerced::Value(SqlValue::Real(-0.0425))
        );
    }

    #[test]
    fn test_decimal_invalid_keeps_raw_value() {
        assert_eq!(coerce_decimal(&text("N/A")), Coerced::Invalid("N/A".to_string()));
        assert_eq!(coerce_decimal(&text("12abc")), Coerced::Invalid("12abc".to_string()));
        // commas stripped first, so this still fails on the letters
        assert_eq!(
            coerce_decimal(&text("1,2x3")),
            Coerced::Invalid("1,2x3".to_string())
        );
    }

    #[test]
    fn test_integer_truncates() {
        assert_eq!(
            coerce_integer(&CellValue::Number(2020.0)),
            Coerced::Value(SqlValue::Integer(2020))
        );
        assert_eq!(
            coerce_integer(&CellValue::Number(50.9)),
            Coerced::Value(SqlValue::Integer(50))
        );
        assert_eq!(
            coerce_integer(&text("50.9")),
            Coerced::Value(SqlValue::Integer(50))
        );
    }

    #[test]
    fn test_integer_with_separators_and_blanks() {
        assert_eq!(
            coerce_integer(&text("12,500")),
            Coerced::Value(SqlValue::Integer(12500))
        );
        assert_eq!(coerce_integer(&CellValue::Empty), Coerced::Value(SqlValue::Null));
        assert_eq!(coerce_integer(&text(" ")), Coerced::Value(SqlValue::Null));
        assert_eq!(coerce_integer(&text("n/a")), Coerced::Invalid("n/a".to_string()));
    }

    #[test]
    fn test_text_blank_is_null() {
        assert_eq!(coerce_text(&CellValue::Empty), SqlValue::Null);
        assert_eq!(coerce_text(&text("  ")), SqlValue::Null);
        assert_eq!(
            coerce_text(&text("Acme")),
            SqlValue::Text("Acme".to_string())
        );
    }

    #[test]
    fn test_text_from_numeric_cells() {
        assert_eq!(
            coerce_text(&CellValue::Number(42.0)),
            SqlValue::Text("42".to_string())
        );
        assert_eq!(
            coerce_text(&CellValue::Number(42.5)),
            SqlValue::Text("42.5".to_string())
        );
        assert_eq!(
            coerce_text(&CellValue::Integer(7)),
            SqlValue::Text("7".to_string())
        );
    }
}
