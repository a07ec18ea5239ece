use rusqlite::Statement;

use super::coerce::{self, Coerced};
use crate::reader::SheetRow;
use crate::schema::{ColumnSource, TableSchema};

/// A value ready to bind into an insert statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

/// One insert-ready row plus any coercion warnings gathered along the way.
/// Value order matches the table's column order.
pub struct ParsedRow {
    pub values: Vec<SqlValue>,
    pub warnings: Vec<String>,
}

/// Build the insert values for `schema` from one spreadsheet row. A cell
/// that fails coercion becomes NULL and contributes a warning naming the
/// offending raw value; it never fails the row.
pub fn build_row(
    schema: &TableSchema,
    company_id: i64,
    subsector_id: i64,
    row: &SheetRow,
) -> ParsedRow {
    let mut values = Vec::with_capacity(schema.columns.len());
    let mut warnings = Vec::new();

    for col in schema.columns {
        match &col.source {
            ColumnSource::Ordinal => values.push(SqlValue::Integer(company_id)),
            ColumnSource::SubsectorRef => values.push(SqlValue::Integer(subsector_id)),
            ColumnSource::Header(header) => {
                match coerce::coerce(row.get(header), &col.col_type) {
                    Coerced::Value(value) => values.push(value),
                    Coerced::Invalid(raw) => {
                        warnings.push(format!(
                            "warning: invalid value '{}' for {}.{}; stored as NULL",
                            raw, schema.name, col.name
                        ));
                        values.push(SqlValue::Null);
                    }
                }
            }
        }
    }

    ParsedRow { values, warnings }
}
