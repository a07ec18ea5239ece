use anyhow::{Context, Result};
use rusqlite::{params, Connection, Transaction};
use std::fmt;
use std::path::Path;

use super::schema_gen::{generate_create_table, generate_drop_table, generate_indexes};
use crate::config::MigrateConfig;
use crate::loader::record::{build_row, ParsedRow};
use crate::loader::subsector::{subsector_name, Resolved, SubsectorIndex};
use crate::reader::{self, Sheet};
use crate::schema::{TableSchema, ALL_TABLES, COMPANY_TABLES};
use crate::ui::{Phase, Ui};

/// Counts returned to the caller after a completed load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub companies: u64,
    pub subsectors: u64,
    pub warnings: u64,
}

/// One Companies row as read back for verification
#[derive(Debug, Clone)]
pub struct CompanySummary {
    pub id: i64,
    pub year: Option<i64>,
    pub name: Option<String>,
    pub subsector_id: i64,
}

impl fmt::Display for CompanySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        let name = self.name.as_deref().unwrap_or("-");
        write!(
            f,
            "Company {}: {} (year {}, subsector {})",
            self.id, name, year, self.subsector_id
        )
    }
}

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    pub fn new(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        Ok(Self { conn })
    }

    /// Drop and recreate every target table (destructive). Drops run in
    /// reverse creation order so children go before their FK parents.
    pub fn create_tables(&self, schemas: &[&TableSchema]) -> Result<()> {
        for schema in schemas.iter().rev() {
            self.conn
                .execute(&generate_drop_table(schema), [])
                .with_context(|| format!("Failed to drop table: {}", schema.name))?;
        }

        for schema in schemas {
            self.conn
                .execute(&generate_create_table(schema), [])
                .with_context(|| format!("Failed to create table: {}", schema.name))?;

            for index_sql in generate_indexes(schema) {
                self.conn
                    .execute(&index_sql, [])
                    .with_context(|| format!("Failed to create index for: {}", schema.name))?;
            }
        }

        Ok(())
    }

    /// Load every spreadsheet row into the seven tables. All inserts run
    /// inside one transaction with a single final commit: per row, resolve
    /// the subsector, insert the Companies row, then its five dependents.
    pub fn load(&mut self, sheet: &Sheet, ui: &mut impl Ui) -> Result<LoadReport> {
        let insert_sqls: Vec<String> = COMPANY_TABLES.iter().map(|t| insert_sql(t)).collect();
        let total = sheet.len() as u64;

        let tx = self.conn.transaction()?;
        let mut subsectors = SubsectorIndex::new();
        let mut warnings: u64 = 0;

        for (ordinal, row) in sheet.rows().enumerate() {
            let company_id = ordinal as i64;

            let name = subsector_name(row.get("Subsector"));
            let subsector_id = match subsectors.resolve(name.as_deref()) {
                Resolved::New(id) => {
                    tx.execute(
                        "INSERT INTO Subsector (id, name) VALUES (?1, ?2)",
                        params![id, name],
                    )
                    .context("Failed to insert Subsector row")?;
                    id
                }
                Resolved::Existing(id) => id,
            };

            for (schema, sql) in COMPANY_TABLES.iter().zip(&insert_sqls) {
                let parsed = build_row(schema, company_id, subsector_id, &row);
                for warning in &parsed.warnings {
                    ui.log(warning.clone());
                }
                warnings += parsed.warnings.len() as u64;

                insert_row(&tx, sql, &parsed)
                    .with_context(|| format!("Failed to insert into {}", schema.name))?;
            }

            ui.set_progress(ordinal as u64 + 1, total, "rows");
        }

        tx.commit().context("Failed to commit migration")?;

        Ok(LoadReport {
            companies: total,
            subsectors: subsectors.len() as u64,
            warnings,
        })
    }

    /// Confirmation read: every Companies row, in key order
    pub fn read_companies(&self) -> Result<Vec<CompanySummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, year, name, subsector_id FROM Companies ORDER BY id")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CompanySummary {
                    id: row.get(0)?,
                    year: row.get(1)?,
                    name: row.get(2)?,
                    subsector_id: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read back Companies rows")?;

        Ok(rows)
    }

    /// Finalize and close the database
    pub fn finalize(self) -> Result<()> {
        self.conn.execute("PRAGMA optimize;", [])?;
        Ok(())
    }
}

/// Parameterized insert statement for a table, columns in schema order
fn insert_sql(schema: &TableSchema) -> String {
    let columns = schema.column_names();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}

fn insert_row(tx: &Transaction, sql: &str, row: &ParsedRow) -> Result<()> {
    let mut stmt = tx.prepare_cached(sql)?;
    for (idx, value) in row.values.iter().enumerate() {
        value.bind_to(idx + 1, &mut stmt)?;
    }
    stmt.raw_execute()?;
    Ok(())
}

/// Run the whole migration: read the spreadsheet, recreate the schema, load
/// all rows under one transaction, then read Companies back for verification.
pub fn migrate_spreadsheet(config: &MigrateConfig, ui: &mut impl Ui) -> Result<LoadReport> {
    ui.set_phase(Phase::Reading);
    ui.set_info(format!(
        "{} -> {}",
        config.input.display(),
        config.database.display()
    ));

    let sheet = reader::load_sheet(&config.input, config.sheet.as_deref())?;
    sheet.require_columns(&crate::schema::required_headers())?;
    ui.log(format!(
        "Read {} rows from {}",
        sheet.len(),
        config.input.display()
    ));

    ui.set_phase(Phase::Preparing);
    let mut writer = SqliteWriter::new(&config.database)?;
    writer.create_tables(ALL_TABLES)?;
    ui.log(format!("Recreated {} tables", ALL_TABLES.len()));

    ui.set_phase(Phase::Loading);
    let report = writer.load(&sheet, ui)?;
    ui.clear_progress();
    ui.log(format!(
        "Loaded {} companies across {} subsectors ({} warnings)",
        report.companies, report.subsectors, report.warnings
    ));

    ui.set_phase(Phase::Verifying);
    let companies = writer.read_companies()?;
    for company in &companies {
        ui.log(company.to_string());
    }
    ui.log(format!("Verified {} Companies rows", companies.len()));

    writer.finalize()?;
    ui.set_phase(Phase::Complete);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::EMPLOYEE;

    #[test]
    fn test_insert_sql() {
        assert_eq!(
            insert_sql(&EMPLOYEE),
            "INSERT INTO Employee (id, number_employee) VALUES (?, ?)"
        );
    }
}
