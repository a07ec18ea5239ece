use crate::schema::TableSchema;

/// Generate CREATE TABLE SQL for a table definition
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);
    let mut lines = Vec::new();

    for col in schema.columns {
        let pk = if col.primary_key { " PRIMARY KEY" } else { "" };
        lines.push(format!("    {} {}{}", col.name, col.col_type.sql_type(), pk));
    }

    for fk in schema.foreign_keys {
        lines.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}({})",
            fk.column, fk.references_table, fk.references_column
        ));
    }

    sql.push_str(&lines.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// DROP statement for the destructive recreate at process start
pub fn generate_drop_table(schema: &TableSchema) -> String {
    format!("DROP TABLE IF EXISTS {}", schema.name)
}

/// CREATE INDEX statements for foreign-key columns. Key columns that double
/// as the primary key are already indexed and are skipped.
pub fn generate_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .foreign_keys
        .iter()
        .filter(|fk| {
            !schema
                .columns
                .iter()
                .any(|col| col.primary_key && col.name == fk.column)
        })
        .map(|fk| {
            format!(
                "CREATE INDEX idx_{}_{} ON {}({})",
                schema.name, fk.column, schema.name, fk.column
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{COMPANIES, EMPLOYEE, FINANCE_DATA_AND_ASSET, PRODUCTIVITY};

    #[test]
    fn test_generate_create_table_companies() {
        let sql = generate_create_table(&COMPANIES);
        assert!(sql.contains("CREATE TABLE Companies"));
        assert!(sql.contains("id INTEGER PRIMARY KEY"));
        assert!(sql.contains("year INTEGER"));
        assert!(sql.contains("name VARCHAR(255)"));
        assert!(sql.contains("FOREIGN KEY (subsector_id) REFERENCES Subsector(id)"));
    }

    #[test]
    fn test_generate_create_table_decimal_types() {
        let finance = generate_create_table(&FINANCE_DATA_AND_ASSET);
        assert!(finance.contains("total_asset DECIMAL(20, 2)"));
        assert!(finance.contains("FOREIGN KEY (id) REFERENCES Companies(id)"));

        let productivity = generate_create_table(&PRODUCTIVITY);
        assert!(productivity.contains("return_on_asset DECIMAL(10, 4)"));
    }

    #[test]
    fn test_generate_drop_table() {
        assert_eq!(
            generate_drop_table(&EMPLOYEE),
            "DROP TABLE IF EXISTS Employee"
        );
    }

    #[test]
    fn test_generate_indexes_skip_primary_key() {
        // Employee's only FK is its primary key
        assert!(generate_indexes(&EMPLOYEE).is_empty());

        let indexes = generate_indexes(&COMPANIES);
        assert_eq!(indexes.len(), 1);
        assert!(indexes[0].contains("idx_Companies_subsector_id"));
    }
}
