/// Column data type, driving both DDL generation and value coercion
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Integer,
    Text,
    /// Large monetary amount, declared DECIMAL(20, 2)
    Money,
    /// Dimensionless ratio, declared DECIMAL(10, 4)
    Ratio,
}

impl ColumnType {
    /// SQL type name used in generated DDL
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "VARCHAR(255)",
            ColumnType::Money => "DECIMAL(20, 2)",
            ColumnType::Ratio => "DECIMAL(10, 4)",
        }
    }
}

/// Where a column's value comes from during the per-row fan-out
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSource {
    /// The synthetic ordinal key assigned to the row (row position for
    /// company tables, insertion order for Subsector)
    Ordinal,
    /// The subsector id resolved for the current row
    SubsectorRef,
    /// A named spreadsheet column
    Header(&'static str),
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub source: ColumnSource,
    pub primary_key: bool,
}

impl Column {
    /// The synthetic integer primary key column
    pub const fn key(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Integer,
            source: ColumnSource::Ordinal,
            primary_key: true,
        }
    }

    /// A nullable column filled from a spreadsheet header
    pub const fn from_header(
        name: &'static str,
        col_type: ColumnType,
        header: &'static str,
    ) -> Self {
        Self {
            name,
            col_type,
            source: ColumnSource::Header(header),
            primary_key: false,
        }
    }

    /// The Companies column carrying the resolved subsector id
    pub const fn subsector_ref(name: &'static str) -> Self {
        Self {
            name,
            col_type: ColumnType::Integer,
            source: ColumnSource::SubsectorRef,
            primary_key: false,
        }
    }
}

/// Foreign key reference
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

impl ForeignKey {
    pub const fn new(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
            references_column: "id",
        }
    }
}

/// Table schema definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
}

impl TableSchema {
    /// Spreadsheet headers this table reads from
    pub fn source_headers(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter_map(|col| match col.source {
                ColumnSource::Header(header) => Some(header),
                _ => None,
            })
            .collect()
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|col| col.name).collect()
    }
}
