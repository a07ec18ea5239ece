//! Table definitions for the manufacturing-indicators schema
//!
//! Seven tables: a Subsector lookup, the Companies root, and five dependent
//! tables that fan out one row per company, all sharing the company's key.

use super::types::*;

/// Subsector lookup table. Rows are keyed by insertion order and deduplicated
/// by name during the load; the loader fills this table directly rather than
/// through the generic row mapping.
pub static SUBSECTOR: TableSchema = TableSchema {
    name: "Subsector",
    columns: &[
        Column::key("id"),
        Column::from_header("name", ColumnType::Text, "Subsector"),
    ],
    foreign_keys: &[],
};

pub static COMPANIES: TableSchema = TableSchema {
    name: "Companies",
    columns: &[
        Column::key("id"),
        Column::from_header("year", ColumnType::Integer, "Year"),
        Column::from_header("name", ColumnType::Text, "Firm"),
        Column::subsector_ref("subsector_id"),
    ],
    foreign_keys: &[ForeignKey::new("subsector_id", "Subsector")],
};

pub static FINANCE_DATA_AND_ASSET: TableSchema = TableSchema {
    name: "FinanceDataAndAsset",
    columns: &[
        Column::key("id"),
        Column::from_header("total_asset", ColumnType::Money, "Total Asset (IDR)"),
        Column::from_header("fixed_asset", ColumnType::Money, "PPE (Fixed Asset) IDR"),
        Column::from_header(
            "cost_of_goods_sold",
            ColumnType::Money,
            "Cost of Goods Sold (COGS) (IDR)",
        ),
        Column::from_header("operating_expense", ColumnType::Money, "Operating Expense (IDR)"),
        Column::from_header(
            "general_administrative_expense",
            ColumnType::Money,
            "General and Administrative Expense (IDR)",
        ),
    ],
    foreign_keys: &[ForeignKey::new("id", "Companies")],
};

pub static INCOME_AND_PROFIT: TableSchema = TableSchema {
    name: "IncomeAndProfit",
    columns: &[
        Column::key("id"),
        Column::from_header("sales_revenue", ColumnType::Money, "Sales Revenues (IDR)"),
        Column::from_header(
            "operating_profit_margin",
            ColumnType::Money,
            "Operating Profit Margin (IDR)",
        ),
        Column::from_header(
            "operating_profit_margin_ratio",
            ColumnType::Ratio,
            "Operating Profit Margin Ratio",
        ),
    ],
    foreign_keys: &[ForeignKey::new("id", "Companies")],
};

pub static MARKETING_RESEARCH_EXPENSES: TableSchema = TableSchema {
    name: "MarketingResearchExpenses",
    columns: &[
        Column::key("id"),
        Column::from_header(
            "advertising_expenses",
            ColumnType::Money,
            "Advertising Expense (IDR)",
        ),
        Column::from_header("rnd_expenses", ColumnType::Money, "R&D Expenses (IDR)"),
    ],
    foreign_keys: &[ForeignKey::new("id", "Companies")],
};

pub static PRODUCTIVITY: TableSchema = TableSchema {
    name: "Productivity",
    columns: &[
        Column::key("id"),
        Column::from_header("return_on_asset", ColumnType::Ratio, "Return on Asset (ROA)"),
        Column::from_header(
            "operational_efficiency",
            ColumnType::Ratio,
            "Operational Efficiency",
        ),
        Column::from_header("sales_growth", ColumnType::Ratio, "Sales Growth"),
    ],
    foreign_keys: &[ForeignKey::new("id", "Companies")],
};

pub static EMPLOYEE: TableSchema = TableSchema {
    name: "Employee",
    columns: &[
        Column::key("id"),
        Column::from_header("number_employee", ColumnType::Integer, "Number of Employees"),
    ],
    foreign_keys: &[ForeignKey::new("id", "Companies")],
};

/// All tables in creation order (parents before children). Dropping runs in
/// reverse over this same list.
pub static ALL_TABLES: &[&TableSchema] = &[
    &SUBSECTOR,
    &COMPANIES,
    &FINANCE_DATA_AND_ASSET,
    &INCOME_AND_PROFIT,
    &MARKETING_RESEARCH_EXPENSES,
    &PRODUCTIVITY,
    &EMPLOYEE,
];

/// The six tables keyed by the company row ordinal, in insert order
/// (Companies first, so its dependents' foreign keys resolve).
pub static COMPANY_TABLES: &[&TableSchema] = &[
    &COMPANIES,
    &FINANCE_DATA_AND_ASSET,
    &INCOME_AND_PROFIT,
    &MARKETING_RESEARCH_EXPENSES,
    &PRODUCTIVITY,
    &EMPLOYEE,
];

/// Look up a table definition by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().copied().find(|t| t.name == name)
}

/// All target table names in creation order
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}

/// Every spreadsheet column the migration reads, in first-use order. The
/// input must contain all of these.
pub fn required_headers() -> Vec<&'static str> {
    let mut headers = Vec::new();
    for table in ALL_TABLES {
        for header in table.source_headers() {
            if !headers.contains(&header) {
                headers.push(header);
            }
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_table() {
        assert_eq!(get_table("Companies").unwrap().name, "Companies");
        assert!(get_table("companies").is_none());
        assert!(get_table("nonexistent").is_none());
    }

    #[test]
    fn test_required_headers_complete() {
        let headers = required_headers();
        assert_eq!(headers.len(), 17);
        assert!(headers.contains(&"Subsector"));
        assert!(headers.contains(&"Firm"));
        assert!(headers.contains(&"Total Asset (IDR)"));
        assert!(headers.contains(&"Operating Profit Margin Ratio"));
        assert!(headers.contains(&"Number of Employees"));
    }

    #[test]
    fn test_company_tables_start_with_companies() {
        assert_eq!(COMPANY_TABLES[0].name, "Companies");
        assert_eq!(COMPANY_TABLES.len(), 6);
    }

    #[test]
    fn test_dependents_reference_companies() {
        for table in &COMPANY_TABLES[1..] {
            assert_eq!(table.foreign_keys.len(), 1);
            assert_eq!(table.foreign_keys[0].references_table, "Companies");
        }
    }
}
