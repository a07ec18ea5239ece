use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mfg-indicators-to-sqlite")]
#[command(
    version,
    about = "Load manufacturing financial indicators into a normalized SQLite database"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recreate the schema and load a spreadsheet into it
    Migrate {
        /// Input spreadsheet (.xlsx, .xls, .ods, or .csv)
        #[arg(short, long, env = "MFG_INPUT")]
        input: Option<PathBuf>,

        /// Target SQLite database path
        #[arg(short, long, env = "MFG_DATABASE")]
        database: Option<PathBuf>,

        /// Worksheet name (defaults to the first worksheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// JSON config file supplying any of the above
        #[arg(short, long, env = "MFG_CONFIG")]
        config: Option<PathBuf>,

        /// Plain line-oriented output instead of the terminal UI
        #[arg(short, long)]
        plain: bool,
    },

    /// Print the generated schema DDL
    Schema,

    /// List all target table names
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
