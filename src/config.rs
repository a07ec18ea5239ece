//! Run configuration. Connection parameters and the input path are supplied
//! externally: CLI flags and environment variables take precedence over an
//! optional JSON config file. Nothing is hard-coded.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional config file contents; every field may also come from the CLI
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub sheet: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// Fully resolved migration settings
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    /// Input spreadsheet path
    pub input: PathBuf,
    /// Target SQLite database path
    pub database: PathBuf,
    /// Worksheet name; defaults to the first worksheet
    pub sheet: Option<String>,
}

impl MigrateConfig {
    /// Merge CLI/env values with an optional config file. CLI/env wins.
    pub fn resolve(
        input: Option<PathBuf>,
        database: Option<PathBuf>,
        sheet: Option<String>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let input = input
            .or(file.input)
            .context("No input spreadsheet given (use --input, MFG_INPUT, or a config file)")?;
        let database = database
            .or(file.database)
            .context("No database path given (use --database, MFG_DATABASE, or a config file)")?;

        Ok(Self {
            input,
            database,
            sheet: sheet.or(file.sheet),
        })
    }
}
