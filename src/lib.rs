pub mod cli;
pub mod config;
pub mod loader;
pub mod reader;
pub mod schema;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::MigrateConfig;
pub use ui::{Phase, PlainUi, SilentUi, Ui, UiApp};
pub use writer::{migrate_spreadsheet, LoadReport};
