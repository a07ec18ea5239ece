use anyhow::Result;
use mfg_indicators_to_sqlite::{
    cli::{Cli, Commands},
    config::MigrateConfig,
    schema::{table_names, ALL_TABLES},
    ui::{PlainUi, UiApp},
    writer::schema_gen::{generate_create_table, generate_indexes},
    writer::migrate_spreadsheet,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Migrate {
            input,
            database,
            sheet,
            config,
            plain,
        } => {
            let config = MigrateConfig::resolve(input, database, sheet, config.as_deref())?;
            let start = Instant::now();

            if plain {
                let mut ui = PlainUi::new();
                let report = migrate_spreadsheet(&config, &mut ui)?;
                println!(
                    "\nLoaded {} companies across {} subsectors into {:?} in {:.1}s ({} warnings)",
                    report.companies,
                    report.subsectors,
                    config.database,
                    start.elapsed().as_secs_f64(),
                    report.warnings
                );
            } else {
                let mut ui = UiApp::new()?;
                match migrate_spreadsheet(&config, &mut ui) {
                    Ok(report) => {
                        let summary = format!(
                            "Loaded {} companies across {} subsectors in {:.1}s ({} warnings)",
                            report.companies,
                            report.subsectors,
                            start.elapsed().as_secs_f64(),
                            report.warnings
                        );
                        ui.finish(&summary)?;
                    }
                    Err(e) => {
                        ui.restore()?;
                        return Err(e);
                    }
                }
            }
        }

        Commands::Schema => {
            for schema in ALL_TABLES {
                println!("{};\n", generate_create_table(schema));
                for index_sql in generate_indexes(schema) {
                    println!("{};\n", index_sql);
                }
            }
        }

        Commands::ListTables => {
            println!("Target tables:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
