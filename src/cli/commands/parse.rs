//! `parse` command: parse a dump file and print the table records

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::import::MysqlDumpParser;

/// Arguments for the `parse` command
pub struct ParseArgs {
    /// Path to the dump file
    pub dump: PathBuf,
    /// Output format (json, summary)
    pub format: String,
}

/// Handle the `parse` command
pub fn handle_parse(args: &ParseArgs) -> Result<(), CliError> {
    let dump = std::fs::read_to_string(&args.dump).map_err(|e| CliError::Io(e.to_string()))?;
    let result = MysqlDumpParser::new().parse(&dump);

    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    match args.format.as_str() {
        "summary" => {
            for table in &result.tables {
                println!("{} ({} fields) {}", table.name, table.fields.len(), table.comment);
            }
        }
        _ => {
            let json = serde_json::to_string_pretty(&result.tables)
                .map_err(|e| CliError::Output(e.to_string()))?;
            println!("{}", json);
        }
    }
    Ok(())
}
