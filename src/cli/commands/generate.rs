//! `generate` command: dump -> parse -> render -> write

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::config::GeneratorConfig;
use crate::export::{EntityEmitter, KotlinJpaRenderer};
use crate::import::MysqlDumpParser;
use crate::source::{MysqldumpSource, SchemaSource};
use crate::storage::FileWriter;

/// Arguments for the `generate` command
pub struct GenerateArgs {
    /// Path to the TOML configuration file
    pub config: PathBuf,
    /// Read the dump from this file instead of invoking mysqldump
    pub dump: Option<PathBuf>,
    /// Override the configured output root path
    pub out: Option<PathBuf>,
    /// Save the fetched dump text to this file before parsing
    pub save_dump: Option<PathBuf>,
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let mut config = GeneratorConfig::load(&args.config)?;
    if let Some(ref out) = args.out {
        config.output.path = out.display().to_string();
    }

    let dump = match args.dump {
        Some(ref path) => {
            std::fs::read_to_string(path).map_err(|e| CliError::Io(e.to_string()))?
        }
        None => {
            config.validate_for_fetch()?;
            eprintln!(
                "Dumping schema of `{}` from {}...",
                config.database.name,
                if config.database.host.is_empty() {
                    "localhost"
                } else {
                    &config.database.host
                }
            );
            MysqldumpSource::from_config(&config.database).fetch()?
        }
    };

    if let Some(ref path) = args.save_dump {
        std::fs::write(path, &dump).map_err(|e| CliError::Io(e.to_string()))?;
        eprintln!("Dump saved to: {}", path.display());
    }

    let result = MysqlDumpParser::new().parse(&dump);
    eprintln!("Parsed {} tables", result.tables.len());
    for warning in &result.warnings {
        eprintln!("  warning: {}", warning);
    }

    let emitter = EntityEmitter::new(KotlinJpaRenderer::new());
    let files = emitter.render(&result.tables, &config)?;

    let written = FileWriter::new().write_all(&files)?;
    for file in &files {
        eprintln!("  wrote: {}", file.path.display());
    }
    eprintln!("Generated {} entity files", written);
    Ok(())
}
