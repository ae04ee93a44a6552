//! mysql-entity-gen binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mysql_entity_gen::cli::commands::generate::{GenerateArgs, handle_generate};
use mysql_entity_gen::cli::commands::parse::{ParseArgs, handle_parse};

#[derive(Parser)]
#[command(name = "mysql-entity-gen")]
#[command(about = "Generate annotated entity classes from a MySQL schema dump")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the schema, parse it and write one entity file per table
    Generate {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "entity-gen.toml")]
        config: PathBuf,
        /// Read the dump from a file instead of invoking mysqldump
        #[arg(long)]
        dump: Option<PathBuf>,
        /// Override the configured output root path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Save the fetched dump text to a file before parsing
        #[arg(long)]
        save_dump: Option<PathBuf>,
    },
    /// Parse a dump file and print the extracted table records
    Parse {
        /// Path to the dump file
        dump: PathBuf,
        /// Output format (json, summary)
        #[arg(long, default_value = "json")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            config,
            dump,
            out,
            save_dump,
        } => handle_generate(&GenerateArgs {
            config,
            dump,
            out,
            save_dump,
        })?,
        Commands::Parse { dump, format } => handle_parse(&ParseArgs { dump, format })?,
    }
    Ok(())
}
