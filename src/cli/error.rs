//! CLI error type

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::source::SourceError;
use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Schema source error: {0}")]
    Source(#[from] SourceError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Output error: {0}")]
    Output(String),
}
