//! MySQL entity generator
//!
//! Converts a textual MySQL schema dump into annotated entity source files,
//! one per table:
//! - Dump parsing (pattern extraction, not a SQL grammar)
//! - Type classification and entity code emission
//! - Configuration, dump acquisition and output writing
//! - CLI binary (feature `cli`)

pub mod config;
pub mod export;
pub mod import;
pub mod models;
pub mod source;
pub mod storage;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use config::{ConfigError, GeneratorConfig};
pub use export::{EntityEmitter, EntityRenderer, ExportError, KotlinJpaRenderer, RenderedFile};
pub use import::{ImportError, MysqlDumpParser, ParseResult};
pub use models::{Field, KeyKind, SemanticKind, Table, classify_sql_type};
pub use source::{MysqldumpSource, SchemaSource, SourceError};
pub use storage::{FileWriter, StorageError};
