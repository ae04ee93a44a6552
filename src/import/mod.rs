//! Dump import functionality
//!
//! Parses MySQL schema dumps (mysqldump `-d` output) into `Table` records.
//! Parsing is best-effort: segments and rows that do not match the expected
//! shape are skipped, recoverable oddities are surfaced as warnings instead
//! of failing the whole parse.

pub mod mysql;

use crate::models::Table;

/// Result of parsing a schema dump.
///
/// The parse itself never fails; `warnings` carries everything that was
/// recovered from rather than reported as a hard error.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Tables in the order their dump segments were encountered
    pub tables: Vec<Table>,
    /// Recoverable inconsistencies encountered while parsing
    pub warnings: Vec<ImportError>,
}

/// Recoverable problems found in a dump.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// A key-constraint row referenced a column the table never declared.
    /// The key is dropped; the reference is reported here rather than
    /// silently discarded.
    #[error("table `{table}`: key constraint references unknown column `{column}`")]
    OrphanKeyReference { table: String, column: String },
    /// A CREATE TABLE block yielded no recognizable column definitions.
    /// The table is dropped so no empty entity is ever rendered.
    #[error("table `{table}`: no recognizable column definitions, skipped")]
    EmptyTable { table: String },
}

pub use mysql::MysqlDumpParser;
