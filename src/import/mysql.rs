//! MySQL dump parser
//!
//! Pattern-based extraction of table structure from mysqldump output, not a
//! SQL grammar. A dump is a sequence of segments separated by the literal
//! marker `Table structure for table`, each holding one
//! `CREATE TABLE ... ENGINE ... [COMMENT='...']` statement.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::{ImportError, ParseResult};
use crate::models::{Field, KeyKind, Table};

/// Literal separator mysqldump writes before each table's section.
const TABLE_SEGMENT_MARKER: &str = "Table structure for table";

/// Splits a segment into [table name] [definition body] [table comment].
static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)CREATE TABLE `(.+?)` \((.*)\) ENGINE(?:.*COMMENT='(.*)')?").unwrap()
});

/// Splits a definition row into [name] [definition] [type] [length] [default tail].
static FIELD_DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^`(.+?)` (([A-Za-z0-9_]+)(?:\((.+?)\))?.*?(?:\s+DEFAULT\s+(.+))?)$").unwrap()
});

/// Extracts [key kind] [column name] from a key-constraint row.
static FIELD_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^(.+?)\s+KEY.*\(`(.+?)`\)").unwrap());

/// Best-effort parser for mysqldump schema output.
#[derive(Debug, Default)]
pub struct MysqlDumpParser;

impl MysqlDumpParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a full dump into ordered table records.
    ///
    /// Segments that do not contain a recognizable CREATE TABLE shape are
    /// dropped silently; row-level inconsistencies are recorded as warnings
    /// on the returned result.
    pub fn parse(&self, dump: &str) -> ParseResult {
        let mut result = ParseResult::default();
        for segment in dump.split(TABLE_SEGMENT_MARKER) {
            let Some(caps) = TABLE_RE.captures(segment) else {
                continue;
            };
            let name = caps[1].to_string();
            let body = caps[2].to_string();
            let comment = caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            let mut table = Table::new(name, comment);
            for row in split_definition_rows(&body) {
                self.parse_row(&row, &mut table, &mut result.warnings);
            }

            if table.fields.is_empty() {
                warn!(table = %table.name, "no column definitions recognized, skipping table");
                result.warnings.push(ImportError::EmptyTable {
                    table: table.name,
                });
                continue;
            }
            debug!(table = %table.name, fields = table.fields.len(), "parsed table");
            result.tables.push(table);
        }
        result
    }

    /// Try the field-definition pattern first, the key-constraint pattern
    /// second; rows matching neither are ignored.
    fn parse_row(&self, row: &str, table: &mut Table, warnings: &mut Vec<ImportError>) {
        if let Some(caps) = FIELD_DEF_RE.captures(row) {
            let default = caps.get(5).and_then(|m| normalize_default(m.as_str()));
            table.insert_field(Field {
                name: caps[1].to_string(),
                raw_definition: caps[2].trim().to_string(),
                sql_type: caps[3].to_string(),
                length: caps.get(4).map(|m| m.as_str().to_string()),
                keys: Vec::new(),
                default,
            });
            return;
        }
        if let Some(caps) = FIELD_KEY_RE.captures(row) {
            let kind = KeyKind::from_token(&caps[1]);
            let column = &caps[2];
            match table.field_mut(column) {
                Some(field) => field.add_key(kind),
                None => {
                    warn!(table = %table.name, column, "key constraint references unknown column");
                    warnings.push(ImportError::OrphanKeyReference {
                        table: table.name.clone(),
                        column: column.to_string(),
                    });
                }
            }
        }
    }
}

/// Split a CREATE TABLE body into definition rows on top-level commas.
///
/// Commas nested in parentheses (`decimal(10,2)`) or single-quoted strings
/// (`DEFAULT 'a,b'`) do not split. Rows come back trimmed with embedded
/// newlines removed; empty rows are dropped.
fn split_definition_rows(body: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_quote = false;
    for ch in body.chars() {
        match ch {
            '\'' => {
                in_quote = !in_quote;
                current.push(ch);
            }
            '(' if !in_quote => {
                depth += 1;
                current.push(ch);
            }
            ')' if !in_quote => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 && !in_quote => {
                rows.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    rows.push(current);
    rows.iter()
        .map(|r| r.replace('\n', " ").trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

/// Normalize a raw `DEFAULT ...` tail into a bare literal.
///
/// Keeps the first whitespace-delimited token, strips single quotes, and
/// treats `NULL` and `CURRENT_TIMESTAMP` as "no default". Idempotent: a
/// normalized literal normalizes to itself.
fn normalize_default(tail: &str) -> Option<String> {
    let token = tail.split_whitespace().next()?;
    static NO_DEFAULT_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)^(?:NULL|CURRENT_TIMESTAMP)").unwrap());
    if NO_DEFAULT_RE.is_match(token) {
        return None;
    }
    let literal = token.replace('\'', "");
    if literal.is_empty() {
        None
    } else {
        Some(literal)
    }
}
