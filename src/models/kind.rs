//! Semantic type classification for raw SQL column types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse value category a SQL column type is classified into for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticKind {
    Byte,
    Short,
    Int,
    Long,
    /// Character, text and blob types
    Str,
    Float,
    Double,
    /// Date, datetime, timestamp, time and year types
    Date,
    /// No pattern matched; rendered as a nullable "any" placeholder
    Unknown,
}

impl std::fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticKind::Byte => write!(f, "byte"),
            SemanticKind::Short => write!(f, "short"),
            SemanticKind::Int => write!(f, "int"),
            SemanticKind::Long => write!(f, "long"),
            SemanticKind::Str => write!(f, "string"),
            SemanticKind::Float => write!(f, "float"),
            SemanticKind::Double => write!(f, "double"),
            SemanticKind::Date => write!(f, "date"),
            SemanticKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Ordered (kind, pattern) pairs. Classification walks this list top to
/// bottom and takes the first match, so the order here is load-bearing:
/// `tinyint` must be tested before the bare `int` alternation, `datetime`
/// is covered by the anchored `date` alternation, and so on.
static TYPE_PATTERNS: Lazy<Vec<(SemanticKind, Regex)>> = Lazy::new(|| {
    vec![
        (SemanticKind::Byte, pattern("tinyint")),
        (SemanticKind::Short, pattern("smallint")),
        (SemanticKind::Int, pattern("mediumint|int|integer")),
        (SemanticKind::Long, pattern("bigint")),
        (SemanticKind::Str, pattern(".*char|.*text|.*blob")),
        (SemanticKind::Float, pattern("float")),
        (SemanticKind::Double, pattern("double|decimal")),
        (
            SemanticKind::Date,
            pattern("date|datetime|timestamp|time|year"),
        ),
    ]
});

fn pattern(alternation: &str) -> Regex {
    Regex::new(&format!("(?i)^(?:{})$", alternation)).unwrap()
}

/// Classify a raw SQL type token (e.g. `int`, `varchar`, `decimal`) into its
/// semantic kind. Total: anything unmatched is `Unknown`.
pub fn classify_sql_type(sql_type: &str) -> SemanticKind {
    let token = sql_type.trim();
    for (kind, re) in TYPE_PATTERNS.iter() {
        if re.is_match(token) {
            return *kind;
        }
    }
    SemanticKind::Unknown
}
