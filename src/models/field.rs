//! Field model: one column extracted from a CREATE TABLE body

use serde::{Deserialize, Serialize};

/// Kind of key constraint attached to a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyKind {
    Primary,
    Unique,
    /// Any other `<KIND> KEY` clause kind, kept verbatim (e.g. `FOREIGN`)
    #[serde(untagged)]
    Other(String),
}

impl KeyKind {
    /// Parse a key kind token from a constraint row. Matching is
    /// case-insensitive; unrecognized kinds are preserved as `Other`.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("PRIMARY") {
            KeyKind::Primary
        } else if token.eq_ignore_ascii_case("UNIQUE") {
            KeyKind::Unique
        } else {
            KeyKind::Other(token.to_string())
        }
    }
}

/// A single column definition.
///
/// Immutable once parsing completes. `keys` has set semantics: a kind is
/// appended at most once even when several key lines reference the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Column identifier as written in the dump
    pub name: String,
    /// Full definition text after the name, e.g.
    /// `int(11) NOT NULL AUTO_INCREMENT`. Carried verbatim into the
    /// rendered column annotation; also used to detect auto-increment.
    pub raw_definition: String,
    /// Leading type token, e.g. `int`, `varchar`, `decimal`
    pub sql_type: String,
    /// Parenthesized length/precision text, e.g. `10,2`; never parsed further
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// Key constraints accumulated from key-declaration rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeyKind>,
    /// Normalized default literal, already stripped of SQL quoting.
    /// `NULL` and `CURRENT_TIMESTAMP` defaults normalize to `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Field {
    pub fn has_key(&self, kind: &KeyKind) -> bool {
        self.keys.contains(kind)
    }

    /// Append a key kind, preserving set semantics.
    pub fn add_key(&mut self, kind: KeyKind) {
        if !self.keys.contains(&kind) {
            self.keys.push(kind);
        }
    }

    /// Whether the column definition carries an auto-increment marker.
    pub fn is_auto_increment(&self) -> bool {
        self.raw_definition.to_uppercase().contains("AUTO_INCREMENT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field {
            name: "id".to_string(),
            raw_definition: "int(11) NOT NULL AUTO_INCREMENT".to_string(),
            sql_type: "int".to_string(),
            length: Some("11".to_string()),
            keys: Vec::new(),
            default: None,
        }
    }

    #[test]
    fn test_key_kind_from_token() {
        assert_eq!(KeyKind::from_token("PRIMARY"), KeyKind::Primary);
        assert_eq!(KeyKind::from_token("primary"), KeyKind::Primary);
        assert_eq!(KeyKind::from_token("UNIQUE"), KeyKind::Unique);
        assert_eq!(
            KeyKind::from_token("FOREIGN"),
            KeyKind::Other("FOREIGN".to_string())
        );
    }

    #[test]
    fn test_add_key_is_set_like() {
        let mut f = field();
        f.add_key(KeyKind::Primary);
        f.add_key(KeyKind::Primary);
        f.add_key(KeyKind::Unique);
        assert_eq!(f.keys, vec![KeyKind::Primary, KeyKind::Unique]);
    }

    #[test]
    fn test_auto_increment_detection() {
        assert!(field().is_auto_increment());
        let mut plain = field();
        plain.raw_definition = "varchar(50) DEFAULT NULL".to_string();
        assert!(!plain.is_auto_increment());
    }
}
