//! Table model: one parsed CREATE TABLE block

use super::field::Field;
use serde::{Deserialize, Serialize};

/// A parsed table: name, optional comment and ordered column records.
///
/// Field order follows the dump's declaration order. Field names are unique
/// within a table; a repeated definition replaces the earlier one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Trailing `COMMENT='...'` text; empty when the dump carries none
    #[serde(default)]
    pub comment: String,
    pub fields: Vec<Field>,
}

impl Table {
    pub fn new(name: String, comment: String) -> Self {
        Self {
            name,
            comment,
            fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Insert a field, replacing any earlier definition with the same name
    /// while keeping its original position.
    pub fn insert_field(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_field(name: &str, sql_type: &str) -> Field {
        Field {
            name: name.to_string(),
            raw_definition: format!("{} DEFAULT NULL", sql_type),
            sql_type: sql_type.to_string(),
            length: None,
            keys: Vec::new(),
            default: None,
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut t = Table::new("user".to_string(), String::new());
        t.insert_field(sample_field("id", "int"));
        t.insert_field(sample_field("name", "varchar"));
        let names: Vec<_> = t.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut t = Table::new("user".to_string(), String::new());
        t.insert_field(sample_field("id", "int"));
        t.insert_field(sample_field("name", "varchar"));
        t.insert_field(sample_field("id", "bigint"));
        assert_eq!(t.fields.len(), 2);
        assert_eq!(t.fields[0].sql_type, "bigint");
    }
}
