//! Kotlin data-class renderer with JPA annotations

use super::entity::{EntityRenderer, FieldDeclaration};
use crate::models::{Field, KeyKind, SemanticKind, Table, classify_sql_type};

const INDENT: &str = "    ";

/// Renders each table as a Kotlin data class annotated for JPA.
///
/// Every field is declared nullable so a no-arg constructed instance is
/// always valid, whatever the source column's nullability said.
#[derive(Debug, Default)]
pub struct KotlinJpaRenderer;

impl KotlinJpaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRenderer for KotlinJpaRenderer {
    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn render_preamble(&self, package: &str, uses_temporal: bool) -> Vec<String> {
        let mut lines = vec![
            format!("package {}", package),
            String::new(),
            "import javax.persistence.*".to_string(),
        ];
        if uses_temporal {
            lines.push("import java.util.*".to_string());
        }
        lines.push(String::new());
        lines
    }

    fn render_header(&self, table: &Table, class_name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if !table.comment.is_empty() {
            lines.push(format!("/**{}*/", table.comment));
        }
        lines.push("@Entity".to_string());
        // Backticks guard the original name against reserved-word collisions
        lines.push(format!("@Table(name = \"`{}`\")", table.name));
        lines.push(format!("data class {}(", class_name));
        lines
    }

    fn render_field_annotations(&self, field: &Field, generation_strategy: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if field.has_key(&KeyKind::Primary) {
            lines.push(format!("{INDENT}@Id"));
        }
        if field.is_auto_increment() {
            lines.push(format!(
                "{INDENT}@GeneratedValue(strategy = GenerationType.{})",
                generation_strategy
            ));
        }
        let unique = if field.has_key(&KeyKind::Unique) {
            " unique = true,"
        } else {
            ""
        };
        lines.push(format!(
            "{INDENT}@Column(name = \"`{}`\",{} columnDefinition = \"{}\")",
            field.name, unique, field.raw_definition
        ));
        lines
    }

    fn render_type_declaration(&self, field: &Field, identifier: &str) -> FieldDeclaration {
        let kind = classify_sql_type(&field.sql_type);
        let default = field.default.as_deref();
        let (type_name, initializer) = match kind {
            SemanticKind::Byte => ("Byte", default.map(str::to_string)),
            SemanticKind::Short => ("Short", default.map(str::to_string)),
            SemanticKind::Int => ("Int", default.map(str::to_string)),
            SemanticKind::Long => ("Long", default.map(|v| format!("{}L", v))),
            SemanticKind::Str => ("String", default.map(|v| format!("\"{}\"", v))),
            SemanticKind::Float => ("Float", default.map(|v| format!("{}f", v))),
            SemanticKind::Double => ("Double", default.map(str::to_string)),
            // Literal temporal defaults are rare; emitted as-is for manual review
            SemanticKind::Date => ("Date", default.map(str::to_string)),
            SemanticKind::Unknown => ("Any", None),
        };
        let line = match initializer {
            Some(value) => format!("{INDENT}var {}: {}? = {},", identifier, type_name, value),
            None => format!("{INDENT}var {}: {}?,", identifier, type_name),
        };
        FieldDeclaration {
            line,
            temporal: kind == SemanticKind::Date,
        }
    }

    fn render_constructor(&self, field_count: usize) -> Vec<String> {
        let nulls = vec!["null"; field_count].join(", ");
        vec![
            ") {".to_string(),
            format!("{INDENT}constructor() : this({})", nulls),
            "}".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, sql_type: &str, default: Option<&str>) -> Field {
        Field {
            name: name.to_string(),
            raw_definition: format!("{} DEFAULT NULL", sql_type),
            sql_type: sql_type.to_string(),
            length: None,
            keys: Vec::new(),
            default: default.map(str::to_string),
        }
    }

    fn renderer() -> KotlinJpaRenderer {
        KotlinJpaRenderer::new()
    }

    #[test]
    fn test_string_default_is_requoted() {
        let decl = renderer().render_type_declaration(&field("name", "varchar", Some("anon")), "name");
        assert_eq!(decl.line, "    var name: String? = \"anon\",");
        assert!(!decl.temporal);
    }

    #[test]
    fn test_long_and_float_suffixes() {
        let long = renderer().render_type_declaration(&field("n", "bigint", Some("7")), "n");
        assert_eq!(long.line, "    var n: Long? = 7L,");
        let float = renderer().render_type_declaration(&field("f", "float", Some("1.5")), "f");
        assert_eq!(float.line, "    var f: Float? = 1.5f,");
    }

    #[test]
    fn test_unknown_kind_renders_any_without_default() {
        let decl = renderer().render_type_declaration(&field("shape", "geometry", Some("x")), "shape");
        assert_eq!(decl.line, "    var shape: Any?,");
    }

    #[test]
    fn test_temporal_declaration_sets_flag() {
        let decl = renderer().render_type_declaration(&field("born", "date", None), "born");
        assert_eq!(decl.line, "    var born: Date?,");
        assert!(decl.temporal);
    }

    #[test]
    fn test_preamble_temporal_import_is_conditional() {
        let with = renderer().render_preamble("com.example", true);
        assert!(with.contains(&"import java.util.*".to_string()));
        let without = renderer().render_preamble("com.example", false);
        assert!(!without.contains(&"import java.util.*".to_string()));
    }

    #[test]
    fn test_primary_key_and_generated_value_annotations() {
        let mut id = field("id", "int", None);
        id.raw_definition = "int(11) NOT NULL AUTO_INCREMENT".to_string();
        id.add_key(KeyKind::Primary);
        let lines = renderer().render_field_annotations(&id, "IDENTITY");
        assert_eq!(lines[0], "    @Id");
        assert_eq!(lines[1], "    @GeneratedValue(strategy = GenerationType.IDENTITY)");
        assert!(lines[2].starts_with("    @Column(name = \"`id`\","));
    }

    #[test]
    fn test_unique_flag_in_column_annotation() {
        let mut code = field("code", "varchar", None);
        code.add_key(KeyKind::Unique);
        let lines = renderer().render_field_annotations(&code, "IDENTITY");
        assert!(lines[0].contains("unique = true,"));
    }
}
