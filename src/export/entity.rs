//! Entity emitter: drives a renderer over parsed tables

use std::path::PathBuf;

use tracing::{debug, warn};

use super::{ExportError, RenderedFile};
use crate::config::GeneratorConfig;
use crate::models::{Field, Table};

/// Fallback id-generation strategy when the config leaves it unset.
const DEFAULT_GENERATION_STRATEGY: &str = "IDENTITY";

/// A rendered field declaration line plus whether it used a temporal type,
/// so the preamble can add the temporal import only when needed.
#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    pub line: String,
    pub temporal: bool,
}

/// Capability set a target framework/language must provide.
///
/// The emitter composes these in a fixed order: preamble, header, then per
/// field annotations and declaration, then constructor/close.
pub trait EntityRenderer {
    /// Source-file extension without the dot, e.g. `kt`
    fn file_extension(&self) -> &'static str;

    /// File head: namespace declaration and imports. `uses_temporal` is true
    /// when some field declaration rendered a temporal type.
    fn render_preamble(&self, package: &str, uses_temporal: bool) -> Vec<String>;

    /// Class-level comment, entity/table annotations and the class opening
    fn render_header(&self, table: &Table, class_name: &str) -> Vec<String>;

    /// Identity, generated-value and column annotations for one field
    fn render_field_annotations(&self, field: &Field, generation_strategy: &str) -> Vec<String>;

    /// The field's typed declaration with its rendered default literal
    fn render_type_declaration(&self, field: &Field, identifier: &str) -> FieldDeclaration;

    /// Closes the declaration list and emits the no-arg constructor plus the
    /// class closing
    fn render_constructor(&self, field_count: usize) -> Vec<String>;
}

/// Renders parsed tables into entity source files through a pluggable
/// renderer. Stateless per table; tables are independent of each other.
pub struct EntityEmitter<R> {
    renderer: R,
}

impl<R: EntityRenderer> EntityEmitter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render every selected table into a (path, contents) pair.
    ///
    /// Config problems are reported before any rendering begins. Tables not
    /// on a non-empty allow-list are skipped, as are degenerate tables with
    /// no fields (the parser already warns about those).
    pub fn render(
        &self,
        tables: &[Table],
        config: &GeneratorConfig,
    ) -> Result<Vec<RenderedFile>, ExportError> {
        config.validate_for_render()?;

        let strategy = generation_strategy(config);
        let out_dir = output_dir(config);
        let allow_list = &config.output.tables;

        let mut files = Vec::new();
        for table in tables {
            if !allow_list.is_empty() && !allow_list.contains(&table.name) {
                debug!(table = %table.name, "not on allow-list, skipping");
                continue;
            }
            if table.fields.is_empty() {
                warn!(table = %table.name, "table has no fields, skipping");
                continue;
            }
            let class_name = pascal_case(&table.name);
            let contents = self.render_table(table, &class_name, &config.output.package, &strategy);
            let path = out_dir.join(format!("{}.{}", class_name, self.renderer.file_extension()));
            files.push(RenderedFile { path, contents });
        }
        Ok(files)
    }

    fn render_table(
        &self,
        table: &Table,
        class_name: &str,
        package: &str,
        strategy: &str,
    ) -> String {
        let mut body = self.renderer.render_header(table, class_name);
        let mut uses_temporal = false;
        for field in &table.fields {
            body.extend(self.renderer.render_field_annotations(field, strategy));
            let identifier = camel_case(&field.name);
            let decl = self.renderer.render_type_declaration(field, &identifier);
            uses_temporal |= decl.temporal;
            body.push(decl.line);
        }
        body.extend(self.renderer.render_constructor(table.fields.len()));

        let mut lines = self.renderer.render_preamble(package, uses_temporal);
        lines.extend(body);
        let mut contents = lines.join("\n");
        contents.push('\n');
        contents
    }
}

fn generation_strategy(config: &GeneratorConfig) -> String {
    let configured = config.jpa.generation_strategy.trim();
    if configured.is_empty() {
        DEFAULT_GENERATION_STRATEGY.to_string()
    } else {
        configured.to_uppercase()
    }
}

/// Output root joined with one directory level per package segment.
fn output_dir(config: &GeneratorConfig) -> PathBuf {
    let mut dir = PathBuf::from(&config.output.path);
    for segment in config.output.package.split('.').filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir
}

/// `some_table_name` -> `SomeTableName`
pub fn pascal_case(name: &str) -> String {
    case_join(name, true)
}

/// `some_column_name` -> `someColumnName`
pub fn camel_case(name: &str) -> String {
    case_join(name, false)
}

fn case_join(name: &str, capitalize_first: bool) -> String {
    name.split('_')
        .enumerate()
        .map(|(i, segment)| {
            if i == 0 && !capitalize_first {
                segment.to_lowercase()
            } else {
                capitalize(segment)
            }
        })
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("user"), "User");
        assert_eq!(pascal_case("order_item"), "OrderItem");
        assert_eq!(pascal_case("HTTP_log"), "HttpLog");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_id"), "userId");
        assert_eq!(camel_case("key"), "key");
        assert_eq!(camel_case("created_at_time"), "createdAtTime");
    }

    #[test]
    fn test_output_dir_from_package_segments() {
        let mut config = GeneratorConfig::default();
        config.output.path = "src/main/kotlin".to_string();
        config.output.package = "com.example.entity".to_string();
        assert_eq!(
            output_dir(&config),
            PathBuf::from("src/main/kotlin/com/example/entity")
        );
    }

    #[test]
    fn test_generation_strategy_defaults_and_uppercases() {
        let mut config = GeneratorConfig::default();
        assert_eq!(generation_strategy(&config), "IDENTITY");
        config.jpa.generation_strategy = "sequence".to_string();
        assert_eq!(generation_strategy(&config), "SEQUENCE");
    }
}
