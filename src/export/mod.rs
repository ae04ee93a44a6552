//! Entity export functionality
//!
//! Turns parsed `Table` records into rendered source files. The emitter owns
//! table selection, naming and output-path composition; everything
//! framework-specific (annotation vocabulary, type names, constructor shape)
//! sits behind the `EntityRenderer` trait so alternate targets can be
//! plugged in without touching the parser.

pub mod entity;
pub mod kotlin;

use std::path::PathBuf;

use crate::config::ConfigError;

/// One rendered source file. The emitter performs no I/O; writing these out
/// is the storage layer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    /// Output root joined with one directory per package segment plus
    /// `<ClassName>.<ext>`
    pub path: PathBuf,
    pub contents: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Configuration problems are surfaced before any table is rendered
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub use entity::{EntityEmitter, EntityRenderer, FieldDeclaration};
pub use kotlin::KotlinJpaRenderer;
