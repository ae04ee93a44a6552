//! CLI module for the mysql-entity-gen binary

pub mod commands;
pub mod error;

pub use error::CliError;
