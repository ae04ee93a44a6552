//! Schema source abstraction
//!
//! A `SchemaSource` produces the raw dump text the parser consumes. The
//! default implementation shells out to `mysqldump`; tests and the CLI's
//! `--dump` flag substitute a file instead.

use std::process::Command;

use tracing::debug;

use crate::config::DatabaseConfig;

/// Error obtaining the schema dump
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to run {command}: {reason}")]
    Spawn { command: String, reason: String },
    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("Dump output is not valid UTF-8")]
    InvalidOutput,
}

/// Produces the full schema dump text for a database.
pub trait SchemaSource {
    fn fetch(&self) -> Result<String, SourceError>;
}

/// Fetches the schema by invoking `mysqldump --opt -d`.
#[derive(Debug)]
pub struct MysqldumpSource {
    host: String,
    database: String,
    user: String,
    password: String,
}

impl MysqldumpSource {
    pub fn new(host: &str, database: &str, user: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            database: database.to_string(),
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(&config.host, &config.name, &config.user, &config.password)
    }

    /// Argument list for the mysqldump invocation. The host flag is omitted
    /// for localhost, the password flag when no password is configured.
    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.host.is_empty() && self.host != "localhost" {
            args.push("-h".to_string());
            args.push(self.host.clone());
        }
        args.push(format!("-u{}", self.user));
        if !self.password.is_empty() {
            args.push(format!("-p{}", self.password));
        }
        args.push("--opt".to_string());
        args.push("-d".to_string());
        args.push(self.database.clone());
        args
    }
}

impl SchemaSource for MysqldumpSource {
    fn fetch(&self) -> Result<String, SourceError> {
        let args = self.args();
        debug!(database = %self.database, "running mysqldump");
        let output = Command::new("mysqldump")
            .args(&args)
            .output()
            .map_err(|e| SourceError::Spawn {
                command: "mysqldump".to_string(),
                reason: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                command: "mysqldump".to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| SourceError::InvalidOutput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_host_args() {
        let source = MysqldumpSource::new("db.example.com", "shop", "root", "secret");
        assert_eq!(
            source.args(),
            vec!["-h", "db.example.com", "-uroot", "-psecret", "--opt", "-d", "shop"]
        );
    }

    #[test]
    fn test_localhost_and_empty_password_flags_omitted() {
        let source = MysqldumpSource::new("localhost", "shop", "root", "");
        assert_eq!(source.args(), vec!["-uroot", "--opt", "-d", "shop"]);
    }
}
