//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::ParseError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Statement is not a type expression
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Statement names an invalid type
    #[error("{statement}: {source}")]
    Type {
        statement: String,
        #[source]
        source: coltypes_core::Error,
    },
}
