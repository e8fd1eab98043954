// sentinel-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(sentinel::infra::database::duckdb),
        help("DuckDB could not read the file. Check the delimiter and the header row.")
    )]
    DuckDB(#[from] duckdb::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sentinel::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {0}")]
    #[diagnostic(code(sentinel::infra::file_missing))]
    FileNotFound(String),

    // --- SERIALIZATION ---
    #[error("YAML Error: {0}")]
    #[diagnostic(
        code(sentinel::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(sentinel::infra::json))]
    JsonError(#[from] serde_json::Error),

    // --- CONFIG ---
    #[error("Configuration Error: {0}")]
    #[diagnostic(code(sentinel::infra::config))]
    ConfigError(String),

    #[error("Configuration not found: {0}")]
    #[diagnostic(code(sentinel::infra::config_missing))]
    ConfigNotFound(String),
}

// Shortcut for `?` on duckdb calls
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
